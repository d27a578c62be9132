use log::{debug, trace};

use crate::error::SpanError;
use crate::geometry::Geometry;

/// A span checked against a [`Geometry`]: `x1 <= x2 < bit_width`, `row < depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanRequest {
    x1: usize,
    x2: usize,
    row: usize,
}

impl SpanRequest {
    pub fn new(geometry: Geometry, x1: usize, x2: usize, row: usize) -> Result<Self, SpanError> {
        if x1 > x2 {
            return Err(SpanError::InvertedRange { x1, x2 });
        }
        if x2 >= geometry.bit_width() {
            return Err(SpanError::EndOutOfBounds {
                x2,
                bit_width: geometry.bit_width(),
            });
        }
        if row >= geometry.depth {
            return Err(SpanError::RowOutOfBounds {
                row,
                depth: geometry.depth,
            });
        }
        Ok(Self { x1, x2, row })
    }

    pub fn x1(&self) -> usize {
        self.x1
    }

    pub fn x2(&self) -> usize {
        self.x2
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Number of pixels the span covers. Never zero.
    pub fn pixel_count(&self) -> usize {
        self.x2 - self.x1 + 1
    }

    pub fn first_byte(&self, geometry: Geometry) -> usize {
        geometry.byte_index(self.x1, self.row)
    }
}

/// Writes made while filling a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanFill {
    /// Bytes stored whole as `0xFF`.
    pub full_bytes: usize,
    /// Pixels set one at a time.
    pub single_bits: usize,
}

/// Clears the first `width * depth` bytes of `screen`, then sets pixels
/// `x1..=x2` of `row`.
///
/// `None` leaves nothing to do and returns [`SpanError::NoBuffer`]. Any other
/// rejected request still blanks the buffer, so ignoring the error leaves the
/// screen in a safe state.
pub fn draw_screen(
    screen: Option<&mut [u8]>,
    width: usize,
    depth: usize,
    x1: usize,
    x2: usize,
    row: usize,
) -> Result<SpanFill, SpanError> {
    let Some(screen) = screen else {
        debug!("no screen to draw span {}..={} into", x1, x2);
        return Err(SpanError::NoBuffer);
    };
    let geometry = Geometry::new(width, depth);

    init_screen(screen, width, depth);

    if screen.len() < geometry.byte_len() {
        let err = SpanError::BufferTooSmall {
            len: screen.len(),
            required: geometry.byte_len(),
        };
        debug!("span rejected: {}", err);
        return Err(err);
    }

    let request = SpanRequest::new(geometry, x1, x2, row).inspect_err(|err| {
        debug!("span rejected: {}", err);
    })?;
    Ok(fill_span(screen, geometry, &request))
}

/// Sets the pixels of `request` without clearing anything first.
pub(crate) fn fill_span(screen: &mut [u8], geometry: Geometry, request: &SpanRequest) -> SpanFill {
    let mut fill = SpanFill::default();
    let x2 = request.x2;
    let mut bit_index = request.x1;
    let mut byte_index = request.first_byte(geometry);

    while bit_index <= x2 {
        let bit_offset = bit_index % 8;

        if is_partial_byte(bit_index, x2) {
            draw_next_bit(&mut screen[byte_index], bit_offset);
            if bit_offset == 7 {
                byte_index += 1;
            }
            bit_index += 1;
            fill.single_bits += 1;
        } else {
            screen[byte_index] = 0xFF;
            byte_index += 1;
            bit_index += 8;
            fill.full_bytes += 1;
        }
    }

    trace!(
        "span {}..={} on row {}: {} full bytes, {} single bits",
        request.x1,
        x2,
        request.row,
        fill.full_bytes,
        fill.single_bits
    );
    fill
}

/// True unless `cur_index` starts a byte and more than 8 pixels remain up to
/// and including `end_index`.
pub fn is_partial_byte(cur_index: usize, end_index: usize) -> bool {
    cur_index % 8 != 0 || end_index.saturating_sub(cur_index) < 8
}

/// Sets pixel `offset` (0 = leftmost) of `byte`. Only the low three bits of
/// `offset` are used.
pub fn draw_next_bit(byte: &mut u8, offset: usize) {
    *byte |= 0x80 >> (offset & 0x7);
}

/// Zeroes `width * depth` bytes, or the whole slice if it is shorter.
pub fn init_screen(screen: &mut [u8], width: usize, depth: usize) {
    let len = width.saturating_mul(depth).min(screen.len());
    screen[..len].fill(0);
}
