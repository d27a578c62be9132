use log::debug;

use crate::dump::ScreenDump;
use crate::error::SpanError;
use crate::geometry::Geometry;
use crate::span::{self, SpanFill, SpanRequest};

/// A packed monochrome frame over caller-owned bytes.
pub struct Framebuffer<'a> {
    data: &'a mut [u8],
    geometry: Geometry,
}

impl<'a> Framebuffer<'a> {
    pub fn new(data: &'a mut [u8], geometry: Geometry) -> Result<Self, SpanError> {
        if data.len() < geometry.byte_len() {
            return Err(SpanError::BufferTooSmall {
                len: data.len(),
                required: geometry.byte_len(),
            });
        }
        Ok(Self { data, geometry })
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, value: bool) {
        let bit = 0x80u8 >> (x & 0x7);
        let byte = &mut self.data[self.geometry.byte_index(x, y)];
        if value {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.data[self.geometry.byte_index(x, y)] & (0x80u8 >> (x & 0x7)) != 0
    }

    pub fn clear(&mut self, value: bool) {
        let len = self.geometry.byte_len();
        self.data[..len].fill(if value { 0xFFu8 } else { 0u8 });
    }

    /// Blanks the frame and draws a single span, like [`draw_screen`](crate::draw_screen).
    pub fn draw_span(&mut self, x1: usize, x2: usize, row: usize) -> Result<SpanFill, SpanError> {
        self.clear(false);
        let request = SpanRequest::new(self.geometry, x1, x2, row).inspect_err(|err| {
            debug!("span rejected: {}", err);
        })?;
        Ok(span::fill_span(self.data, self.geometry, &request))
    }

    pub fn row_slice(&self, y: usize) -> &[u8] {
        let width = self.geometry.width;
        &self.data[y * width..(y + 1) * width]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.geometry.byte_len()]
    }

    pub fn dump(&self) -> ScreenDump<'_> {
        ScreenDump::new(self.as_bytes(), self.geometry.width, self.geometry.depth)
    }
}
