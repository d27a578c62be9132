/// Size of a packed monochrome frame.
///
/// `width` counts bytes per row, not pixels; every byte carries 8 pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: usize,
    pub depth: usize,
}

/// The 320x256 EL panel: 40 bytes per row, 256 rows.
pub const EL320_256: Geometry = Geometry::new(320 / 8, 256);

impl Geometry {
    pub const fn new(width: usize, depth: usize) -> Self {
        Self { width, depth }
    }

    /// Pixels per row.
    pub const fn bit_width(&self) -> usize {
        self.width.saturating_mul(8)
    }

    /// Bytes in the whole frame.
    pub const fn byte_len(&self) -> usize {
        self.width.saturating_mul(self.depth)
    }

    /// Byte holding pixel `x` of row `y`.
    pub const fn byte_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x / 8
    }
}

/// Sync timings for [`Panel`](crate::Panel) scan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTiming {
    /// Clock pulses sent by hand while HS is low.
    pub hsync_clocks: u8,
    /// Low and high time of each of those pulses.
    pub clock_half_ns: u32,
    /// Delay between the first row transfer and the VS pulse.
    pub vsync_setup_ns: u32,
    /// Width of the VS low pulse.
    pub vsync_hold_ns: u32,
    /// Pause after every row.
    pub row_period_us: u32,
}

impl Default for PanelTiming {
    fn default() -> Self {
        PanelTiming {
            hsync_clocks: 4,
            clock_half_ns: 100,
            vsync_setup_ns: 1_000,
            vsync_hold_ns: 3_000,
            row_period_us: 60,
        }
    }
}
