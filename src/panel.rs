use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::trace;

use crate::error::PanelError;
use crate::framebuffer::Framebuffer;
use crate::geometry::PanelTiming;

/// Serial lane carrying panel rows.
///
/// The panel latches a row on clock edges sent while HS is low, so the clock
/// line must be drivable as a plain output between transfers.
pub trait RowBus {
    type Error;
    type Clock: OutputPin;

    /// Shifts out one row and returns once the last bit has left.
    fn write_row(&mut self, row: &[u8]) -> Result<(), Self::Error>;

    /// Lends the clock line to `f` as a GPIO output, then hands it back to the bus.
    fn with_clock<R>(&mut self, f: impl FnOnce(&mut Self::Clock) -> R) -> R;
}

/// Row-by-row scan-out to an EL320.256 style panel.
///
/// Each row starts with HS held low while the clock line is pulsed
/// `hsync_clocks` times, then the row is shifted out. VS is raised for the
/// first row of a frame and pulsed low once that row is out. After the last
/// row a blank HS pulse is sent and VS is dropped.
pub struct Panel<BUS, HS, VS, D> {
    bus: BUS,
    hs_pin: HS,
    vs_pin: VS,
    delay: D,
    timing: PanelTiming,
}

impl<BUS, HS, VS, D, P> Panel<BUS, HS, VS, D>
where
    BUS: RowBus,
    BUS::Clock: OutputPin<Error = P>,
    HS: OutputPin<Error = P>,
    VS: OutputPin<Error = P>,
    D: DelayNs,
{
    pub fn new(bus: BUS, hs_pin: HS, vs_pin: VS, delay: D, timing: PanelTiming) -> Self {
        Self {
            bus,
            hs_pin,
            vs_pin,
            delay,
            timing,
        }
    }

    pub fn push_frame(&mut self, frame: &Framebuffer<'_>) -> Result<(), PanelError<BUS::Error, P>> {
        let depth = frame.geometry().depth;

        for row in 0..depth {
            self.hsync()?;

            if row == 0 {
                self.vs_pin.set_high().map_err(PanelError::Pin)?;
            }

            self.bus.write_row(frame.row_slice(row)).map_err(PanelError::Spi)?;

            if row == 0 {
                self.delay.delay_ns(self.timing.vsync_setup_ns);
                self.vs_pin.set_low().map_err(PanelError::Pin)?;
                self.delay.delay_ns(self.timing.vsync_hold_ns);
                self.vs_pin.set_high().map_err(PanelError::Pin)?;
            }

            self.delay.delay_us(self.timing.row_period_us);
        }

        // blank row closes the frame
        self.hsync()?;
        self.vs_pin.set_low().map_err(PanelError::Pin)?;

        trace!("pushed {} rows", depth);
        Ok(())
    }

    pub fn release(self) -> (BUS, HS, VS, D) {
        (self.bus, self.hs_pin, self.vs_pin, self.delay)
    }

    fn hsync(&mut self) -> Result<(), PanelError<BUS::Error, P>> {
        let timing = self.timing;
        let hs_pin = &mut self.hs_pin;
        let delay = &mut self.delay;

        self.bus
            .with_clock(|ck| -> Result<(), P> {
                hs_pin.set_low()?;
                for _ in 0..timing.hsync_clocks {
                    ck.set_low()?;
                    delay.delay_ns(timing.clock_half_ns);
                    ck.set_high()?;
                    delay.delay_ns(timing.clock_half_ns);
                }
                hs_pin.set_high()
            })
            .map_err(PanelError::Pin)
    }
}
