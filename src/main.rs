#![no_std]
#![no_main]

use el320_span::{Framebuffer, Panel, PanelTiming, RowBus, EL320_256};
use embedded_hal::spi::SpiBus;
use fugit::{HertzU32, RateExtU32};
use panic_halt as _;

use waveshare_rp2040_zero::{hal::{self as hal, gpio::{bank0::*, FunctionSioOutput, FunctionSpi, OutputDriveStrength, OutputSlewRate, Pin, PinState, PullDown}, spi::FrameFormat, Clock, Spi, Timer}, XOSC_CRYSTAL_FREQ};
use hal::pac;

const SCREEN_BYTES: usize = EL320_256.byte_len();

type SpiPins = (Pin<Gpio3, FunctionSpi, PullDown>, Pin<Gpio2, FunctionSpi, PullDown>);
type ClockPin = Pin<Gpio2, FunctionSioOutput, PullDown>;
type DisplaySpi = Spi<hal::spi::Enabled, pac::SPI0, SpiPins, 8>;

fn parts_to_spi(spi0: pac::SPI0, pins: SpiPins, resets: &mut pac::RESETS, peripheral_freq: HertzU32) -> DisplaySpi {
    Spi::<_, _, _, 8>::new(spi0, pins)
        .init(resets, peripheral_freq, 20_000_000u32.Hz(), FrameFormat::MotorolaSpi(embedded_hal::spi::MODE_3))
}

/// SPI0 whose clock pin drops back to GPIO for the HS latch pulses.
struct LatchBus {
    // None only inside with_clock
    spi: Option<DisplaySpi>,
    resets: pac::RESETS,
    peripheral_freq: HertzU32,
}

impl RowBus for LatchBus {
    type Error = <DisplaySpi as embedded_hal::spi::ErrorType>::Error;
    type Clock = ClockPin;

    fn write_row(&mut self, row: &[u8]) -> Result<(), Self::Error> {
        let spi = self.spi.as_mut().unwrap();
        spi.write(row)?;
        spi.flush()
    }

    fn with_clock<R>(&mut self, f: impl FnOnce(&mut ClockPin) -> R) -> R {
        let spi = self.spi.take().unwrap().disable();
        let (spi0, (tx, ck)) = spi.free();
        let mut ck = ck.into_push_pull_output_in_state(PinState::Low);

        let result = f(&mut ck);

        let pins = (tx, ck.into_function());
        self.spi = Some(parts_to_spi(spi0, pins, &mut self.resets, self.peripheral_freq));
        result
    }
}

#[hal::entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);
    let sio = hal::Sio::new(pac.SIO);

    let clocks = hal::clocks::init_clocks_and_plls(
        XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .unwrap();

    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let mut hs_pin = pins.gpio0.into_push_pull_output_in_state(PinState::High);
    let mut vs_pin = pins.gpio1.into_push_pull_output_in_state(PinState::Low);
    hs_pin.set_drive_strength(OutputDriveStrength::FourMilliAmps);
    vs_pin.set_drive_strength(OutputDriveStrength::FourMilliAmps);
    hs_pin.set_slew_rate(OutputSlewRate::Slow);
    vs_pin.set_slew_rate(OutputSlewRate::Slow);

    let _en_pin = pins.gpio4.into_push_pull_output_in_state(PinState::High);

    let mut ck_pin = pins.gpio2.into_function::<FunctionSpi>();
    let mut tx_pin = pins.gpio3.into_function::<FunctionSpi>();
    ck_pin.set_drive_strength(OutputDriveStrength::FourMilliAmps);
    tx_pin.set_drive_strength(OutputDriveStrength::FourMilliAmps);
    ck_pin.set_slew_rate(OutputSlewRate::Slow);
    tx_pin.set_slew_rate(OutputSlewRate::Slow);

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let peripheral_freq = clocks.peripheral_clock.freq();
    let spi = parts_to_spi(pac.SPI0, (tx_pin, ck_pin), &mut pac.RESETS, peripheral_freq);
    let bus = LatchBus {
        spi: Some(spi),
        resets: pac.RESETS,
        peripheral_freq,
    };
    let mut panel = Panel::new(bus, hs_pin, vs_pin, timer, PanelTiming::default());

    let mut screen = [0u8; SCREEN_BYTES];
    let mut fb = Framebuffer::new(&mut screen, EL320_256).unwrap();
    let last_column = EL320_256.bit_width() - 1;
    let mut row = 0;

    loop {
        let inset = row % 32;
        _ = fb.draw_span(inset, last_column - inset, row);
        _ = panel.push_frame(&fb);

        row += 1;
        row %= EL320_256.depth;
    }
}
