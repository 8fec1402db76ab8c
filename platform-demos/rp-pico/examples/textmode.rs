//! Displays text on a ST7920 driven 12864 LCD module in serial mode
//! This example is for the Raspberry Pico with the rp2040 chip
//!
//! Pin layout and connection for this example
//!
//! display | Pico pin |  Pico function       | purpose
//!  1 VSS     pin 38     GND                   Ground
//!  2 VDD     pin 40     VBUS                  5V for the module, the logic inputs accept 3.3V
//!  4 RS      pin 7      GP5 (gpio5)           CS in serial mode, active high
//!  5 R/W     pin 5      GP3 (gpio3)           SID, serial data in
//!  6 E       pin 4      GP2 (gpio2)           SCLK, serial clock, keep it below 2MHz
//! 15 PSB     pin 38     GND                   low selects the serial interface
//! 19 BLA     pin 27     GP21 (gpio21)         backlight, through a transistor on most boards
//! 20 BLK     pin 38     GND                   backlight ground
//!
//! Tested on a blue 12864ZB board. If your board has a pot for contrast (VO), turn it until
//! the characters show up, a fresh module is often set way too light.

#![deny(unsafe_code)]
#![deny(warnings)]
#![no_std]
#![no_main]

// Imports

use panic_halt as _;                        // well. halt on panic..
use defmt_rtt as _;                         // the driver logs through defmt
use cortex_m_rt::entry;                     // the macro for our startup function
use embedded_hal::digital::v2::OutputPin;   // GPIO output pin trait
use embedded_time::rate::*;                 // Embed the `Hz` function/trait
use core::fmt::Write;                       // for writeln!() macro
use rp_pico as bsp;                         // Provide an alias for our BSP so we can switch targets quickly.
use bsp::hal::{
    prelude::*,                             // pull in any important traits
    pac,                                    // Peripheral Access Crate; low-level registers
    sio::Sio,                               // Single-clock IO, takes care of all GPIO, SPI et al. stuff.
    watchdog::Watchdog,                     // we need to regularly call the watchdog or it shuts down our Pico
};

use st7920::ST7920;

// system clock cycles per millisecond, for the pauses between screens
const CYCLES_PER_MS: u32 = 125_000;

#[entry]
fn main() -> ! {

 // --------------------------------------------------------------------------
 //  First part is "boilerplate" setup stuff for Raspberry Pico
 // --------------------------------------------------------------------------

    let mut pac = pac::Peripherals::take().unwrap();   // grab singleton objects
    let core = pac::CorePeripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);    // set up watchdog timer

    let clocks = bsp::hal::clocks::init_clocks_and_plls(   // configure clocks
        bsp::XOSC_CRYSTAL_FREQ,                            // default is 125mHz system clock
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

 // --------------------------------------------------------------------------
 //  Pins: SPI0 for SCLK/SID, two GPIO's for CS and the backlight
 // --------------------------------------------------------------------------

    let sio = Sio::new(pac.SIO);
    let pins = bsp::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // The spi driver picks up this pins automatically if they are in the correct mode
    let _spi_sclk = pins.gpio2.into_mode::<bsp::hal::gpio::FunctionSpi>();
    let _spi_sid = pins.gpio3.into_mode::<bsp::hal::gpio::FunctionSpi>();
    let spi = bsp::hal::Spi::<_, _, 8>::new(pac.SPI0);

    // MODE_0, the ST7920 samples SID on the rising edge
    let lcd_spi = spi.init(
        &mut pac.RESETS,
        clocks.peripheral_clock.freq(),
        1_000_000u32.Hz(),
        &embedded_hal::spi::MODE_0,
    );

    let lcd_cs = pins.gpio5.into_push_pull_output();
    let lcd_light = pins.gpio21.into_push_pull_output();
    let mut pico_led = pins.led.into_push_pull_output();

    // the driver owns this delay for the settle times of the controller
    let delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().integer());

 // --------------------------------------------------------------------------
 //  End Boilerplate and Setup, let's initialize the screen
 // --------------------------------------------------------------------------

    // new() runs the full initialization flow, the screen is blank afterwards
    let mut lcd = ST7920::new(lcd_spi, lcd_cs, lcd_light, delay).unwrap();
    lcd.set_light(true).unwrap();

    let mut count: u32 = 0;

    loop {
        pico_led.set_high().unwrap();

        lcd.clear().unwrap();
        lcd.set_text(0, 0, "ST7920 serial");
        lcd.set_text(1, 0, "4 x 16 text");
        lcd.text_mut().set_cursor(2, 0);
        writeln!(lcd.text_mut(), "count {}", count).unwrap();
        write!(lcd.text_mut(), "rows 0,2,1,3").unwrap();
        lcd.render().unwrap();

        pico_led.set_low().unwrap();
        count = count.wrapping_add(1);

        cortex_m::asm::delay(1_000 * CYCLES_PER_MS);
    }
}

// End of file
