use core::fmt::Write;
use embedded_hal::blocking::delay::DelayUs;
use st7920::{
    bitbang::{BitBangSpi, NoDelay},
    dummypins::DummyOutputPin,
    ST7920,
};

// sleeps for real, so the demo takes as long as on hardware
struct StdDelay;

impl DelayUs<u32> for StdDelay {
    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(std::time::Duration::from_micros(us.into()));
    }
}

fn main() {
    let lcd_light = DummyOutputPin;
    let lcd_sclk = DummyOutputPin;
    let lcd_sid = DummyOutputPin;
    let lcd_cs = DummyOutputPin;

    let spi = BitBangSpi::new(lcd_sclk, lcd_sid).expect("Infallible cannot fail");
    let mut display =
        ST7920::new(spi, lcd_cs, lcd_light, StdDelay).expect("Infallible cannot fail");

    display.set_light(true).expect("Infallible cannot fail");
    display.set_text(0, 0, "Hello World");
    writeln!(display.text_mut(), "\n\nline three").unwrap();
    display.render().expect("Infallible cannot fail");

    for row in 0..st7920::TEXT_ROWS {
        if let Some(cells) = display.text().row(row) {
            println!("|{}|", String::from_utf8_lossy(cells));
        }
    }

    display.clear().expect("Infallible cannot fail");

    // same thing without the settle times, e.g. for a simulator
    let spi = BitBangSpi::new(DummyOutputPin, DummyOutputPin).expect("Infallible cannot fail");
    let mut fast = ST7920::new(spi, DummyOutputPin, DummyOutputPin, NoDelay {})
        .expect("Infallible cannot fail");
    fast.set_text(3, 0, "fast");
    fast.render().expect("Infallible cannot fail");
}
