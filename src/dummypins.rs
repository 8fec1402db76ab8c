//! # Small module to provide a "fake" pin
//!
//! On most 12864 modules the backlight (BLA/BLK) can simply be wired to 5V and GND. The
//! driver still wants a backlight pin in `new()`, so hand it a `DummyOutputPin`, it behaves
//! as a working pin but does nothing.

use embedded_hal::digital::v2::OutputPin;

/// provides a dummy OutputPin.
///
/// Usable wherever the driver requires a GPIO pin but the line is hard-wired, typically the
/// LIGHT pin, or RS/CS on a module where CS is tied high.
#[derive(Debug, Clone, Copy)]
pub struct DummyOutputPin;

impl OutputPin for DummyOutputPin {
    type Error = core::convert::Infallible;
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
