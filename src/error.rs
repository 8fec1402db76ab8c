//! Errors raised by the HAL peripherals the driver talks through.
//!
//! The ST7920 has no status read-back in serial mode, so the only failures the driver can
//! see are the ones the serial transport or the GPIO pins report.

/// Error type of every fallible driver operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<SpiErr, PinErr> {
    /// the serial transport failed to shift out a frame
    Spi(SpiErr),
    /// driving the chip select or backlight pin failed
    Pin(PinErr),
}
