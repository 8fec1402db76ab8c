//! # Main driver for the ST7920 in serial mode
//!
//! This module exports the `ST7920` struct which owns the serial transport, the chip select
//! pin (wired to RS on the module), the backlight pin and a delay provider.
//!
//! Typically you want to look into the following functions:
//!  - ST7920::new() to create a new driver instance, which also resets the controller
//!  - ST7920::set_light() to enable or disable the backlight
//!  - ST7920::set_text() and ST7920::render() (feature "textmode") to show text
//!
//! The write_instruction(), write_command() and write_data() functions are the raw path for
//! everything the text mode doesn't cover. They always wait the settle time of the
//! controller before returning, so they can be called back to back.
use hal::blocking::delay::DelayUs;
use hal::blocking::spi::Write as SpiWrite;
use hal::digital::v2::OutputPin;

use crate::{
    config::{BacklightPolarity, Config},
    error::Error,
    frame::{self, Register},
    instructions::prelude::*,
};
#[cfg(feature = "textmode")]
use crate::textmode::TextBuffer;

#[derive(Debug)]
/// main struct for state keeping of the ST7920 driver
pub struct ST7920<SPI, RS, LIGHT, DELAY>
where
    SPI: SpiWrite<u8>,
    RS: OutputPin,
    LIGHT: OutputPin,
    DELAY: DelayUs<u32>,
{
    spi: SPI,
    rs: RS,
    light: LIGHT,
    delay: DELAY,
    config: Config,
    #[cfg(feature = "textmode")]
    pub(crate) text: TextBuffer,
}

impl<SPI, RS, LIGHT, DELAY, SpiErr, PinErr> ST7920<SPI, RS, LIGHT, DELAY>
where
    SPI: SpiWrite<u8, Error = SpiErr>,
    RS: OutputPin<Error = PinErr>,
    LIGHT: OutputPin<Error = PinErr>,
    DELAY: DelayUs<u32>,
{
    /// Create a new instance of the ST7920 driver with datasheet timing
    ///
    /// Arguments:
    ///
    /// - spi: a working SPI interface implementing Write<u8>, MODE_0, at most ~2MHz.
    ///   Can be the `BitBangSpi` of this crate.
    /// - rs: a GPIO OutputPin connected to RS, which is chip select in serial mode
    /// - light: a GPIO OutputPin switching the backlight, or a `DummyOutputPin`
    /// - delay: blocking delay used for the settle times
    pub fn new(
        spi: SPI,
        rs: RS,
        light: LIGHT,
        delay: DELAY,
    ) -> Result<ST7920<SPI, RS, LIGHT, DELAY>, Error<SpiErr, PinErr>> {
        Self::new_with_config(spi, rs, light, delay, Config::default())
    }

    /// Create a new instance of the ST7920 driver with custom timing or backlight polarity
    pub fn new_with_config(
        spi: SPI,
        rs: RS,
        light: LIGHT,
        delay: DELAY,
        config: Config,
    ) -> Result<ST7920<SPI, RS, LIGHT, DELAY>, Error<SpiErr, PinErr>> {
        let mut lcd = ST7920 {
            spi,
            rs,
            light,
            delay,
            config,
            #[cfg(feature = "textmode")]
            text: TextBuffer::new(),
        };

        // the controller comes up in an unknown interface mode, nothing written before the
        // initialization flow is reliably understood
        lcd.reset()?;

        Ok(lcd)
    }

    /// Runs the serial mode initialization flow of the datasheet.
    ///
    /// Function set has to be sent twice, and the extra waits between the steps are on top
    /// of the regular settle time of each instruction. Leaves the controller with the
    /// display on, cursor and blink off, DDRAM cleared and the address counter
    /// incrementing after each write.
    pub fn reset(&mut self) -> Result<(), Error<SpiErr, PinErr>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("st7920: reset");

        let timing = self.config.timing;

        self.rs.set_high().map_err(Error::Pin)?;

        let basic_8bit = FunctionSet {
            eight_bit: true,
            extended: false,
        };
        self.write_command(basic_8bit)?;
        self.delay.delay_us(timing.function_set_us);
        self.write_command(basic_8bit)?;
        self.delay.delay_us(timing.function_set_repeat_us);

        self.write_command(DisplayControl {
            display: true,
            cursor: false,
            blink: false,
        })?;
        self.delay.delay_us(timing.display_control_us);

        self.write_command(DisplayClear)?;
        self.delay.delay_us(timing.reset_clear_us);

        self.write_command(EntryModeSet {
            increment: true,
            shift: false,
        })?;

        Ok(())
    }

    /// clears DDRAM and moves the address counter back to the first cell
    pub fn clear(&mut self) -> Result<(), Error<SpiErr, PinErr>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("st7920: clear");

        self.write_command(DisplayClear)?;
        self.write_command(SetDdramAddress(0))?;

        Ok(())
    }

    /// Enable or disable the backlight
    ///
    /// The pin level depends on the `BacklightPolarity` in the config.
    pub fn set_light(&mut self, enabled: bool) -> Result<(), Error<SpiErr, PinErr>> {
        let high = match self.config.backlight {
            BacklightPolarity::ActiveHigh => enabled,
            BacklightPolarity::ActiveLow => !enabled,
        };
        if high {
            self.light.set_high().map_err(Error::Pin)
        } else {
            self.light.set_low().map_err(Error::Pin)
        }
    }

    /// Send a typed instruction, see `write_instruction`
    pub fn write_command(&mut self, instruction: Instruction) -> Result<(), Error<SpiErr, PinErr>> {
        self.send(Register::Instruction, instruction.byte(), instruction.settle())
    }

    /// Send a raw byte to the instruction register and wait until it is executed.
    pub fn write_instruction(&mut self, value: u8) -> Result<(), Error<SpiErr, PinErr>> {
        self.send(Register::Instruction, value, Settle::of(value))
    }

    /// Send a byte to the data register (a character code in text mode) and wait.
    pub fn write_data(&mut self, value: u8) -> Result<(), Error<SpiErr, PinErr>> {
        self.send(Register::Data, value, Settle::Short)
    }

    /// Gives back the peripherals, the controller keeps showing what it shows.
    pub fn release(self) -> (SPI, RS, LIGHT, DELAY) {
        (self.spi, self.rs, self.light, self.delay)
    }

    // one frame per call, the controller can't take the next frame before the settle time
    fn send(
        &mut self,
        register: Register,
        value: u8,
        settle: Settle,
    ) -> Result<(), Error<SpiErr, PinErr>> {
        self.spi
            .write(&frame::encode(register, value))
            .map_err(Error::Spi)?;
        let us = match settle {
            Settle::Short => self.config.timing.write_us,
            Settle::Clear => self.config.timing.clear_us,
        };
        self.delay.delay_us(us);
        Ok(())
    }
}
