//! # ST7920 serial mode driver
//!
//! Driver for the Sitronix ST7920 controller found on the common "12864" LCD modules
//! (128x64 pixels, 4 lines of 16 half-width characters), wired in serial mode:
//!
//! | LCD pin | serial mode function          |
//! |---------|-------------------------------|
//! | RS      | CS, chip select (active high) |
//! | R/W     | SID, serial data in           |
//! | E       | SCLK, serial clock            |
//! | PSB     | GND selects serial mode       |
//!
//! Every byte sent to the controller travels in a 3 byte frame (see [`frame`]) and the
//! controller needs a settle time after each one before it accepts the next. The driver
//! owns a delay provider and waits for you.
//!
//! ```ignore
//! let mut lcd = ST7920::new(spi, cs, light, delay)?;
//! lcd.set_light(true)?;
//! lcd.set_text(0, 0, "Hello");
//! lcd.render()?;
//! ```
#![cfg_attr(not(test), no_std)]

extern crate embedded_hal as hal;

pub mod bitbang;
pub mod config;
pub mod display;
pub mod dummypins;
pub mod error;
pub mod frame;
pub mod instructions;
#[cfg(feature = "textmode")]
pub mod textmode;

#[cfg(test)]
mod mock;

pub use crate::config::{BacklightPolarity, Config, Timing};
pub use crate::display::ST7920;
pub use crate::error::Error;
pub use crate::instructions::Instruction;
#[cfg(feature = "textmode")]
pub use crate::textmode::TextBuffer;

/// width of the glass in pixels
pub const WIDTH: u8 = 128;
/// height of the glass in pixels
pub const HEIGHT: u8 = 64;
/// text lines in the 4 line configuration
pub const TEXT_ROWS: usize = 4;
/// half-width characters per text line
pub const TEXT_COLUMNS: usize = 16;
