//! # Runtime configuration of the driver
//!
//! The defaults come straight from the ST7920 datasheet ("Instruction Set 1: Basic
//! Instruction", execution times at fosc = 540kHz, and the serial mode initialization
//! flow). Only change them if your module runs the controller at a different
//! oscillator frequency.

/// Settle times in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// wait after any instruction except display clear, and after every data write
    pub write_us: u32,
    /// wait after the display clear instruction
    pub clear_us: u32,
    /// extra wait after the first function set of the reset sequence
    pub function_set_us: u32,
    /// extra wait after the second function set of the reset sequence
    pub function_set_repeat_us: u32,
    /// extra wait after display control in the reset sequence
    pub display_control_us: u32,
    /// extra wait after display clear in the reset sequence
    pub reset_clear_us: u32,
}

impl Timing {
    pub const fn new() -> Self {
        Timing {
            write_us: 72,
            clear_us: 1_600,
            function_set_us: 100,
            function_set_repeat_us: 47,
            display_control_us: 100,
            reset_clear_us: 10_000,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing::new()
    }
}

/// Level that switches the backlight on.
///
/// Most 12864 modules feed BLA through a transistor which wants a high level, but some
/// carrier boards sink the LED and need the pin pulled low. This can be different per
/// manufacturer unfortunately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BacklightPolarity {
    ActiveHigh,
    ActiveLow,
}

impl Default for BacklightPolarity {
    fn default() -> Self {
        BacklightPolarity::ActiveHigh
    }
}

/// Everything `ST7920::new_with_config` accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub timing: Timing,
    pub backlight: BacklightPolarity,
}

impl Config {
    pub const fn new() -> Self {
        Config {
            timing: Timing::new(),
            backlight: BacklightPolarity::ActiveHigh,
        }
    }

    pub const fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub const fn with_backlight(mut self, backlight: BacklightPolarity) -> Self {
        self.backlight = backlight;
        self
    }
}
