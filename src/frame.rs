//! # Serial mode frame encoding
//!
//! In serial mode the ST7920 takes every 8 bit value as three bytes, see "Timing Diagram
//! of Serial Mode Data Transfer" in the datasheet:
//!
//! ```text
//! |-------------------|-------------------------|-------------------------|
//! |  Synchronizing    | 1st byte, higher data   | 2nd byte, lower data    |
//! |-------------------|-------------------------|-------------------------|
//! | 1 1 1 1 1 RW RS 0 | D7 D6 D5 D4  0  0  0  0 | D3 D2 D1 D0  0  0  0  0 |
//! |-------------------|-------------------------|-------------------------|
//! ```
//!
//! RW is always 0 since the serial interface can't be read back.

/// synchronizing byte for the instruction register (RW = 0, RS = 0)
pub const SYNC_INSTRUCTION: u8 = 0b1111_1000;

/// synchronizing byte for the data register (RW = 0, RS = 1)
pub const SYNC_DATA: u8 = 0b1111_1010;

/// The register a frame targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    Instruction,
    Data,
}

impl Register {
    /// the synchronizing byte selecting this register
    pub fn sync(self) -> u8 {
        match self {
            Register::Instruction => SYNC_INSTRUCTION,
            Register::Data => SYNC_DATA,
        }
    }
}

/// Encodes `value` into the three bytes the controller expects on SID.
pub fn encode(register: Register, value: u8) -> [u8; 3] {
    [register.sync(), value & 0xF0, (value << 4) & 0xF0]
}
