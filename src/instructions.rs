//! # Module defining the basic instruction set of the ST7920
//!
//! All instructions are implemented as an enum with the flags as named fields.
//! The source code is written to resemble the data sheet as close as possible, see table
//! "Instruction Set 1: (RE=0: Basic Instruction)".
//!
//! Only the basic instruction set (RE=0) is covered. The extended set (RE=1) switches the
//! controller into graphics RAM and standby territory which this driver doesn't support.
//!
//! ## Execution time
//! The ST7920 has a busy flag but in serial mode there is no way to read it, so the host has
//! to wait long enough after every instruction. All basic instructions finish within 72µs,
//! except for display clear which fills the whole DDRAM with spaces and takes 1.6ms.
//!
//! ## DDRAM addresses in 4 line mode
//! The text DDRAM is laid out as two lines of 32 characters. Each line is shown as two lines
//! of 16 on the glass, so the visible lines map to addresses like this:
//!
//! ```text
//! line 0: 0x00..0x07    line 1: 0x10..0x17
//! line 2: 0x08..0x0F    line 3: 0x18..0x1F
//! ```
//!
//! (every address holds two half-width characters). That's why the text renderer sends
//! lines in the order 0, 2, 1, 3.

/// Settle class of an instruction or data write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Settle {
    /// 72µs, every write except display clear
    Short,
    /// 1.6ms, display clear
    Clear,
}

impl Settle {
    /// settle class of a raw instruction byte
    pub fn of(instruction: u8) -> Settle {
        if instruction == DisplayClear.byte() {
            Settle::Clear
        } else {
            Settle::Short
        }
    }
}

/// ST7920 basic instruction set, see data sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instruction {
    /// fill DDRAM with spaces (0x20) and set the address counter to 0
    // translates to: 0x01
    DisplayClear,

    /// set the address counter to 0, DDRAM content is kept
    // translates to: 0x02
    ReturnHome,

    /// cursor movement and display shift after each data write
    // translates to: 0x04 OR with I/D and S
    EntryModeSet {
        /// I/D, move the address counter up (true) or down (false)
        increment: bool,
        /// S, shift the whole display
        shift: bool,
    },

    /// display, cursor and blink on/off
    // translates to: 0x08 OR with D, C and B
    DisplayControl {
        display: bool,
        cursor: bool,
        blink: bool,
    },

    /// interface width and instruction set
    // translates to: 0x20 OR with DL and RE
    FunctionSet {
        /// DL, 8 bit interface if true. Must be true in serial mode.
        eight_bit: bool,
        /// RE, select the extended instruction set
        extended: bool,
    },

    /// set the DDRAM address counter, 0x00..=0x3F
    // translates to: 0x80 OR with 6 bit address
    SetDdramAddress(u8),
}

use Instruction::*;

// Use full binary presentation instead of hex, to look the same as data sheet
impl Instruction {
    /// Returns the specific instruction as a byte (u8) which can be framed and sent
    pub fn byte(self) -> u8 {
        match self {
            DisplayClear => 0b0000_0001,
            ReturnHome => 0b0000_0010,
            EntryModeSet { increment, shift } => {
                0b0000_0100 | ((increment as u8) << 1) | shift as u8
            }
            DisplayControl {
                display,
                cursor,
                blink,
            } => 0b0000_1000 | ((display as u8) << 2) | ((cursor as u8) << 1) | blink as u8,
            FunctionSet {
                eight_bit,
                extended,
            } => 0b0010_0000 | ((eight_bit as u8) << 4) | ((extended as u8) << 2),
            SetDdramAddress(address) => 0b1000_0000 | (address & 0b0011_1111),
        }
    }

    /// how long the controller needs to execute this instruction
    pub fn settle(self) -> Settle {
        Settle::of(self.byte())
    }
}

/// A prelude for convenience, it pulls the enums into scope.
pub mod prelude {
    pub use super::{Instruction, Instruction::*, Settle};
}
