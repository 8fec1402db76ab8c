//! # Textmode extensions for the ST7920 driver
//!
//! The ST7920 has a built-in character ROM, so text doesn't need a font in the driver. This
//! module keeps a 4x16 shadow buffer of the visible character cells, which is filled with
//! `set_text()` (or `write!()`) and pushed to the controller with `render()`.
//!
//! `render()` doesn't set any DDRAM address, it relies on the address counter sitting at 0,
//! which is the case right after `reset()` or `clear()`. Neither of them touches the buffer,
//! so a redraw is just `clear()` followed by `render()`. The typical loop is:
//!  - fill the buffer with set_text() or writeln!(lcd.text_mut(), ...)
//!  - ST7920.clear()
//!  - ST7920.render()
//!
//! Use `text_mut().clear()` to empty the buffer itself.
use core::fmt::Result as FmtResult;
use core::fmt::Write;

use hal::blocking::delay::DelayUs;
use hal::blocking::spi::Write as SpiWrite;
use hal::digital::v2::OutputPin;

use crate::{display::ST7920, error::Error, TEXT_COLUMNS, TEXT_ROWS};

/// character code of an empty cell
pub const FILL: u8 = b' ';

/// character code stored for chars the character ROM has no half-width glyph for
pub const REPLACEMENT: u8 = b'?';

/// Order in which buffer rows are sent. Line 0 continues into line 2 in DDRAM, and line 1
/// into line 3.
pub const RENDER_ORDER: [usize; TEXT_ROWS] = [0, 2, 1, 3];

/// 4 rows of 16 character codes plus a text cursor for `fmt::Write`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextBuffer {
    cells: [[u8; TEXT_COLUMNS]; TEXT_ROWS],
    cursor_row: usize,
    cursor_col: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        TextBuffer::new()
    }
}

impl TextBuffer {
    pub const fn new() -> Self {
        TextBuffer {
            cells: [[FILL; TEXT_COLUMNS]; TEXT_ROWS],
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    /// fill every cell with spaces and move the cursor to (0, 0)
    pub fn clear(&mut self) {
        self.cells = [[FILL; TEXT_COLUMNS]; TEXT_ROWS];
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    /// Write `text` into `row` starting at column `col`.
    ///
    /// Text running past the last column is cut off. A row above 3 or a column above 15 is
    /// silently ignored. Chars without a half-width glyph are stored as '?'.
    pub fn set_text(&mut self, row: u8, col: u8, text: &str) {
        if let Some(cells) = self.cells_from(row, col) {
            for (cell, c) in cells.iter_mut().zip(text.chars()) {
                *cell = to_cell(c);
            }
        }
    }

    /// Like `set_text()` but with raw character codes, e.g. the CGRAM codes 0x00..0x07.
    pub fn set_bytes(&mut self, row: u8, col: u8, codes: &[u8]) {
        if let Some(cells) = self.cells_from(row, col) {
            for (cell, code) in cells.iter_mut().zip(codes) {
                *cell = *code;
            }
        }
    }

    /// character codes of one row, `None` for a row above 3
    pub fn row(&self, row: usize) -> Option<&[u8; TEXT_COLUMNS]> {
        self.cells.get(row)
    }

    /// position (row, column) of the text cursor used by `write!()`
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// move the text cursor, out of range positions are ignored
    pub fn set_cursor(&mut self, row: u8, col: u8) {
        let (row, col) = (row as usize, col as usize);
        if row < TEXT_ROWS && col < TEXT_COLUMNS {
            self.cursor_row = row;
            self.cursor_col = col;
        }
    }

    fn cells_from(&mut self, row: u8, col: u8) -> Option<&mut [u8]> {
        let (row, col) = (row as usize, col as usize);
        if row < TEXT_ROWS && col < TEXT_COLUMNS {
            Some(&mut self.cells[row][col..])
        } else {
            None
        }
    }

    fn line_feed(&mut self) {
        if self.cursor_row < TEXT_ROWS {
            self.cursor_row += 1;
        }
        self.cursor_col = 0;
    }

    fn put(&mut self, code: u8) {
        // wrap lazily, so a '\n' right after a full line doesn't skip a row
        if self.cursor_col == TEXT_COLUMNS {
            self.line_feed();
        }
        if self.cursor_row < TEXT_ROWS {
            self.cells[self.cursor_row][self.cursor_col] = code;
            self.cursor_col += 1;
        }
    }
}

// with this implementation writeln!() works on the buffer, text below the last row is dropped
impl Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> FmtResult {
        for c in s.chars() {
            match c {
                '\r' => self.cursor_col = 0,
                '\n' => self.line_feed(),
                _ => self.put(to_cell(c)),
            }
        }
        Ok(())
    }
}

// The character ROM holds ASCII in 0x20..0x7F, the codes below are CGRAM and control
// codes, the ones above start double-width (GB2312/BIG5) sequences.
fn to_cell(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
        _ => REPLACEMENT,
    }
}

impl<SPI, RS, LIGHT, DELAY, SpiErr, PinErr> ST7920<SPI, RS, LIGHT, DELAY>
where
    SPI: SpiWrite<u8, Error = SpiErr>,
    RS: OutputPin<Error = PinErr>,
    LIGHT: OutputPin<Error = PinErr>,
    DELAY: DelayUs<u32>,
{
    /// put `text` into the buffer, see `TextBuffer::set_text()`. Nothing is sent.
    pub fn set_text(&mut self, row: u8, col: u8, text: &str) {
        self.text.set_text(row, col, text);
    }

    /// put raw character codes into the buffer, see `TextBuffer::set_bytes()`
    pub fn set_bytes(&mut self, row: u8, col: u8, codes: &[u8]) {
        self.text.set_bytes(row, col, codes);
    }

    pub fn text(&self) -> &TextBuffer {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut TextBuffer {
        &mut self.text
    }

    /// Sends all 64 cells of the buffer as data writes, rows in DDRAM order.
    pub fn render(&mut self) -> Result<(), Error<SpiErr, PinErr>> {
        let text = self.text;
        for row in RENDER_ORDER.iter() {
            for code in text.cells[*row].iter() {
                self.write_data(*code)?;
            }
        }
        Ok(())
    }
}
