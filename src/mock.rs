//! Recording fakes of the HAL traits for the unit tests.
//!
//! SPI bytes, pin changes and delays all land in one shared log so tests can check the
//! order in which they happen.
use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use hal::blocking::delay::DelayUs;
use hal::blocking::spi::Write as SpiWrite;
use hal::digital::v2::OutputPin;

use crate::config::Config;
use crate::display::ST7920;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Spi(u8),
    Rs(bool),
    Light(bool),
    Clk(bool),
    Din(bool),
    DelayUs(u32),
}

#[derive(Debug, Default)]
struct State {
    events: Vec<Event>,
    fail_spi: bool,
    fail_pins: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Log(Rc<RefCell<State>>);

impl Log {
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }

    pub fn fail_spi(&self, fail: bool) {
        self.0.borrow_mut().fail_spi = fail;
    }

    pub fn fail_pins(&self, fail: bool) {
        self.0.borrow_mut().fail_pins = fail;
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().events.push(event);
    }
}

#[derive(Debug)]
pub struct MockSpi(Log);

impl MockSpi {
    pub fn new(log: &Log) -> Self {
        MockSpi(log.clone())
    }
}

impl SpiWrite<u8> for MockSpi {
    type Error = Fault;

    fn write(&mut self, words: &[u8]) -> Result<(), Fault> {
        if self.0 .0.borrow().fail_spi {
            return Err(Fault);
        }
        for w in words {
            self.0.push(Event::Spi(*w));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Line {
    Rs,
    Light,
    Clk,
    Din,
}

#[derive(Debug)]
pub struct MockPin {
    log: Log,
    line: Line,
}

impl MockPin {
    pub fn rs(log: &Log) -> Self {
        MockPin {
            log: log.clone(),
            line: Line::Rs,
        }
    }

    pub fn light(log: &Log) -> Self {
        MockPin {
            log: log.clone(),
            line: Line::Light,
        }
    }

    pub fn clk(log: &Log) -> Self {
        MockPin {
            log: log.clone(),
            line: Line::Clk,
        }
    }

    pub fn din(log: &Log) -> Self {
        MockPin {
            log: log.clone(),
            line: Line::Din,
        }
    }

    fn set(&mut self, high: bool) -> Result<(), Fault> {
        if self.log.0.borrow().fail_pins {
            return Err(Fault);
        }
        self.log.push(match self.line {
            Line::Rs => Event::Rs(high),
            Line::Light => Event::Light(high),
            Line::Clk => Event::Clk(high),
            Line::Din => Event::Din(high),
        });
        Ok(())
    }
}

impl OutputPin for MockPin {
    type Error = Fault;

    fn set_low(&mut self) -> Result<(), Fault> {
        self.set(false)
    }

    fn set_high(&mut self) -> Result<(), Fault> {
        self.set(true)
    }
}

#[derive(Debug)]
pub struct MockDelay(Log);

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        MockDelay(log.clone())
    }
}

impl DelayUs<u32> for MockDelay {
    fn delay_us(&mut self, us: u32) {
        self.0.push(Event::DelayUs(us));
    }
}

pub type MockDisplay = ST7920<MockSpi, MockPin, MockPin, MockDelay>;

pub fn display(log: &Log) -> MockDisplay {
    display_with_config(log, Config::default())
}

pub fn display_with_config(log: &Log, config: Config) -> MockDisplay {
    ST7920::new_with_config(
        MockSpi::new(log),
        MockPin::rs(log),
        MockPin::light(log),
        MockDelay::new(log),
        config,
    )
    .unwrap()
}

/// A logical write reassembled from the SPI byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    Instruction(u8),
    Data(u8),
    Wait(u32),
}

/// Folds SPI frames back into instruction and data writes. Panics on anything that isn't a
/// well formed frame or a delay.
pub fn decode(events: &[Event]) -> Vec<Write> {
    let mut writes = Vec::new();
    let mut i = 0;
    while i < events.len() {
        match events[i] {
            Event::DelayUs(us) => {
                writes.push(Write::Wait(us));
                i += 1;
            }
            Event::Spi(sync) => {
                let (high, low) = match (events.get(i + 1), events.get(i + 2)) {
                    (Some(Event::Spi(h)), Some(Event::Spi(l))) => (*h, *l),
                    other => panic!("truncated frame after {:#04x}: {:?}", sync, other),
                };
                assert_eq!(high & 0x0F, 0, "low bits of high byte set");
                assert_eq!(low & 0x0F, 0, "low bits of low byte set");
                let value = high | (low >> 4);
                writes.push(match sync {
                    0xF8 => Write::Instruction(value),
                    0xFA => Write::Data(value),
                    _ => panic!("bad sync byte {:#04x}", sync),
                });
                i += 3;
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
    writes
}

/// only the instruction bytes of a log
pub fn instructions(events: &[Event]) -> Vec<u8> {
    decode(events)
        .into_iter()
        .filter_map(|w| match w {
            Write::Instruction(v) => Some(v),
            _ => None,
        })
        .collect()
}

/// only the data bytes of a log
pub fn data(events: &[Event]) -> Vec<u8> {
    decode(events)
        .into_iter()
        .filter_map(|w| match w {
            Write::Data(v) => Some(v),
            _ => None,
        })
        .collect()
}
