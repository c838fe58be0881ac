//! Simulated peripherals shared by the driver tests
//!
//! SPI, control lines and delay record into one ordered event log so tests
//! can assert the exact wire behavior, including where delays fall.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use pixelpad_hal::{RegisterRead, RegisterWrite, SpiBus};

use crate::st7735::control::{ControlLines, Mode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Reset(bool),
    Command(u8),
    Data(Vec<u8>),
    DelayMs(u32),
    DelayNs(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Default)]
struct State {
    data_mode: bool,
    raw: bool,
    events: Vec<Event>,
    writes: usize,
    fail_after: Option<usize>,
}

#[derive(Clone, Default)]
pub struct MockBus(Rc<RefCell<State>>);

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spi(&self) -> MockSpi {
        MockSpi(self.0.clone())
    }

    pub fn lines(&self) -> MockLines {
        MockLines(self.0.clone())
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay(self.0.clone())
    }

    /// Record every SPI write as data
    ///
    /// For control lines outside the bus, where the mock cannot see RS.
    pub fn record_raw(&self) {
        self.0.borrow_mut().raw = true;
    }

    /// Fail every SPI write after the first `writes`
    pub fn fail_after(&self, writes: usize) {
        self.0.borrow_mut().fail_after = Some(writes);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }
}

pub struct MockSpi(Rc<RefCell<State>>);

impl SpiBus for MockSpi {
    type Error = BusFault;

    fn write(&mut self, data: &[u8]) -> Result<(), BusFault> {
        let mut state = self.0.borrow_mut();
        if state.fail_after.is_some_and(|limit| state.writes >= limit) {
            return Err(BusFault);
        }
        state.writes += 1;
        let event = if state.data_mode || state.raw {
            Event::Data(data.to_vec())
        } else {
            assert_eq!(data.len(), 1, "command transactions carry one byte");
            Event::Command(data[0])
        };
        state.events.push(event);
        Ok(())
    }
}

pub struct MockLines(Rc<RefCell<State>>);

impl ControlLines for MockLines {
    fn select(&mut self, mode: Mode) {
        self.0.borrow_mut().data_mode = mode == Mode::Data;
    }

    fn set_reset(&mut self, asserted: bool) {
        self.0.borrow_mut().events.push(Event::Reset(asserted));
    }
}

pub struct MockDelay(Rc<RefCell<State>>);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().events.push(Event::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().events.push(Event::DelayMs(ms));
    }
}

/// Concatenation of every data transaction
pub fn data_bytes(events: &[Event]) -> Vec<u8> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Data(bytes) => Some(bytes.as_slice()),
            _ => None,
        })
        .flatten()
        .copied()
        .collect()
}

/// Register block backed by a word array
#[derive(Default)]
pub struct MockRegs {
    pub words: Vec<u32>,
    pub writes: Vec<(usize, u32)>,
}

impl MockRegs {
    pub fn with_words(words: &[u32]) -> Self {
        Self {
            words: words.to_vec(),
            writes: Vec::new(),
        }
    }
}

impl RegisterRead for MockRegs {
    fn read(&self, offset: usize) -> u32 {
        assert_eq!(offset % 4, 0, "unaligned register read");
        self.words.get(offset / 4).copied().unwrap_or(0)
    }
}

impl RegisterWrite for MockRegs {
    fn write(&mut self, offset: usize, value: u32) {
        self.writes.push((offset, value));
    }
}
