//! A simulated HD44780 bus for tests
//!
//! Pins and delayer share one log. A nibble is recorded on every falling edge of EN,
//! together with the RS level at that moment, and every delay call is recorded in ns.

extern crate std;

use core::convert::Infallible;
use std::{cell::RefCell, rc::Rc, vec::Vec};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin},
};

use crate::sender::ParallelSender;

const DB4: usize = 0;
const RS: usize = 4;
const EN: usize = 5;

#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum Event {
    Nibble { rs: bool, value: u8 },
    Delay { ns: u64 },
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum Transaction {
    Command(u8),
    Data(u8),
}

#[derive(Default)]
struct Lines {
    levels: [bool; 6],
    events: Vec<Event>,
}

impl Lines {
    fn write(&mut self, line: usize, level: bool) {
        let falling_edge = line == EN && self.levels[EN] && !level;
        self.levels[line] = level;

        if falling_edge {
            let value = self.levels[DB4..DB4 + 4]
                .iter()
                .enumerate()
                .fold(0u8, |acc, (index, &high)| acc | ((high as u8) << index));
            self.events.push(Event::Nibble {
                rs: self.levels[RS],
                value,
            });
        }
    }
}

pub(crate) struct SimPin {
    line: usize,
    lines: Rc<RefCell<Lines>>,
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.lines.borrow_mut().write(self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.lines.borrow_mut().write(self.line, true);
        Ok(())
    }
}

pub(crate) struct SimDelay {
    lines: Rc<RefCell<Lines>>,
}

impl SimDelay {
    fn record(&mut self, ns: u64) {
        self.lines.borrow_mut().events.push(Event::Delay { ns });
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        self.record(us as u64 * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(ms as u64 * 1_000_000);
    }
}

/// The simulated controller, clone it freely, all clones see the same log
#[derive(Clone, Default)]
pub(crate) struct Controller {
    lines: Rc<RefCell<Lines>>,
}

impl Controller {
    fn pin(&self, line: usize) -> SimPin {
        SimPin {
            line,
            lines: self.lines.clone(),
        }
    }

    pub(crate) fn sender(&self) -> ParallelSender<SimPin, SimPin> {
        ParallelSender::new_4pin(
            self.pin(RS),
            self.pin(EN),
            self.pin(DB4),
            self.pin(DB4 + 1),
            self.pin(DB4 + 2),
            self.pin(DB4 + 3),
        )
    }

    pub(crate) fn delayer(&self) -> SimDelay {
        SimDelay {
            lines: self.lines.clone(),
        }
    }

    pub(crate) fn rs_level(&self) -> bool {
        self.lines.borrow().levels[RS]
    }

    pub(crate) fn en_level(&self) -> bool {
        self.lines.borrow().levels[EN]
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.lines.borrow().events.clone()
    }

    pub(crate) fn clear(&self) {
        self.lines.borrow_mut().events.clear();
    }

    pub(crate) fn nibbles(&self) -> Vec<(bool, u8)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Nibble { rs, value } => Some((rs, value)),
                Event::Delay { .. } => None,
            })
            .collect()
    }

    /// Pair up recorded nibbles into bytes, panics if they don't pair up cleanly
    pub(crate) fn transactions(&self) -> Vec<Transaction> {
        let nibbles = self.nibbles();
        assert!(nibbles.len() % 2 == 0, "odd number of nibbles: {nibbles:?}");

        nibbles
            .chunks(2)
            .map(|pair| {
                let (high_rs, high) = pair[0];
                let (low_rs, low) = pair[1];
                assert_eq!(high_rs, low_rs, "RS changed inside a byte");
                let byte = (high << 4) | low;
                match high_rs {
                    false => Transaction::Command(byte),
                    true => Transaction::Data(byte),
                }
            })
            .collect()
    }
}
