//! Line oriented console over the service UART.
//!
//! The console carries the operator interface of the counter. An empty
//! line asks for the current count, any other line is an overwrite
//! request. Lines may be LF or CRLF framed. Replies are terse: the
//! rendered count for a read, a single `?` for a rejected request,
//! nothing for an accepted overwrite.

use heapless::Vec;

use crate::system::hal::pac::USART1;
use crate::system::hal::prelude::*;
use crate::system::hal::serial::{Event, Rx, Serial, Tx};

/// Longest accepted command line, excluding its newline.
pub const LINE_MAX: usize = 64;

pub type CommandLine = Vec<u8, LINE_MAX>;

/// One event handed over by the receiving half.
pub enum Received {
    /// A complete command line, newline stripped.
    Line(CommandLine),
    /// A line that outgrew the buffer and was discarded whole.
    Overflow,
}

/// Opens the console, splitting it into its receiving and sending halves.
///
/// The receiver is left listening, so its interrupt fires on every byte.
pub fn open(mut serial: Serial<USART1>) -> (Reader, Writer) {
    serial.listen(Event::Rxne);
    let (tx, rx) = serial.split();

    (
        Reader {
            rx,
            line: Vec::new(),
            overflowed: false,
        },
        Writer { tx },
    )
}

/// Receiving half, assembling newline terminated command lines.
pub struct Reader {
    rx: Rx<USART1>,
    line: CommandLine,
    overflowed: bool,
}

impl Reader {
    /// Drains the receiver, reporting when a line just ended.
    ///
    /// Reception errors poison the current line, so a corrupted command
    /// cannot go through as a valid one.
    pub fn poll(&mut self) -> Option<Received> {
        loop {
            match self.rx.read() {
                Ok(byte) => {
                    if let Some(received) = self.accept(byte) {
                        return Some(received);
                    }
                }
                Err(nb::Error::WouldBlock) => return None,
                Err(nb::Error::Other(_)) => {
                    self.overflowed = true;
                }
            }
        }
    }

    /// Feeds one received byte into the line assembly.
    ///
    /// One trailing carriage return is stripped when the newline lands,
    /// so CRLF framed lines arrive the same as LF framed ones. A line
    /// that outgrows the buffer is poisoned up to its newline, so a
    /// truncated tail cannot masquerade as a valid command.
    pub fn accept(&mut self, byte: u8) -> Option<Received> {
        match byte {
            b'\n' => {
                let overflowed = self.overflowed;
                self.overflowed = false;
                if self.line.last() == Some(&b'\r') {
                    self.line.pop();
                }
                let line = core::mem::take(&mut self.line);
                Some(if overflowed {
                    Received::Overflow
                } else {
                    Received::Line(line)
                })
            }
            _ => {
                if self.line.push(byte).is_err() {
                    self.overflowed = true;
                }
                None
            }
        }
    }
}

/// Sending half, serving replies to the operator.
pub struct Writer {
    tx: Tx<USART1>,
}

impl Writer {
    /// Sends one reply, blocking until the transmitter drains it.
    pub fn send(&mut self, reply: &[u8]) {
        for byte in reply {
            // Transmission cannot fail on this peripheral once the
            // holding register empties.
            let _ = nb::block!(self.tx.write(*byte));
        }
    }
}
