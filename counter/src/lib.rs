//! Debounced impulse counting for a single digital input line.
//!
//! The crate holds the decision logic of the counter and nothing else. The
//! embedding firmware reports the raw line level on every edge interrupt,
//! schedules the delayed settle check through a scheduler of its choosing,
//! and carries the ASCII read/write requests of its operator interface. No
//! hardware is touched from here, which keeps the whole state machine
//! runnable under host tests.
//!
//! ```text
//!    edge interrupt --> [ Store ] --arm--> [ Window ] --(delay)--+
//!                        |     A                                 |
//!                        |     +--------- settle check <---------+
//!                        V
//!                    [ Tally ] <------ read/write via [ chardev ]
//! ```

#![cfg_attr(not(test), no_std)]

pub mod chardev;
pub mod config;
mod log;
pub mod store;
pub mod tally;
pub mod window;

pub use config::Config;
pub use store::{EdgeReaction, SettleReaction, Store};
