//! The counted input line and its edge interrupt binding.

use crate::system::hal::gpio::{self, Edge, ExtiPin};
use crate::system::hal::pac::{EXTI, SYSCFG};

/// Input line the impulses arrive on.
///
/// Bound to the EXTI0 interrupt on both edges. Only the instantaneous
/// electrical level is exposed, its logical interpretation lives in the
/// counter core.
pub struct Line {
    pin: Pin,
}

pub type Pin = gpio::gpioa::PA0<gpio::Input>;

impl Line {
    pub fn new(mut pin: Pin, syscfg: &mut SYSCFG, exti: &mut EXTI) -> Self {
        pin.make_interrupt_source(syscfg);
        pin.trigger_on_edge(exti, Edge::RisingFalling);
        pin.enable_interrupt(exti);
        Self { pin }
    }

    /// Instantaneous electrical level of the line.
    #[must_use]
    pub fn level(&self) -> bool {
        self.pin.is_high()
    }

    /// Acknowledges the edge that raised the interrupt.
    pub fn clear_pending(&mut self) {
        self.pin.clear_interrupt_pending_bit();
    }
}
