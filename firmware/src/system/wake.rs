//! Wake capability of the counted line.

use crate::system::hal::pac;

/// Permission for the line to rouse the system from Standby.
///
/// The line sits on PA0, which doubles as the WKUP1 wakeup pad, so the
/// permission maps to a single enable bit in the power controller. The
/// counting state machine is never touched from here.
pub struct Wake {
    _marker: (),
}

impl Wake {
    #[must_use]
    pub fn new() -> Self {
        Self { _marker: () }
    }

    /// Allows the line to wake the system.
    pub fn enable(&mut self) {
        self.pwr().wkupepr.modify(|_, w| w.wkupen1().set_bit());
    }

    /// Revokes the wake permission.
    pub fn disable(&mut self) {
        self.pwr().wkupepr.modify(|_, w| w.wkupen1().clear_bit());
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.pwr().wkupepr.read().wkupen1().bit_is_set()
    }

    fn pwr(&self) -> &pac::pwr::RegisterBlock {
        // The wakeup enable register is left out of the HAL's Pwr
        // abstraction once the clock tree is frozen.
        unsafe { &*pac::PWR::ptr() }
    }
}

impl Default for Wake {
    fn default() -> Self {
        Self::new()
    }
}
