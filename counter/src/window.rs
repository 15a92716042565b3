//! Single outstanding debounce window.

/// Guard over the one delayed settle check a line may have in flight.
///
/// The handle is whatever the embedding's scheduler returns for a delayed
/// task, retained so the window can be revoked at teardown. The window
/// never talks to the scheduler itself, it only enforces that at most one
/// settle check exists per line at any time.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window<H> {
    pending: Option<H>,
}

impl<H> Window<H> {
    #[must_use]
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arms the window unless one is already pending.
    ///
    /// The closure performs the actual non-blocking scheduling and returns
    /// the cancellation handle. It is not called while a window is armed,
    /// which is what coalesces a burst of edges into a single settle check.
    pub fn arm_with(&mut self, schedule: impl FnOnce() -> H) -> bool {
        if self.pending.is_some() {
            false
        } else {
            self.pending = Some(schedule());
            true
        }
    }

    /// Releases the window, returning the retained handle.
    ///
    /// None means the window was not armed and the caller's settle check is
    /// stale.
    pub fn disarm(&mut self) -> Option<H> {
        self.pending.take()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H> Default for Window<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_idle_arming_schedules_the_check() {
        let mut window = Window::new();
        assert!(window.arm_with(|| 7));
        assert!(window.is_armed());
        assert_eq!(window.disarm(), Some(7));
    }

    #[test]
    fn when_armed_it_refuses_a_second_check() {
        let mut window = Window::new();
        let mut scheduled = 0;
        window.arm_with(|| scheduled += 1);
        assert!(!window.arm_with(|| scheduled += 1));
        assert_eq!(scheduled, 1);
    }

    #[test]
    fn when_disarmed_it_can_be_armed_again() {
        let mut window = Window::new();
        window.arm_with(|| 1);
        window.disarm();
        assert!(window.arm_with(|| 2));
        assert_eq!(window.disarm(), Some(2));
    }

    #[test]
    fn when_idle_disarming_returns_nothing() {
        let mut window: Window<()> = Window::new();
        assert_eq!(window.disarm(), None);
        assert!(!window.is_armed());
    }
}
