//! Running tally and the counting rule.

/// Counter of committed impulses on a single line.
///
/// Keeps the wrapping tally together with the last logical level that went
/// through the counting rule. An impulse is counted only when a committed
/// level is high while the previously committed one was low. Overwriting
/// the count leaves the committed level alone, so an operator reset can
/// neither fabricate nor swallow the next impulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tally {
    count: u32,
    committed: bool,
}

impl Tally {
    /// Starts at zero, with the committed level seeded from the line as it
    /// was sampled at creation time.
    #[must_use]
    pub fn with_level(level: bool) -> Self {
        Self {
            count: 0,
            committed: level,
        }
    }

    /// Applies the counting rule to a settled logical level.
    ///
    /// Returns true when the count moved. Only a low to high change counts,
    /// the committed level is updated either way.
    pub fn commit(&mut self, level: bool) -> bool {
        let counted = level && !self.committed;
        if counted {
            self.count = self.count.wrapping_add(1);
        }
        self.committed = level;
        counted
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Overwrites the count, leaving the committed level untouched.
    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    #[must_use]
    pub fn committed(&self) -> bool {
        self.committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_level_rises_it_counts_one_impulse() {
        let mut tally = Tally::with_level(false);
        assert!(tally.commit(true));
        assert_eq!(tally.count(), 1);
    }

    #[test]
    fn when_level_falls_it_only_records_the_level() {
        let mut tally = Tally::with_level(true);
        assert!(!tally.commit(false));
        assert_eq!(tally.count(), 0);
        assert!(!tally.committed());
    }

    #[test]
    fn when_level_repeats_it_keeps_the_count() {
        let mut tally = Tally::with_level(false);
        tally.commit(true);
        assert!(!tally.commit(true));
        assert_eq!(tally.count(), 1);
    }

    #[test]
    fn when_count_overflows_it_wraps_silently() {
        let mut tally = Tally::with_level(false);
        tally.set_count(u32::MAX);
        assert!(tally.commit(true));
        assert_eq!(tally.count(), 0);
    }

    #[test]
    fn overwriting_the_count_does_not_touch_the_committed_level() {
        let mut tally = Tally::with_level(false);
        tally.set_count(10);
        assert_eq!(tally.count(), 10);
        assert!(!tally.committed());

        // The next rising commit still counts exactly once.
        assert!(tally.commit(true));
        assert_eq!(tally.count(), 11);
    }
}
