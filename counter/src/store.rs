//! State machine deciding which edges are real impulses.

use crate::config::Config;
use crate::log;
use crate::tally::Tally;
use crate::window::Window;

/// Counting device for a single line.
///
/// This is the full state of one counter: the configuration, the tally,
/// the debounce window and the last observed logical level. It is driven
/// from two directions. The edge interrupt reports every raw level change
/// through [`Store::on_edge`], and when a debounce window elapses the
/// deferred check reports back through [`Store::on_settle`]. Both take
/// `&mut self`, leaving the mutual exclusion of the two contexts, and of
/// any concurrent operator access, as an obligation of the embedding.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store<H> {
    config: Config,
    tally: Tally,
    window: Window<H>,
    observed: bool,
}

/// What the edge handler did with a raw level notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeReaction {
    /// Debouncing is disabled and the level went straight through the
    /// counting rule.
    Committed { counted: bool },
    /// A settle check was scheduled for this edge.
    Armed,
    /// A window was already pending, the edge only refreshed the observed
    /// level.
    Coalesced,
}

/// What the settle check decided once its window elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettleReaction {
    /// The line held its level through the whole window.
    Committed { counted: bool },
    /// The level moved during the window, the edge was noise.
    Discarded,
    /// No window was armed. The check lost a race against teardown and
    /// must not touch the tally.
    Stale,
}

impl<H> Store<H> {
    /// Creates the device with the committed level seeded from the line.
    ///
    /// `initial_raw` is the electrical level sampled at creation time, so
    /// that the first edge is classified against ground truth instead of
    /// an assumed resting level.
    #[must_use]
    pub fn new(config: Config, initial_raw: bool) -> Self {
        let level = config.logical(initial_raw);
        Self {
            config,
            tally: Tally::with_level(level),
            window: Window::new(),
            observed: level,
        }
    }

    /// Handles one hardware edge notification.
    ///
    /// Runs in the time critical context and never blocks. `raw` is the
    /// electrical level sampled by the handler, `schedule` enqueues the
    /// settle check and returns its cancellation handle. The closure is
    /// called at most once, and only when a fresh window gets armed.
    pub fn on_edge(&mut self, raw: bool, schedule: impl FnOnce() -> H) -> EdgeReaction {
        let level = self.config.logical(raw);
        self.observed = level;

        if !self.config.debounced() {
            let counted = self.tally.commit(level);
            if counted {
                log::info!("Counted impulse: total={:?}", self.tally.count());
            }
            EdgeReaction::Committed { counted }
        } else if self.window.arm_with(schedule) {
            EdgeReaction::Armed
        } else {
            EdgeReaction::Coalesced
        }
    }

    /// Runs the settle check of an elapsed window.
    ///
    /// `raw` is the electrical level sampled now, at window expiry. The
    /// level is committed only when it matches the last observed one, a
    /// level that moved again during the window is discarded as noise. A
    /// check whose window was cancelled in the meantime is stale and
    /// leaves all state alone.
    pub fn on_settle(&mut self, raw: bool) -> SettleReaction {
        if self.window.disarm().is_none() {
            log::warn!("Ignoring stale settle check");
            return SettleReaction::Stale;
        }

        let level = self.config.logical(raw);
        if level == self.observed {
            let counted = self.tally.commit(level);
            if counted {
                log::info!("Counted impulse: total={:?}", self.tally.count());
            }
            SettleReaction::Committed { counted }
        } else {
            SettleReaction::Discarded
        }
    }

    /// Cancels a pending window at teardown.
    ///
    /// Hands back the retained handle so the caller can revoke the
    /// scheduled check. A settle check that still arrives afterwards
    /// reports [`SettleReaction::Stale`] and has no effect.
    pub fn cancel(&mut self) -> Option<H> {
        self.window.disarm()
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.tally.count()
    }

    /// Overwrites the count without touching any edge tracking state.
    pub fn set_count(&mut self, count: u32) {
        self.tally.set_count(count);
    }

    #[must_use]
    pub fn committed(&self) -> bool {
        self.tally.committed()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.window.is_armed()
    }
}
