//! Static description of the counted line.

/// Validated configuration of a single counted line.
///
/// The embedding constructs this from its hardware description (board
/// constants, a device tree, a command line) and hands it over fully
/// formed. Raw configuration sources are never parsed here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// The line is active low and logical levels are the complement of
    /// electrical ones.
    pub inverted: bool,
    /// Length of the debounce window in milliseconds. Zero disables
    /// debouncing and every edge is committed inline.
    pub debounce_ms: u32,
}

impl Config {
    /// Translates a raw electrical level into a logical one.
    #[must_use]
    pub fn logical(&self, raw: bool) -> bool {
        raw ^ self.inverted
    }

    #[must_use]
    pub fn debounced(&self) -> bool {
        self.debounce_ms != 0
    }
}
