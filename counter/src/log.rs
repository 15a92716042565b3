macro_rules! info {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)+);
    );
}

// A bare `use warn` would be ambiguous with the builtin attribute of the
// same name, so the macro is defined under a placeholder and renamed on
// re-export.
macro_rules! warn_ {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)+);
    );
}

pub(crate) use info;
pub(crate) use warn_ as warn;
