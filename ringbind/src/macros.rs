//! Crate-internal assertion and logging macros
//!
//! Logging goes to `defmt` when the `defmt` feature is on, otherwise to `log`
//! when the `log` feature is on, otherwise nowhere. Arguments are still
//! type-checked in the silent configuration but never evaluated at runtime.
//!
//! `ring_assert!` guards caller preconditions (reading an empty ring, cursors
//! outside the storage). It is a `debug_assert!` unless `strict-checks` is
//! enabled, so release firmware pays nothing for it.

#[cfg(feature = "strict-checks")]
macro_rules! ring_assert {
    ($($arg:tt)*) => { assert!($($arg)*) };
}

#[cfg(not(feature = "strict-checks"))]
macro_rules! ring_assert {
    ($($arg:tt)*) => { debug_assert!($($arg)*) };
}

#[cfg(feature = "defmt")]
macro_rules! ring_trace {
    ($($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! ring_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! ring_trace {
    ($($arg:tt)*) => {
        if false {
            let _ = core::format_args!($($arg)*);
        }
    };
}

#[cfg(feature = "defmt")]
macro_rules! ring_debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! ring_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! ring_debug {
    ($($arg:tt)*) => {
        if false {
            let _ = core::format_args!($($arg)*);
        }
    };
}

#[cfg(feature = "defmt")]
macro_rules! ring_warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
macro_rules! ring_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! ring_warn {
    ($($arg:tt)*) => {
        if false {
            let _ = core::format_args!($($arg)*);
        }
    };
}
