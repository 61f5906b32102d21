// Log through defmt or log when one of them is enabled, otherwise compile the
// statements away. Declared first in lib.rs so the macros are in scope for
// every other module.
cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        macro_rules! trace {
            ($($arg:tt)*) => { ::defmt::trace!($($arg)*) };
        }
        macro_rules! debug {
            ($($arg:tt)*) => { ::defmt::debug!($($arg)*) };
        }
        macro_rules! warn {
            ($($arg:tt)*) => { ::defmt::warn!($($arg)*) };
        }
    } else if #[cfg(feature = "log")] {
        macro_rules! trace {
            ($($arg:tt)*) => { ::log::trace!($($arg)*) };
        }
        macro_rules! debug {
            ($($arg:tt)*) => { ::log::debug!($($arg)*) };
        }
        macro_rules! warn {
            ($($arg:tt)*) => { ::log::warn!($($arg)*) };
        }
    } else {
        macro_rules! trace {
            ($($arg:expr),* $(,)?) => {{ $( let _ = &$arg; )* }};
        }
        macro_rules! debug {
            ($($arg:expr),* $(,)?) => {{ $( let _ = &$arg; )* }};
        }
        macro_rules! warn {
            ($($arg:expr),* $(,)?) => {{ $( let _ = &$arg; )* }};
        }
    }
}
