#![allow(unused, reason = "logger")]
//! Logging macros, expanded only with the `log` feature.

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!(target: "httpfromtcp", $($tt)*);
    };
}

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: "httpfromtcp", $($tt)*);
    };
}

macro_rules! warning {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::warn!(target: "httpfromtcp", $($tt)*);
    };
}

pub(crate) use {debug, trace, warning};
