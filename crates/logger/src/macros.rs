//! crates/logger/src/macros.rs
//! Formatting macros for the per-level shortcut functions.
//!
//! Each macro accepts `format!`-style arguments and forwards them to the
//! function of the same name, returning its `io::Result<usize>`.

/// Prints a formatted message through the standard logger at `spam` level.
///
/// # Example
/// ```ignore
/// klio_logger::spamf!("polled {} queues", count)?;
/// ```
#[macro_export]
macro_rules! spamf {
    ($($arg:tt)*) => {
        $crate::spamf(::std::format_args!($($arg)*))
    };
}

/// Prints a formatted message through the standard logger at `debug` level.
///
/// # Example
/// ```ignore
/// klio_logger::debugf!("resolved {} to {}", host, addr)?;
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)*) => {
        $crate::debugf(::std::format_args!($($arg)*))
    };
}

/// Prints a formatted message through the standard logger at `verbose` level.
#[macro_export]
macro_rules! verbosef {
    ($($arg:tt)*) => {
        $crate::verbosef(::std::format_args!($($arg)*))
    };
}

/// Prints a formatted message through the standard logger at `info` level.
///
/// # Example
/// ```ignore
/// klio_logger::infof!("deployed {} services", services.len())?;
/// ```
#[macro_export]
macro_rules! infof {
    ($($arg:tt)*) => {
        $crate::infof(::std::format_args!($($arg)*))
    };
}

/// Prints a formatted message through the standard logger at `warn` level.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)*) => {
        $crate::warnf(::std::format_args!($($arg)*))
    };
}

/// Prints a formatted message through the standard logger at `error` level.
///
/// # Example
/// ```ignore
/// klio_logger::errorf!("command failed: {}", err)?;
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::errorf(::std::format_args!($($arg)*))
    };
}

/// Prints a formatted message through the standard logger at `fatal` level.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)*) => {
        $crate::fatalf(::std::format_args!($($arg)*))
    };
}
