//! Logging macros for the schedule engine with verbosity level control.
//!
//! Provides zero-cost logging when disabled (verbosity=0).
//! - 0: SILENT
//! - 1: SUMMARY (one line per computation)
//! - 2: PASSES (per-task forward/backward results)
//! - 3: DEBUG (per-dependency candidate dates)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_SUMMARY: u8 = 1;
pub const VERBOSITY_PASSES: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at SUMMARY level (verbosity >= 1).
#[macro_export]
macro_rules! log_summary {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SUMMARY {
            eprintln!($($arg)*);
        }
    };
}

/// Log at PASSES level (verbosity >= 2).
///
/// Used for: resolved early/late dates of each task.
#[macro_export]
macro_rules! log_passes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_PASSES {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
///
/// Used for: every candidate date and which dependency binds.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}
