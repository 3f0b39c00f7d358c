//! Logging helpers that tag every line with the name of the filter instance.
//!
//! Everything goes through the [`log`] facade, the host (or a test) decides where it ends up.

use std::fmt::Arguments;

use crate::enums::ObsLogLevel;

pub const LOG_TARGET: &str = "obs_app_audio_restart";

/// Formats a message the way this filter prefixes its log lines.
pub fn prefixed(filter_name: &str, args: Arguments<'_>) -> String {
    format!("[app audio source restart filter: '{}'] {}", filter_name, args)
}

/// Whether a line at `level` would be written by the installed logger.
pub fn level_enabled(level: ObsLogLevel) -> bool {
    let level: log::Level = level.into();
    log::log_enabled!(target: LOG_TARGET, level)
}

/// Writes an already level-checked line, see [`filter_log_at!`](crate::filter_log_at).
pub fn filter_log(level: ObsLogLevel, filter_name: &str, args: Arguments<'_>) {
    let level: log::Level = level.into();
    log::log!(target: LOG_TARGET, level, "{}", prefixed(filter_name, args));
}

/// Logs at `$level` with the name of `$filter` (an [`ObsSourceHandle`](crate::sources::ObsSourceHandle))
/// as prefix. Neither the name nor the message is evaluated when the level is disabled.
#[macro_export]
macro_rules! filter_log_at {
    ($level:expr, $filter:expr, $($arg:tt)+) => {{
        let level: $crate::enums::ObsLogLevel = $level;
        if $crate::logger::level_enabled(level) {
            $crate::logger::filter_log(
                level,
                &$crate::sources::ObsSourceHandle::name($filter),
                format_args!($($arg)+),
            );
        }
    }};
}

#[macro_export]
macro_rules! filter_info {
    ($filter:expr, $($arg:tt)+) => {
        $crate::filter_log_at!($crate::enums::ObsLogLevel::Info, $filter, $($arg)+)
    };
}

#[macro_export]
macro_rules! filter_warn {
    ($filter:expr, $($arg:tt)+) => {
        $crate::filter_log_at!($crate::enums::ObsLogLevel::Warning, $filter, $($arg)+)
    };
}

#[macro_export]
macro_rules! filter_debug {
    ($filter:expr, $($arg:tt)+) => {
        $crate::filter_log_at!($crate::enums::ObsLogLevel::Debug, $filter, $($arg)+)
    };
}

#[cfg(test)]
mod logger_tests;
