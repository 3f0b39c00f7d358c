use num_derive::{FromPrimitive, ToPrimitive};

use crate::macros::enum_from_number;

/// Integer type bindgen emits for C enums on the current platform.
#[cfg(windows)]
pub type ObsRawEnum = i32;
#[cfg(not(windows))]
pub type ObsRawEnum = u32;

/// Kind of an object in the OBS source graph, numbered like `enum obs_source_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum ObsSourceType {
    Input = 0,
    Filter = 1,
    Transition = 2,
    Scene = 3,
}

impl ObsSourceType {
    /// Converts the raw value returned by `obs_source_get_type`.
    /// Returns `None` for values this crate does not know about.
    pub fn from_raw(raw: ObsRawEnum) -> Option<Self> {
        enum_from_number!(ObsSourceType, raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum ObsLogLevel {
    Error = 100,
    Warning = 200,
    Info = 300,
    Debug = 400,
}

impl From<ObsLogLevel> for log::Level {
    fn from(level: ObsLogLevel) -> Self {
        match level {
            ObsLogLevel::Error => log::Level::Error,
            ObsLogLevel::Warning => log::Level::Warn,
            ObsLogLevel::Info => log::Level::Info,
            ObsLogLevel::Debug => log::Level::Debug,
        }
    }
}

/// Mirrors `enum obs_text_type`. Only the informational variant is used by this filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum ObsTextType {
    Default = 0,
    Password = 1,
    Multiline = 2,
    Info = 3,
}

/// Mirrors `enum obs_text_info_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum ObsTextInfoType {
    Normal = 0,
    Warning = 1,
    Error = 2,
}
