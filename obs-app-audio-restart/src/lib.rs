//! An OBS audio filter that restarts the application audio capture source it is attached to.
//!
//! Every time the filter gets toggled (the eye icon next to it in OBS), the enclosing
//! application audio source is reinitialized by changing its configured window away and
//! back again. This is meant as a building block for plugins that can control filters
//! (for example the Move plugin), which otherwise have no way to restart a source.
//!
//! The host is reached through the traits in [`sources`] and [`data`], so the filter
//! logic itself never touches raw libobs pointers.

pub mod data;
pub mod enums;
pub mod filters;
pub mod logger;
mod macros;
pub mod sources;
pub mod utils;
pub mod window;

#[cfg(any(test, feature = "test-harness"))]
pub mod testing;

pub use filters::AppAudioRestartFilter;
pub use sources::{ObsSourceHandle, RestartOutcome};
pub use utils::ObsError;
