mod restart;
pub use restart::*;

use crate::{
    data::{ObsDataGetters, ObsDataSetters},
    enums::ObsSourceType,
    utils::ObsError,
};

/// A borrowed handle to an object in the OBS source graph.
///
/// Cloning a handle must not create a new source, it only hands out another reference
/// to the same one (like `obs_source_get_ref`).
pub trait ObsSourceHandle: Clone {
    type Settings: ObsDataGetters + ObsDataSetters;

    fn name(&self) -> String;
    fn source_type(&self) -> ObsSourceType;
    /// The id without version suffix, e.g. `wasapi_process_output_capture` instead of `..._v2`.
    fn unversioned_id(&self) -> String;
    fn enabled(&self) -> bool;
    /// The source this one is attached to as a filter, if any.
    fn filter_parent(&self) -> Option<Self>;

    /// Returns the current settings of the source, or `None` if the host has none to give.
    fn settings(&self) -> Option<Self::Settings>;
    /// Commits the given settings to the source (`obs_source_update`).
    fn update(&self, settings: &Self::Settings) -> Result<(), ObsError>;
}

/// Walks up the filter chain starting at `source` itself until it reaches an input source.
pub fn try_find_input_source<S: ObsSourceHandle>(source: &S) -> Option<S> {
    let mut current = Some(source.clone());
    while let Some(source) = current {
        if source.source_type() == ObsSourceType::Input {
            return Some(source);
        }

        current = source.filter_parent();
    }

    None
}
