mod properties;
mod toggle;

pub use properties::*;
pub use toggle::*;

use crate::{
    enums::ObsSourceType,
    filter_info, filter_warn,
    sources::{restart_source, try_find_input_source, ObsSourceHandle, RestartOutcome},
    utils::{FILTER_ID, FILTER_NAME, OBS_SOURCE_AUDIO},
};

/// State of one instance of the app audio restart filter.
///
/// Lives from `create` until `destroy`. `context` is the filter source itself, which is
/// owned by the host.
#[derive(Debug)]
pub struct AppAudioRestartFilter<S: ObsSourceHandle> {
    context: S,
    toggle: ToggleObserver,
}

impl<S: ObsSourceHandle> AppAudioRestartFilter<S> {
    pub const ID: &'static str = FILTER_ID;
    pub const SOURCE_TYPE: ObsSourceType = ObsSourceType::Filter;
    pub const OUTPUT_FLAGS: u32 = OBS_SOURCE_AUDIO;

    pub fn name() -> &'static str {
        FILTER_NAME
    }

    pub fn create(settings: &S::Settings, filter: S) -> Self {
        let enabled = filter.enabled();
        let mut state = Self {
            context: filter,
            toggle: ToggleObserver::new(enabled),
        };

        state.update(settings);
        state
    }

    /// There is nothing to configure.
    pub fn update(&mut self, _settings: &S::Settings) {}

    pub fn destroy(self) {}

    pub fn get_defaults(_settings: &mut S::Settings) {}

    pub fn get_properties(&self) -> ObsProperties {
        filter_properties()
    }

    pub fn context(&self) -> &S {
        &self.context
    }

    /// The enabled flag as last observed from the host.
    pub fn enabled(&self) -> bool {
        self.toggle.enabled()
    }

    pub fn filter_add(&mut self, _parent: &S) {
        self.toggle.resync(self.context.enabled());
        filter_info!(&self.context, "filter_add");
    }

    pub fn filter_remove(&mut self, _parent: &S) {
        self.toggle.resync(self.context.enabled());
        filter_info!(&self.context, "filter_remove");
    }

    /// Per-frame callback. Restarts the enclosing source once for every observed toggle.
    ///
    /// Returns the outcome of the restart if one was attempted and did not fail.
    pub fn tick(&mut self, _seconds: f32) -> Option<RestartOutcome> {
        if !self.toggle.observe(self.context.enabled()) {
            return None;
        }

        self.enabled_changed()
    }

    fn enabled_changed(&self) -> Option<RestartOutcome> {
        let Some(source) = try_find_input_source(&self.context) else {
            filter_info!(&self.context, "Input source for filter not found");
            return None;
        };

        match restart_source(&self.context, &source) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                filter_warn!(&self.context, "Restarting {} failed: {}", source.name(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod filters_tests;
