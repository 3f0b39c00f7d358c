//! An in-memory stand-in for the OBS source graph.
//!
//! Every successful commit is recorded so tests can check how often a source was updated
//! and with which values.

use std::{collections::BTreeMap, sync::Arc};

use parking_lot::Mutex;

use crate::{
    data::{ObsDataGetters, ObsDataSetters},
    enums::ObsSourceType,
    sources::ObsSourceHandle,
    utils::{ObsError, APP_AUDIO_CAPTURE_ID, S_WINDOW},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockSettings {
    values: BTreeMap<String, String>,
    set_calls: usize,
    /// 1-based index of the `set_string` call to reject
    rejected_set: Option<usize>,
    unreadable: bool,
}

impl MockSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl ObsDataGetters for MockSettings {
    fn get_string(&self, key: &str) -> Result<Option<String>, ObsError> {
        if self.unreadable {
            return Err(ObsError::StringConversionError);
        }

        Ok(self.values.get(key).cloned())
    }
}

impl ObsDataSetters for MockSettings {
    fn set_string(&mut self, key: &str, value: &str) -> Result<(), ObsError> {
        self.set_calls += 1;
        if self.rejected_set == Some(self.set_calls) {
            return Err(ObsError::InvalidOperation(format!(
                "setting {} was rejected",
                key
            )));
        }

        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug)]
struct MockSourceState {
    name: String,
    source_type: ObsSourceType,
    id: String,
    enabled: bool,
    parent: Option<MockSource>,
    settings: Option<MockSettings>,
    commits: Vec<MockSettings>,
    /// Number of upcoming updates to reject
    failing_updates: usize,
    update_attempts: usize,
    /// Applied to the next settings snapshot only
    rejected_set: Option<usize>,
    unreadable_settings: bool,
    name_lookups: usize,
}

/// A reference to a shared mock source. Clones point to the same source.
#[derive(Debug, Clone)]
pub struct MockSource {
    state: Arc<Mutex<MockSourceState>>,
}

impl MockSource {
    pub fn new(name: &str, source_type: ObsSourceType, id: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockSourceState {
                name: name.to_string(),
                source_type,
                id: id.to_string(),
                enabled: true,
                parent: None,
                settings: Some(MockSettings::new()),
                commits: Vec::new(),
                failing_updates: 0,
                update_attempts: 0,
                rejected_set: None,
                unreadable_settings: false,
                name_lookups: 0,
            })),
        }
    }

    /// An application audio capture source capturing `window`.
    pub fn app_audio(name: &str, window: &str) -> Self {
        let source = Self::new(name, ObsSourceType::Input, APP_AUDIO_CAPTURE_ID);
        source.state.lock().settings = Some(MockSettings::new().with_string(S_WINDOW, window));
        source
    }

    /// A filter attached to `parent`.
    pub fn filter(name: &str, parent: &MockSource) -> Self {
        let filter = Self::new(name, ObsSourceType::Filter, crate::utils::FILTER_ID);
        filter.state.lock().parent = Some(parent.clone());
        filter
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.state.lock().enabled = enabled;
    }

    pub fn set_parent(&self, parent: Option<&MockSource>) {
        self.state.lock().parent = parent.cloned();
    }

    /// Makes the host report no settings for this source.
    pub fn remove_settings(&self) {
        self.state.lock().settings = None;
    }

    /// Rejects the next `count` commits with [`ObsError::UpdateFailed`].
    pub fn fail_next_updates(&self, count: usize) {
        self.state.lock().failing_updates = count;
    }

    /// The next settings snapshot handed out rejects its `call`-th `set_string`
    /// with [`ObsError::InvalidOperation`]. Later snapshots behave normally.
    pub fn reject_set_string(&self, call: usize) {
        self.state.lock().rejected_set = Some(call);
    }

    /// Every settings snapshot fails to read strings with [`ObsError::StringConversionError`].
    pub fn make_settings_unreadable(&self) {
        self.state.lock().unreadable_settings = true;
    }

    /// How often the name of this source was asked for.
    pub fn name_lookups(&self) -> usize {
        self.state.lock().name_lookups
    }

    /// The `window` value currently persisted on the source.
    pub fn window(&self) -> Option<String> {
        self.state
            .lock()
            .settings
            .as_ref()
            .and_then(|s| s.values.get(S_WINDOW).cloned())
    }

    /// The `window` value of every commit, in order.
    pub fn committed_windows(&self) -> Vec<Option<String>> {
        self.state
            .lock()
            .commits
            .iter()
            .map(|s| s.values.get(S_WINDOW).cloned())
            .collect()
    }

    pub fn commit_count(&self) -> usize {
        self.state.lock().commits.len()
    }
}

impl ObsSourceHandle for MockSource {
    type Settings = MockSettings;

    fn name(&self) -> String {
        let mut state = self.state.lock();
        state.name_lookups += 1;
        state.name.clone()
    }

    fn source_type(&self) -> ObsSourceType {
        self.state.lock().source_type
    }

    fn unversioned_id(&self) -> String {
        self.state.lock().id.clone()
    }

    fn enabled(&self) -> bool {
        self.state.lock().enabled
    }

    fn filter_parent(&self) -> Option<Self> {
        self.state.lock().parent.clone()
    }

    fn settings(&self) -> Option<Self::Settings> {
        let mut state = self.state.lock();
        let rejected_set = state.rejected_set.take();
        let unreadable = state.unreadable_settings;

        state.settings.as_ref().map(|settings| MockSettings {
            values: settings.values.clone(),
            set_calls: 0,
            rejected_set,
            unreadable,
        })
    }

    fn update(&self, settings: &Self::Settings) -> Result<(), ObsError> {
        let mut state = self.state.lock();
        state.update_attempts += 1;
        if state.failing_updates > 0 {
            state.failing_updates -= 1;
            return Err(ObsError::UpdateFailed(format!(
                "{} rejected update {}",
                state.name, state.update_attempts
            )));
        }

        let committed = MockSettings {
            values: settings.values.clone(),
            ..MockSettings::default()
        };
        state.settings = Some(committed.clone());
        state.commits.push(committed);
        Ok(())
    }
}
