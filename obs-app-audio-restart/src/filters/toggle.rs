/// Software edge detector over the polled enabled flag of a filter.
///
/// OBS has no event for a filter being toggled that reaches the filter itself, so the
/// flag is compared once per frame against the last observed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleObserver {
    enabled: bool,
}

impl ToggleObserver {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Records `current` and returns `true` if it differs from the previous observation.
    pub fn observe(&mut self, current: bool) -> bool {
        if self.enabled == current {
            return false;
        }

        self.enabled = current;
        true
    }

    /// Overwrites the stored state without reporting a transition.
    pub fn resync(&mut self, current: bool) {
        self.enabled = current;
    }
}
