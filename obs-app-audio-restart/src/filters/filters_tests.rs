use crate::{
    enums::{ObsSourceType, ObsTextInfoType, ObsTextType},
    filters::{AppAudioRestartFilter, ObsProperty, ToggleObserver},
    sources::RestartOutcome,
    testing::{MockSettings, MockSource},
    utils::{S_DESCRIPTION, TEXT_LONG_DESCRIPTION},
};

fn attached_filter(window: &str) -> (MockSource, MockSource, AppAudioRestartFilter<MockSource>) {
    let input = MockSource::app_audio("Game audio", window);
    let filter = MockSource::filter("Restart", &input);
    let state = AppAudioRestartFilter::create(&MockSettings::new(), filter.clone());
    (input, filter, state)
}

#[test]
fn observer_reports_each_transition_once() {
    let mut toggle = ToggleObserver::new(true);

    assert!(!toggle.observe(true));
    assert!(toggle.observe(false));
    assert!(!toggle.observe(false));
    assert!(!toggle.observe(false));
    assert!(toggle.observe(true));
    assert!(toggle.enabled());
}

#[test]
fn resync_does_not_report_a_transition() {
    let mut toggle = ToggleObserver::new(false);
    toggle.resync(true);

    assert!(toggle.enabled());
    assert!(!toggle.observe(true));
}

#[test]
fn create_mirrors_the_host_flag() {
    let input = MockSource::app_audio("Game audio", ":Game:cls");
    let filter = MockSource::filter("Restart", &input);
    filter.set_enabled(false);

    let state = AppAudioRestartFilter::create(&MockSettings::new(), filter);
    assert!(!state.enabled());
}

#[test]
fn steady_ticks_do_nothing() {
    let (input, _filter, mut state) = attached_filter(":Game:cls");

    for _ in 0..5 {
        assert_eq!(state.tick(1.0 / 60.0), None);
    }
    assert_eq!(input.commit_count(), 0);
}

#[test]
fn every_toggle_restarts_once() {
    let (input, filter, mut state) = attached_filter(":Game:cls");

    filter.set_enabled(false);
    assert_eq!(state.tick(0.016), Some(RestartOutcome::Restarted));
    assert_eq!(state.tick(0.016), None);
    assert_eq!(input.commit_count(), 2);

    filter.set_enabled(true);
    assert_eq!(state.tick(0.016), Some(RestartOutcome::Restarted));
    assert_eq!(state.tick(0.016), None);
    assert_eq!(input.commit_count(), 4);
    assert_eq!(input.window().as_deref(), Some(":Game:cls"));
}

#[test]
fn attach_and_detach_resync_without_restart() {
    let (input, filter, mut state) = attached_filter(":Game:cls");

    filter.set_enabled(false);
    state.filter_add(&input);
    assert!(!state.enabled());
    assert_eq!(state.tick(0.016), None);

    filter.set_enabled(true);
    state.filter_remove(&input);
    assert!(state.enabled());
    assert_eq!(state.tick(0.016), None);
    assert_eq!(input.commit_count(), 0);
}

#[test]
fn toggle_without_input_source_is_harmless() {
    let scene = MockSource::new("Scene", ObsSourceType::Scene, "scene");
    let filter = MockSource::filter("Restart", &scene);
    let mut state = AppAudioRestartFilter::create(&MockSettings::new(), filter.clone());

    filter.set_enabled(false);
    assert_eq!(state.tick(0.016), None);
    assert!(!state.enabled());
    assert_eq!(scene.commit_count(), 0);
}

#[test]
fn host_errors_do_not_escape_tick() {
    let (input, filter, mut state) = attached_filter(":Game:cls");
    input.fail_next_updates(2);

    filter.set_enabled(false);
    assert_eq!(state.tick(0.016), None);
    assert_eq!(input.window().as_deref(), Some(":Game:cls"));

    filter.set_enabled(true);
    assert_eq!(state.tick(0.016), Some(RestartOutcome::Restarted));
}

#[test]
fn metadata_matches_registration() {
    assert_eq!(AppAudioRestartFilter::<MockSource>::ID, "app_audio_source_restart_filter");
    assert_eq!(AppAudioRestartFilter::<MockSource>::name(), "App Audio Restart");
    assert_eq!(AppAudioRestartFilter::<MockSource>::SOURCE_TYPE, ObsSourceType::Filter);
    assert_eq!(AppAudioRestartFilter::<MockSource>::OUTPUT_FLAGS, 1 << 1);
}

#[test]
fn defaults_leave_settings_untouched() {
    let mut settings = MockSettings::new().with_string("window", ":a:b");
    AppAudioRestartFilter::<MockSource>::get_defaults(&mut settings);
    assert_eq!(settings, MockSettings::new().with_string("window", ":a:b"));
}

#[test]
fn properties_hold_only_the_description() {
    let (_input, _filter, state) = attached_filter(":Game:cls");
    let props = state.get_properties();

    assert_eq!(props.len(), 1);
    let Some(ObsProperty::Text(text)) = props.get(S_DESCRIPTION) else {
        panic!("description property missing");
    };
    assert_eq!(text.description(), None);
    assert_eq!(text.text_type(), ObsTextType::Info);
    assert_eq!(text.long_description(), Some(TEXT_LONG_DESCRIPTION));
    assert_eq!(text.info_type(), ObsTextInfoType::Normal);
    assert!(text.word_wrap());
}
