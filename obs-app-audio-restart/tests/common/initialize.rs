use env_logger::Env;
use obs_app_audio_restart::{
    testing::{MockSettings, MockSource},
    AppAudioRestartFilter,
};

pub fn init_logger() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}

/// Creates an application audio source capturing `window` with the restart filter attached.
#[allow(dead_code)]
pub fn app_audio_with_filter(
    window: &str,
    enabled: bool,
) -> (MockSource, MockSource, AppAudioRestartFilter<MockSource>) {
    init_logger();

    let input = MockSource::app_audio("Application Audio Capture", window);
    let filter = MockSource::filter("App Audio Restart", &input);
    filter.set_enabled(enabled);

    let mut state = AppAudioRestartFilter::create(&MockSettings::new(), filter.clone());
    state.filter_add(&input);
    (input, filter, state)
}
