use crate::{enums::ObsLogLevel, filter_debug, filter_info, filter_warn, testing::MockSource};

use super::{level_enabled, prefixed};

#[test]
fn lines_carry_the_filter_name() {
    assert_eq!(
        prefixed("Restart", format_args!("Restart source: {}...", "Game audio")),
        "[app audio source restart filter: 'Restart'] Restart source: Game audio..."
    );
}

#[test]
fn obs_levels_map_to_log_levels() {
    assert_eq!(log::Level::from(ObsLogLevel::Error), log::Level::Error);
    assert_eq!(log::Level::from(ObsLogLevel::Warning), log::Level::Warn);
    assert_eq!(log::Level::from(ObsLogLevel::Info), log::Level::Info);
    assert_eq!(log::Level::from(ObsLogLevel::Debug), log::Level::Debug);
}

#[test]
fn disabled_levels_skip_the_name_lookup() {
    // No logger is installed in the unit test binary, so every level is disabled.
    let input = MockSource::app_audio("Game audio", ":Game:cls");
    let filter = MockSource::filter("Restart", &input);

    assert!(!level_enabled(ObsLogLevel::Debug));
    filter_debug!(&filter, "Restart source: {}...", "Game audio");
    filter_info!(&filter, "filter_add");
    filter_warn!(&filter, "Restarting {} failed", "Game audio");

    assert_eq!(filter.name_lookups(), 0);
}
