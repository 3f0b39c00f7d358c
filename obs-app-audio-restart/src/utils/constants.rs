/// Source id this filter registers under.
pub const FILTER_ID: &str = "app_audio_source_restart_filter";
/// Display name shown in the filter list.
pub const FILTER_NAME: &str = "App Audio Restart";

/// `OBS_SOURCE_AUDIO` output flag.
pub const OBS_SOURCE_AUDIO: u32 = 1 << 1;

/// Unversioned id of the application audio capture source, not exported by the bindings.
pub const APP_AUDIO_CAPTURE_ID: &str = "wasapi_process_output_capture";

/// Settings key of the capture target of an application audio source.
pub const S_WINDOW: &str = "window";
pub const S_DESCRIPTION: &str = "description";

pub const TEXT_LONG_DESCRIPTION: &str = concat!(
    "If this filter is inside an application audio source, it will restart it, ",
    "by changing the configured window twice (away and back). This happens every time ",
    "the filter is getting toggled (enabled or disabled - the eye icon on the left). ",
    "This is meant as a building block which is used with other plugins that can control ",
    "filters, like the Move plugin By Exeldro."
);
