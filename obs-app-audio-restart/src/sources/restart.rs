use crate::{
    data::{ObsDataGetters, ObsDataSetters},
    filter_debug, filter_info, filter_warn,
    sources::ObsSourceHandle,
    utils::{ObsError, APP_AUDIO_CAPTURE_ID, S_WINDOW},
    window::{canonicalize, changes_value},
};

/// What happened when a restart was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartOutcome {
    /// Both commits went through.
    Restarted,
    /// The source is not an application audio capture, nothing was touched.
    UnsupportedKind,
    /// The host had no settings for the source, nothing was touched.
    SettingsUnavailable,
}

/// Forces `source` to reinitialize by committing its window setting away and back.
///
/// `filter` is only used to prefix log lines. The persisted `window` value is the same
/// before and after this call. Once the away value has been staged, the original is
/// always written back, even if staging or committing one of the two values fails. The
/// first error is returned, any later one is logged.
pub fn restart_source<S: ObsSourceHandle>(
    filter: &S,
    source: &S,
) -> Result<RestartOutcome, ObsError> {
    let name = source.name();
    filter_info!(filter, "Restart source: {}...", name);

    // We only do something if it is the application audio source.
    if source.unversioned_id() != APP_AUDIO_CAPTURE_ID {
        return Ok(RestartOutcome::UnsupportedKind);
    }

    let Some(mut settings) = source.settings() else {
        filter_info!(filter, "No settings available for source: {}", name);
        return Ok(RestartOutcome::SettingsUnavailable);
    };

    let original = settings.get_string(S_WINDOW)?.unwrap_or_default();
    if !changes_value(&original) {
        filter_debug!(
            filter,
            "Window of {} has no colon, reinitialization is up to the host",
            name
        );
    }

    let away = canonicalize(&original);
    settings.set_string(S_WINDOW, &away)?;
    let away_result = source.update(&settings);
    let restore_result = restore_window(filter, source, &mut settings, &original);

    match (away_result, restore_result) {
        (Ok(()), Ok(())) => {}
        (Err(away_err), restore_result) => {
            if let Err(restore_err) = restore_result {
                filter_warn!(filter, "Restoring the window of {} failed: {}", name, restore_err);
            }
            filter_warn!(filter, "Changing the window of {} away failed: {}", name, away_err);
            return Err(away_err);
        }
        (Ok(()), Err(restore_err)) => {
            filter_warn!(filter, "Restoring the window of {} failed: {}", name, restore_err);
            return Err(restore_err);
        }
    }

    filter_info!(filter, "Restarted source: {}!", name);
    Ok(RestartOutcome::Restarted)
}

/// Commits `original` as the window of `source`.
///
/// If it cannot be staged on `settings`, that snapshot still holds the away value and must
/// not be committed, so the original is committed from a fresh snapshot instead. The
/// staging error is returned either way.
fn restore_window<S: ObsSourceHandle>(
    filter: &S,
    source: &S,
    settings: &mut S::Settings,
    original: &str,
) -> Result<(), ObsError> {
    let staged = match settings.set_string(S_WINDOW, original) {
        Ok(()) => return source.update(settings),
        Err(e) => e,
    };

    let Some(mut fresh) = source.settings() else {
        return Err(staged);
    };

    let fallback = fresh
        .set_string(S_WINDOW, original)
        .and_then(|()| source.update(&fresh));
    if let Err(e) = fallback {
        filter_warn!(filter, "Restoring the window from a fresh snapshot failed: {}", e);
    }

    Err(staged)
}
