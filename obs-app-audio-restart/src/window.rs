//! Canonicalization of the `window` setting of an application audio source.
//!
//! OBS stores the capture target as colon-separated segments. Changing the value in a way
//! that is guaranteed to differ from the original makes OBS treat the source as
//! reconfigured, and writing the saved original afterwards restores it exactly.

use std::borrow::Cow;

/// Produces the "away" value used to force a reinitialization.
///
/// - A value starting with `:` gets a `1` prepended.
/// - Otherwise everything before the first `:` is dropped, keeping the colon.
/// - A value without any colon is returned as is, borrowing the input.
pub fn canonicalize(window: &str) -> Cow<'_, str> {
    if window.starts_with(':') {
        return Cow::Owned(format!("1{}", window));
    }

    match window.find(':') {
        Some(colon) => Cow::Borrowed(&window[colon..]),
        None => Cow::Borrowed(window),
    }
}

/// Whether writing the canonicalized value would actually change the setting.
///
/// When this is `false` both commits of a restart carry the same value and it is up to
/// the host whether the source reinitializes at all.
pub fn changes_value(window: &str) -> bool {
    canonicalize(window) != window
}
