use std::fmt::Display;

/// Error type for calls into the OBS host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObsError {
    /// A string returned by the host was not valid UTF-8
    StringConversionError,
    /// Committing settings to a source failed
    UpdateFailed(String),
    /// The host refused to change a value
    InvalidOperation(String),
}

impl Display for ObsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObsError::StringConversionError => write!(f, "Failed to convert to string"),
            ObsError::UpdateFailed(e) => write!(f, "Failed to update source: {}", e),
            ObsError::InvalidOperation(e) => write!(f, "Invalid operation: {}", e),
        }
    }
}

impl std::error::Error for ObsError {}
