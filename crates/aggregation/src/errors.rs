use crate::time_averaging::Generations;
use thiserror::Error;

/// Error type for time-averaging operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeAveragingError {
    /// The window stack could not be built from the supplied parameters.
    #[error("Invalid time-averaging configuration: {0}")]
    InvalidConfiguration(String),

    /// No window was built for the requested duration.
    #[error("No time-averaging window of {0} generations")]
    UnknownWindow(Generations),

    /// A configuration document could not be parsed.
    #[error("Failed to parse time-averaging configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for TimeAveragingError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

impl From<transmission_popgen::PopgenError> for TimeAveragingError {
    fn from(e: transmission_popgen::PopgenError) -> Self {
        Self::InvalidConfiguration(e.to_string())
    }
}
