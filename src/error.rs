use std::io;
use thiserror::Error;

/// Custom error type for hwsnap
#[derive(Error, Debug)]
pub enum HwsnapError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A collector legitimately found nothing to report.
    #[error("no battery data found")]
    NoBatteryData,

    /// A panic was caught at the battery collection boundary.
    #[error("battery collection failed: {0}")]
    BatteryCollection(String),

    #[error("command `{program}` failed: {reason}")]
    CommandFailed { program: String, reason: String },

    #[error("command `{program}` timed out after {timeout_ms} ms")]
    CommandTimeout { program: String, timeout_ms: u64 },

    #[error("Not supported on this platform: {0}")]
    Unsupported(String),

    /// Failure reported by the host sensor facility, passed through as-is.
    #[error("{0}")]
    Sensors(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for hwsnap
pub type Result<T> = std::result::Result<T, HwsnapError>;

impl HwsnapError {
    /// Create a command failure error
    pub fn command_failed<P: Into<String>, S: Into<String>>(program: P, reason: S) -> Self {
        HwsnapError::CommandFailed {
            program: program.into(),
            reason: reason.into(),
        }
    }

    /// Create an unsupported-platform error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        HwsnapError::Unsupported(msg.into())
    }

    pub fn sensors<S: Into<String>>(msg: S) -> Self {
        HwsnapError::Sensors(msg.into())
    }

    pub fn battery_collection<S: Into<String>>(msg: S) -> Self {
        HwsnapError::BatteryCollection(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        HwsnapError::Other(msg.into())
    }

    /// Whether this error means "nothing to report" rather than a failure.
    pub fn is_no_data(&self) -> bool {
        matches!(self, HwsnapError::NoBatteryData)
    }
}
