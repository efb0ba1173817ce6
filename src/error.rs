//! Error types for Personance
//!
//! The computation layer raises `InvalidRecord` and `InvalidGoal` for bad
//! input. Failures of the record store travel through unchanged as
//! [`RecordStoreError`].

use thiserror::Error;

use crate::models::{Money, RecordId};

/// Errors raised by a record store adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordStoreError {
    /// The backing store could not be reached or opened
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing files failed
    #[error("Record store I/O error: {0}")]
    Io(String),

    /// Stored data could not be decoded
    #[error("Corrupt record data in {location}: {message}")]
    Corrupt { location: String, message: String },

    /// An internal lock was poisoned
    #[error("Record store lock poisoned: {0}")]
    Lock(String),
}

impl RecordStoreError {
    /// Create a corruption error for a file or table
    pub fn corrupt(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Corrupt {
            location: location.into(),
            message: message.into(),
        }
    }
}

/// The main error type for Personance operations
#[derive(Error, Debug)]
pub enum PersonanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input (periods, plans, amounts)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// A record handed to the computation layer is malformed
    #[error("Invalid record {record}: {reason}")]
    InvalidRecord { record: String, reason: String },

    /// A goal target that cannot act as a progress denominator
    #[error("Invalid goal target {target}: must be greater than zero")]
    InvalidGoal { target: Money },

    /// Upstream store failure, passed through as-is
    #[error(transparent)]
    RecordStore(#[from] RecordStoreError),
}

impl PersonanceError {
    /// Create an invalid-record error for a specific record
    pub fn invalid_record(id: RecordId, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            record: id.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this is an invalid-record error
    pub fn is_invalid_record(&self) -> bool {
        matches!(self, Self::InvalidRecord { .. })
    }

    /// Check if this is an invalid-goal error
    pub fn is_invalid_goal(&self) -> bool {
        matches!(self, Self::InvalidGoal { .. })
    }

    /// Check if this error came from the record store
    pub fn is_store_error(&self) -> bool {
        matches!(self, Self::RecordStore(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Message shown to the user when a command fails.
    ///
    /// Computation and store failures collapse to one generic message per
    /// activity; the detailed error is only logged.
    pub fn user_message(&self, activity: Activity) -> String {
        match self {
            Self::InvalidRecord { .. } | Self::InvalidGoal { .. } | Self::RecordStore(_) => {
                activity.failure_message().to_string()
            }
            other => other.to_string(),
        }
    }
}

/// What a command was doing when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// Building a dashboard, wealth or budget page
    Summary,
    /// Listing stored records
    Listing,
    /// Writing records, plans or demo data
    Update,
}

impl Activity {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Summary => "Unable to load summary",
            Self::Listing => "Unable to load records",
            Self::Update => "Unable to save changes",
        }
    }
}

impl From<std::io::Error> for PersonanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PersonanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Personance operations
pub type PersonanceResult<T> = Result<T, PersonanceError>;
