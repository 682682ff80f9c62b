/*
[INPUT]:  Adapter errors, file I/O errors, navigation bounds
[OUTPUT]: StoreError kinds and LoadOutcome result objects
[POS]:    Store layer - error surface returned to the view
[UPDATE]: When adding error kinds or outcome fields
*/

use arc_task_adapter::ArcError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Malformed size string or task document
    #[error("{0}")]
    Format(String),

    /// Grid size, cell, symbol or navigation index out of range
    #[error("{0}")]
    Range(String),

    /// Hash lookup miss or empty listing
    #[error("{0}")]
    NotFound(String),

    /// Fetch failure, upstream message passed through
    #[error("{0}")]
    Network(String),

    /// Local file could not be read
    #[error("{0}")]
    Read(String),

    /// Operation needs a loaded task
    #[error("{0}")]
    NoTask(String),
}

impl StoreError {
    pub fn no_output() -> Self {
        StoreError::NoTask("No output grid; load a task first".to_string())
    }

    /// Map a fetch failure, keeping payload shape problems as format errors
    pub fn from_fetch(context: &str, err: &ArcError) -> Self {
        match err {
            ArcError::Serialization(_) | ArcError::InvalidGrid(_) => {
                StoreError::Format(format!("{context}: {err}"))
            }
            _ => StoreError::Network(format!("{context}: {err}")),
        }
    }
}

/// Result object returned by every store load operation.
///
/// Loads never return `Err`; failures are reported here and logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub success: bool,
    pub error: Option<StoreError>,
    /// Set when the failure is an expected navigation boundary
    pub is_navigation: bool,
    /// Listing size, reported by metadata loads
    pub count: Option<usize>,
}

impl LoadOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
            is_navigation: false,
            count: None,
        }
    }

    pub fn with_count(count: usize) -> Self {
        Self {
            count: Some(count),
            ..Self::ok()
        }
    }

    pub fn failure(error: StoreError) -> Self {
        Self {
            success: false,
            error: Some(error),
            is_navigation: false,
            count: None,
        }
    }

    pub fn navigation(error: StoreError) -> Self {
        Self {
            is_navigation: true,
            ..Self::failure(error)
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}
