//! Error types module
//!
//! All failures in the submission workflow are represented by `AppError`.
//! Per the error model there are two families: user-correctable errors
//! (invalid receipt type, missing receipt, bad form input) that are surfaced
//! synchronously and block submission, and submission failures (transport or
//! store errors) that are logged and leave the user free to resubmit. No
//! variant is fatal; every failure is recoverable by user action.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// How an error should be presented to the person filling the form.
/// The UI adapter (or CLI) uses this to decide between a blocking warning
/// and a logged failure that keeps the form on screen.
pub trait ErrorPresentation {
    /// Message suitable for showing to the user (may differ from the
    /// internal error message)
    fn user_message(&self) -> String;

    /// Whether the user can fix this themselves (pick another file,
    /// correct a field) as opposed to a store/transport failure
    fn is_user_correctable(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid file type: {content_type} (allowed: {allowed:?})")]
    InvalidFileType {
        content_type: String,
        allowed: Vec<String>,
    },

    #[error("No validated receipt file attached to this submission")]
    MissingReceipt,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Submission failed: {source}")]
    SubmissionFailed {
        #[source]
        source: anyhow::Error,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::SubmissionFailed { source: err }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl AppError {
    /// Get the error type name for logging
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidFileType { .. } => "InvalidFileType",
            AppError::MissingReceipt => "MissingReceipt",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::SubmissionFailed { .. } => "SubmissionFailed",
            AppError::NotFound(_) => "NotFound",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Detailed error information including the source chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorPresentation for AppError {
    fn user_message(&self) -> String {
        match self {
            AppError::InvalidFileType { allowed, .. } => format!(
                "Only receipt images are accepted ({}). Please select another file.",
                allowed.join(", ")
            ),
            AppError::MissingReceipt => {
                "Please attach a receipt image before submitting.".to_string()
            }
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::SubmissionFailed { .. } => {
                "Your expense report could not be submitted. Please try again.".to_string()
            }
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::Unauthorized(_) => "You are not signed in.".to_string(),
            AppError::Internal(_) => "Something went wrong.".to_string(),
        }
    }

    fn is_user_correctable(&self) -> bool {
        match self {
            AppError::InvalidFileType { .. }
            | AppError::MissingReceipt
            | AppError::InvalidInput(_) => true,
            AppError::SubmissionFailed { .. }
            | AppError::NotFound(_)
            | AppError::Unauthorized(_)
            | AppError::Internal(_) => false,
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidFileType { .. }
            | AppError::MissingReceipt
            | AppError::InvalidInput(_)
            | AppError::NotFound(_) => LogLevel::Debug,
            AppError::Unauthorized(_) => LogLevel::Warn,
            AppError::SubmissionFailed { .. } | AppError::Internal(_) => LogLevel::Error,
        }
    }
}
