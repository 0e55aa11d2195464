//! Error types for `App Portal`
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains so the full cause
//! ends up in the log file.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `App Portal`
#[derive(Debug, Error)]
pub enum PortalError {
    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Catalog data could not be parsed or failed validation
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Two catalog records share the same id
    #[error("Duplicate application id in catalog: {0}")]
    DuplicateAppId(String),

    /// Persisted key-value storage could not be written
    /// Preserves the underlying error source for full error chain transparency
    #[error("Storage write failed for key {key}: {source}")]
    StorageWriteFailed {
        /// Storage key being written
        key: String,
        /// Underlying cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Opening an application link failed
    #[error("Failed to open {url}: {source}")]
    LaunchFailed {
        /// Link that could not be opened
        url: String,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// Slint platform or window error
    /// Preserves the underlying error source for full error chain transparency
    #[error("GUI error: {0}")]
    GuiError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `App Portal` operations
pub type Result<T> = std::result::Result<T, PortalError>;

/// Convert an error to a user-friendly message
///
/// This function takes a `PortalError` and returns a message suitable
/// for displaying to end users in error dialogs or the status line.
pub fn get_user_friendly_error(error: &PortalError) -> String {
    match error {
        PortalError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Your settings may not persist.\n\
             Check that you have write permissions to the App Portal data folder."
            .to_string(),
        PortalError::InvalidCatalog(reason) => {
            format!(
                "The application catalog could not be loaded:\n\n{reason}\n\n\
                 Check the catalog_path entry in config.json."
            )
        }
        PortalError::DuplicateAppId(id) => {
            format!(
                "The application catalog lists \"{id}\" more than once.\n\n\
                 Every application needs a unique id."
            )
        }
        PortalError::StorageWriteFailed { key, .. } => {
            format!(
                "Your change could not be saved ({key}).\n\n\
                 It will be lost when App Portal closes."
            )
        }
        PortalError::LaunchFailed { url, .. } => {
            format!("Could not open {url}.\nNo default browser may be configured.")
        }
        PortalError::GuiError(e) => {
            format!(
                "The App Portal window could not be created:\n\n{e}\n\n\
                 Please check your graphics drivers."
            )
        }
        PortalError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        PortalError::JsonError(e) => {
            format!(
                "A data file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}
