//! Error types for the ekman crate.
//!
//! This module defines a single error enum covering every failure mode of the
//! crate. Classification itself never fails; the error cases come from
//! override construction and from dataset-level plot dispatch.

use thiserror::Error;

/// The main error type for ekman operations.
#[derive(Error, Debug)]
pub enum EkmanError {
    /// Configuration errors (invalid override combinations)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A category pattern supplied in an override failed to compile
    #[error("Invalid pattern for category '{category}': {source}")]
    Pattern {
        category: String,
        #[source]
        source: regex::Error,
    },

    /// Data not found errors
    #[error("Data not found: {message}")]
    DataNotFound { message: String },

    /// Rendering errors reported by a canvas adapter
    #[error("Render error: {message}")]
    Render { message: String },
}

/// Convenience type alias for Results with EkmanError
pub type Result<T> = std::result::Result<T, EkmanError>;
