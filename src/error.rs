//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that the calculation functions themselves never return errors:
//! malformed time or numeric input degrades to zero/defaults by contract,
//! so `EngineError` covers settings loading and the API surface only.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use ot_engine::error::EngineError;
///
/// let error = EngineError::SettingsNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Settings file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    SettingsNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    SettingsParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A request was structurally invalid (missing range, unknown period).
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// A description of what made the request invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
