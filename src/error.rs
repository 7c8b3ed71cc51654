//! Error types for the finance display engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions in the engine, store, and configuration.

use thiserror::Error;

/// The main error type for the finance display engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use finance_display::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     input: "2024-13-40".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date '2024-13-40': expected YYYY-MM-DD"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date string could not be parsed as `YYYY-MM-DD`.
    ///
    /// The legacy implementation silently collapsed unparseable dates to
    /// day-index 0; this engine surfaces them instead.
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The offending date string.
        input: String,
    },

    /// A day-index fell outside the representable calendar range.
    #[error("Day index {day_index} is outside the supported calendar range")]
    DayIndexOutOfRange {
        /// The day-index that could not be converted to a date.
        day_index: i64,
    },

    /// A work log contained an invalid field value.
    #[error("Invalid work log field '{field}': {message}")]
    InvalidWorkLog {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A balance snapshot contained an invalid field value.
    #[error("Invalid balance snapshot field '{field}': {message}")]
    InvalidSnapshot {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No record of the given kind exists with the given id.
    #[error("No {kind} found with id {id}")]
    RecordNotFound {
        /// The record kind ("work log", "balance snapshot", "job").
        kind: &'static str,
        /// The id that was not found.
        id: String,
    },

    /// The data file could not be read or written.
    #[error("Store I/O error for '{path}': {message}")]
    StoreIo {
        /// The path of the data file.
        path: String,
        /// The underlying I/O error description.
        message: String,
    },

    /// The data file exists but does not contain valid finance data.
    #[error("Failed to parse data file '{path}': {message}")]
    StoreParse {
        /// The path of the data file.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The server configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
