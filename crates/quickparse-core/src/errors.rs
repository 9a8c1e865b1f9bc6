//! Error types for the core crate

use std::path::PathBuf;
use thiserror::Error;

/// Core errors
///
/// The plain entry points (`parse_message_line`, `format_pass`, `process_pnr`)
/// collapse these into `None` or a sentinel; the `try_*` variants expose them.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing separator: expected {expected:?} in {line:?}")]
    MissingSeparator { expected: &'static str, line: String },

    #[error("Missing or empty field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid class type: {0:?} (expected first or second)")]
    InvalidClass(String),

    #[error("Invalid PNR: {0:?} (expected exactly 10 digits)")]
    InvalidPnr(String),

    #[error("Train details are missing")]
    MissingTrain,

    #[error("Passenger list is empty")]
    NoPassengers,

    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
