//! Unified application error type.
//! Loader, config and report code all return AppError so that `main`
//! has a single place where fatal problems are printed.
//!
//! Bad answers typed at a prompt are NOT errors: they are reported to the
//! user and the question is asked again.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data file
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    #[error("Invalid timestamp at row {row}: {value}")]
    InvalidTimestamp { row: usize, value: String },

    #[error("Invalid number in column '{column}' at row {row}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
