//! Unified application error type.
//! All modules (core, report, transport, cli, utils) return AppError to keep
//! the error handling consistent and easy to manage.

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
    // Source table
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Load error: {0}")]
    Load(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Logic outcomes
    // ---------------------------
    #[error("No data found for the date: {0}")]
    NoDataForDate(String),

    // ---------------------------
    // Transport
    // ---------------------------
    #[error("Transport error: {0}")]
    Transport(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl AppError {
    /// True for the "nothing to report" outcome, which is not a failure.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, AppError::NoDataForDate(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
