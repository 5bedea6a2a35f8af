//! Unified application error type.
//! All modules (loader, stats, session, config) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed while waiting for an answer")]
    InputClosed,

    // ---------------------------
    // Vocabulary errors
    // ---------------------------
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    #[error("Unknown day: {0}")]
    UnknownDay(String),

    // ---------------------------
    // Dataset errors
    // ---------------------------
    #[error("Failed to load {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    // ---------------------------
    // Statistics errors
    // ---------------------------
    #[error("No '{label}' values found in column '{column}'")]
    MissingCategory {
        column: &'static str,
        label: &'static str,
    },

    #[error("Cannot compute statistics on '{0}': no values in the filtered data")]
    EmptyDataset(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl AppError {
    /// Errors that only spoil the current statistics pass, not the program.
    pub fn is_stats_failure(&self) -> bool {
        matches!(
            self,
            AppError::MissingCategory { .. } | AppError::EmptyDataset(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
