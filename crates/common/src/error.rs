//! Error types shared across Chordshell crates.

use std::path::PathBuf;

/// Top-level error type for Chordshell operations.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The settings record could not be written to the cache.
    #[error("Could not save the application settings")]
    SaveSettings,

    #[error("PDF creation error: {message}")]
    PdfCreation { message: String },

    /// A second export was requested while one is still running for the
    /// same scene.
    #[error("An export is already in progress for this scene")]
    ExportInProgress,

    #[error("Bookmarked file is not available: {path}")]
    BookmarkUnresolvable { path: PathBuf },

    #[error("Executable not found in PATH: {name}")]
    ExecutableNotFound { name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn pdf_creation(msg: impl Into<String>) -> Self {
        Self::PdfCreation {
            message: msg.into(),
        }
    }
}
