//! Error handling for clipcopy

use thiserror::Error;

/// Main error type for clipcopy
#[derive(Debug, Error)]
pub enum AppError {
    #[error("GUI error: {0}")]
    Gui(#[from] iced::Error),
}

/// Failures talking to the system clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to write clipboard: {0}")]
    Write(#[source] arboard::Error),
}
