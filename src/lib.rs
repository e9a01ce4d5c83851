//! clipcopy library

pub mod app;
pub mod gui;
pub mod utils;

// Re-export main types for easier use
pub use gui::clipboard::{ClipboardWriter, SystemClipboard};
pub use gui::{CopyApp, Message};
pub use utils::{AppError, AppSettings, ClipboardError};
