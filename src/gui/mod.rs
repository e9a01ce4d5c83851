//! GUI module

pub mod app;
pub mod clipboard;
pub mod theme;
pub mod views;

// Re-export for convenience
pub use app::CopyApp;
pub use app::Message;
