//! Application initialization and main entry point

use crate::gui::CopyApp;
use crate::utils::{AppError, AppSettings};
use iced::{Application, Settings};
use tracing::info;

/// Run the application until its window is closed
pub fn run(settings: AppSettings) -> Result<(), AppError> {
    info!(
        "Opening '{}' ({}x{})",
        settings.title, settings.width, settings.height
    );

    let mut iced_settings = Settings::with_flags(settings.clone());
    iced_settings.window = settings.window_settings();

    CopyApp::run(iced_settings)?;

    info!("Window closed, exiting");
    Ok(())
}
