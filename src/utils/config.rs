//! Application configuration

use iced::{window, Size};

/// Application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Window title
    pub title: String,

    /// Initial window width, also the minimum width
    pub width: f32,

    /// Initial window height, also the minimum height
    pub height: f32,

    /// Padding between the window border and its content
    pub padding: u16,

    /// Vertical spacing between the text area and the button
    pub spacing: u16,

    /// Text the editor starts with
    pub initial_text: String,

    /// Copy button label
    pub button_label: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            title: "Application de copie de texte".to_string(),
            width: 400.0,
            height: 300.0,
            padding: 10,
            spacing: 5,
            initial_text: "Lorem ipsum dolor sit amet.".to_string(),
            button_label: "Copier".to_string(),
        }
    }
}

impl AppSettings {
    /// Build the iced window settings
    pub fn window_settings(&self) -> window::Settings {
        let size = Size::new(self.width, self.height);
        window::Settings {
            size,
            min_size: Some(size),
            exit_on_close_request: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.title, "Application de copie de texte");
        assert_eq!(settings.initial_text, "Lorem ipsum dolor sit amet.");
        assert_eq!(settings.button_label, "Copier");
        assert_eq!(settings.padding, 10);
        assert_eq!(settings.spacing, 5);
    }

    #[test]
    fn test_window_settings_use_size_as_minimum() {
        let settings = AppSettings::default();
        let window = settings.window_settings();

        assert_eq!(window.size, Size::new(400.0, 300.0));
        assert_eq!(window.min_size, Some(Size::new(400.0, 300.0)));
        assert!(window.exit_on_close_request);
    }
}
