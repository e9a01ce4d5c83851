//! Clipboard functionality

use crate::utils::ClipboardError;
use arboard::Clipboard;
use tracing::{debug, warn};

/// Destination for copied text
pub trait ClipboardWriter {
    /// Replace the clipboard's text with `text`
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard
///
/// The handle is kept for the lifetime of the application: on X11 and Wayland
/// the copied text is only served to other programs while it is alive.
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    /// Open the system clipboard
    ///
    /// A clipboard that cannot be opened now is retried on the next write.
    pub fn new() -> Self {
        let inner = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                warn!("Clipboard unavailable at startup: {}", e);
                None
            }
        };

        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(text).map_err(ClipboardError::Write),
            None => {
                let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
                clipboard.set_text(text).map_err(ClipboardError::Write)?;
                self.inner = Some(clipboard);
                Ok(())
            }
        }
    }
}

/// Copy `text` to the clipboard
///
/// Failures are logged and otherwise ignored; the user never sees them.
pub fn copy_contents(text: &str, clipboard: &mut dyn ClipboardWriter) {
    match clipboard.set_text(text) {
        Ok(()) => debug!("Copied {} characters to clipboard", text.chars().count()),
        Err(e) => warn!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        writes: Vec<String>,
    }

    impl ClipboardWriter for Recorder {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl ClipboardWriter for Broken {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Write(arboard::Error::ClipboardOccupied))
        }
    }

    #[test]
    fn test_copy_writes_text_verbatim() {
        let mut recorder = Recorder::default();
        copy_contents("ligne 1\nligne 2 é€\n", &mut recorder);
        assert_eq!(recorder.writes, vec!["ligne 1\nligne 2 é€\n".to_string()]);
    }

    #[test]
    fn test_copy_empty_text() {
        let mut recorder = Recorder::default();
        copy_contents("", &mut recorder);
        assert_eq!(recorder.writes, vec![String::new()]);
    }

    #[test]
    fn test_system_clipboard_reports_success_only_with_handle() {
        let mut clipboard = SystemClipboard { inner: None };

        match clipboard.set_text("bonjour") {
            Ok(()) => assert!(clipboard.inner.is_some()),
            Err(ClipboardError::Unavailable(_)) => assert!(clipboard.inner.is_none()),
            Err(ClipboardError::Write(_)) => {}
        }
    }

    #[test]
    fn test_clipboard_error_messages() {
        let err = ClipboardError::Unavailable(arboard::Error::ClipboardNotSupported);
        assert!(err.to_string().starts_with("Failed to access clipboard"));

        let err = ClipboardError::Write(arboard::Error::ClipboardOccupied);
        assert!(err.to_string().starts_with("Failed to write clipboard"));
    }

    #[test]
    fn test_copy_failure_is_swallowed() {
        let mut broken = Broken;
        copy_contents("anything", &mut broken);
    }
}
