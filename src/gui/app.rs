//! Main GUI application

use crate::gui::clipboard::{self, ClipboardWriter, SystemClipboard};
use crate::gui::views::main_view;
use crate::utils::AppSettings;
use iced::widget::text_editor;
use iced::{Application, Command, Element, Theme};

/// Main application state
pub struct CopyApp {
    settings: AppSettings,
    content: text_editor::Content,
    clipboard: Box<dyn ClipboardWriter>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    EditorAction(text_editor::Action),
    CopyPressed,
}

impl CopyApp {
    /// Create the application state with a given clipboard
    pub fn with_clipboard(settings: AppSettings, clipboard: Box<dyn ClipboardWriter>) -> Self {
        let content = text_editor::Content::with_text(&settings.initial_text);

        Self {
            settings,
            content,
            clipboard,
        }
    }

    /// Full text currently held by the editor
    pub fn text(&self) -> String {
        buffer_text(&self.content)
    }

    /// Settings the application was started with
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }
}

impl Application for CopyApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppSettings;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let app = Self::with_clipboard(flags, Box::new(SystemClipboard::new()));
        (app, Command::none())
    }

    fn title(&self) -> String {
        self.settings.title.clone()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::EditorAction(action) => {
                self.content.perform(action);
                Command::none()
            }

            Message::CopyPressed => {
                let text = self.text();
                clipboard::copy_contents(&text, self.clipboard.as_mut());
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        main_view(&self.content, &self.settings)
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}

/// Join the editor lines back into one string
///
/// Lines are separated by `\n` with no trailing newline added, so the result
/// is exactly what the user typed.
fn buffer_text(content: &text_editor::Content) -> String {
    let mut text = String::new();

    for (i, line) in content.lines().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(&line);
    }

    text
}
