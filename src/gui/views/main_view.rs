//! Main view implementation - Light Theme

use crate::gui::app::Message;
use crate::gui::theme;
use crate::utils::AppSettings;
use iced::widget::{button, column, container, text, text_editor};
use iced::{Alignment, Element, Length};

/// Create the main view: the editor above a full-width copy button
pub fn main_view<'a>(
    content: &'a text_editor::Content,
    settings: &AppSettings,
) -> Element<'a, Message> {
    let editor = text_editor(content)
        .height(Length::Fill)
        .on_action(Message::EditorAction);

    let copy_button = button(
        text(&settings.button_label)
            .size(16)
            .width(Length::Fill)
            .horizontal_alignment(iced::alignment::Horizontal::Center),
    )
    .on_press(Message::CopyPressed)
    .padding([8, 16])
    .width(Length::Fill)
    .style(iced::theme::Button::Custom(Box::new(theme::CopyButton)));

    container(
        column![editor, copy_button]
            .spacing(settings.spacing)
            .align_items(Alignment::Center),
    )
    .padding(settings.padding)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::WindowContainer,
    )))
    .into()
}
