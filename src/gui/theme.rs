//! Custom theme definitions for the application - Light Theme

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// --- Light Color Palette ---

pub const INDIGO_500: Color = Color::from_rgb(0.388, 0.400, 0.945); // Primary actions
pub const INDIGO_400: Color = Color::from_rgb(0.506, 0.549, 0.973); // Hover state
pub const INDIGO_600: Color = Color::from_rgb(0.310, 0.275, 0.898); // Pressed state

pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // Primary text
pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // Light borders
pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984); // Lightest bg

pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

// --- Container Styles ---

pub struct WindowContainer;

impl container::StyleSheet for WindowContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_800),
            background: Some(Background::Color(GRAY_50)),
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub struct CopyButton;

impl button::StyleSheet for CopyButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(INDIGO_500)),
            text_color: WHITE,
            border: Border {
                radius: 6.0.into(),
                color: GRAY_200,
                width: 1.0,
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 3.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(INDIGO_400)),
            ..active
        }
    }

    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(INDIGO_600)),
            shadow: Shadow::default(),
            ..active
        }
    }
}
