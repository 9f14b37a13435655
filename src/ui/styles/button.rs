// SPDX-License-Identifier: MPL-2.0
//! Button styles shared by the overlay controls and the nav drawer.

use crate::ui::design_tokens::{radius, with_alpha};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Transparent button that gains a tinted background on hover. Used for the
/// lightbox close/prev/next controls drawn over the backdrop.
pub fn overlay(
    text_color: Color,
    bg_alpha_normal: f32,
    bg_alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => bg_alpha_hover,
            _ => bg_alpha_normal,
        };
        button::Style {
            background: Some(Background::Color(with_alpha(Color::BLACK, alpha))),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Flat list-item button for drawer entries.
pub fn drawer_item(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}
