// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox backdrop, indicators, and drawer scrim.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    with_alpha,
};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Full-screen dark backdrop behind the lightbox content.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(BLACK, opacity::OVERLAY_STRONG))),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Translucent scrim behind the open navigation drawer.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(BLACK, opacity::OVERLAY_MEDIUM))),
        ..Default::default()
    }
}

/// Generic style for overlay indicators like the position counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(with_alpha(BLACK, opacity::OVERLAY_STRONG))),
        text_color: Some(WHITE),
        border: Border {
            color: with_alpha(WHITE, opacity::OVERLAY_SUBTLE),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}
