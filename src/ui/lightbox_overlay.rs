// SPDX-License-Identifier: MPL-2.0
//! Modal overlay for the lightbox gallery.
//!
//! Rendered on top of the page whenever the lightbox state machine is open.
//! The overlay is a pure projection of [`crate::gallery::Lightbox`] state:
//! backdrop, the current image with its caption, close/prev/next controls,
//! and the 1-based position counter. A press on the backdrop (inside the
//! overlay, outside the content) dismisses the viewer.

use crate::gallery::GalleryImage;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, tooltip, Column, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub struct ViewModel<'a> {
    pub image: &'a GalleryImage,
    /// 1-based position indicator, e.g. `"2 / 3"`.
    pub counter: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    ClosePressed,
    PreviousPressed,
    NextPressed,
    /// Press inside the overlay but outside the content area.
    BackdropPressed,
    /// Press on the content itself; swallowed so it cannot fall through to
    /// the backdrop.
    ContentPressed,
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel<'a>) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(iced::widget::Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let image = Image::new(Handle::from_path(model.image.source()))
        .width(Length::Fill)
        .height(Length::Fill);

    let caption = Text::new(model.image.alt_text().to_string())
        .size(typography::BODY)
        .color(palette::WHITE);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(image)
        .push(caption);

    let content_area = mouse_area(
        Container::new(content)
            .max_width(sizing::LIGHTBOX_CONTENT_MAX)
            .padding(spacing::XL),
    )
    .on_press(Message::ContentPressed);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(
            Container::new(content_area)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );

    // Controls are stacked above the content so they stay reachable even
    // when the image fills the viewport.
    stack = stack.push(control_zone(
        control_button("✕", ctx.i18n.tr("lightbox-close-button"), Message::ClosePressed),
        Horizontal::Right,
        Vertical::Top,
    ));
    stack = stack.push(control_zone(
        control_button(
            "◀",
            ctx.i18n.tr("lightbox-previous-button"),
            Message::PreviousPressed,
        ),
        Horizontal::Left,
        Vertical::Center,
    ));
    stack = stack.push(control_zone(
        control_button("▶", ctx.i18n.tr("lightbox-next-button"), Message::NextPressed),
        Horizontal::Right,
        Vertical::Center,
    ));

    let counter = Container::new(Text::new(model.counter).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::MD));
    stack = stack.push(
        Container::new(counter)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom),
    );

    stack.into()
}

fn control_button<'a>(
    glyph: &'a str,
    label: String,
    message: Message,
) -> Element<'a, Message> {
    let control = button(Text::new(glyph).size(typography::TITLE_LG))
        .padding(spacing::SM)
        .style(styles::button_overlay(palette::WHITE, 0.0, opacity::OVERLAY_MEDIUM))
        .on_press(message);

    tooltip(
        control,
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::overlay::indicator(radius::SM)),
        tooltip::Position::Bottom,
    )
    .into()
}

fn control_zone<'a>(
    control: Element<'a, Message>,
    align_x: Horizontal,
    align_y: Vertical,
) -> Element<'a, Message> {
    Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(align_x)
        .align_y(align_y)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_renders_image_caption_and_counter() {
        let i18n = I18n::default();
        let image = GalleryImage::new("a.jpg", "A house");
        let _element = view(
            ViewContext { i18n: &i18n },
            ViewModel {
                image: &image,
                counter: "1 / 3".to_string(),
            },
        );
    }
}
