// SPDX-License-Identifier: MPL-2.0
//! Scrollable page body.
//!
//! Renders the document blocks at the exact heights [`PageLayout`] computed
//! for them, so the scroll-effect math and what is on screen always agree.
//! The hero banner is drawn with its current parallax offset; sections that
//! a reveal policy still holds pending are dimmed until the animator flips
//! their flag.

use crate::effects::{ParallaxController, RevealAnimator};
use crate::i18n::I18n;
use crate::page::geometry::{
    PageLayout, BLOCK_SPACING, GALLERY_COLUMNS, GALLERY_GAP, GALLERY_THUMB_SIZE, HERO_HEIGHT,
    SECTION_PADDING,
};
use crate::page::{Block, BlockContent, PageDocument};
use crate::ui::design_tokens::{opacity, spacing, typography, with_alpha};
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{self, Scrollable};
use iced::widget::{button, container, mouse_area, Column, Container, Id, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Theme,
};

/// Widget id of the page scrollable, used for programmatic scrolling.
pub const PAGE_SCROLLABLE_ID: &str = "page-scroll";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub document: &'a PageDocument,
    pub layout: &'a PageLayout,
    pub parallax: &'a ParallaxController,
    pub reveal: &'a RevealAnimator,
}

#[derive(Debug, Clone)]
pub enum Message {
    Scrolled(scrollable::Viewport),
    /// A gallery thumbnail was pressed; the index counts images in document
    /// order across all gallery blocks.
    ThumbnailPressed(usize),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(BLOCK_SPACING);

    // Thumbnail indices run across the whole document so they line up with
    // the lightbox collection built from `PageDocument::gallery_images`.
    let mut image_cursor = 0;
    for block in &ctx.document.blocks {
        column = column.push(block_view(&ctx, block, &mut image_cursor));
    }

    if ctx.document.blocks.is_empty() {
        column = column.push(
            Container::new(Text::new(ctx.i18n.tr("page-empty")).size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::XL)
                .align_x(Horizontal::Center),
        );
    }

    Scrollable::new(column.width(Length::Fill))
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn block_view<'a>(
    ctx: &ViewContext<'a>,
    block: &'a Block,
    image_cursor: &mut usize,
) -> Element<'a, Message> {
    match &block.content {
        BlockContent::Hero { image, heading } => {
            hero_view(image, heading, ctx.parallax.offset(block.id))
        }
        BlockContent::Section { title, body, .. } => {
            let height = ctx
                .layout
                .extent(block.id)
                .map(|extent| extent.height)
                .unwrap_or(0.0);
            section_view(title, body, height, ctx.reveal.is_pending(block.id))
        }
        BlockContent::Gallery { images } => {
            let first_index = *image_cursor;
            *image_cursor += images.len();
            gallery_view(ctx.i18n, images, first_index)
        }
    }
}

/// Fixed-height, clipped banner. The parallax offset shifts the image down
/// inside the clip region as the page scrolls past it.
fn hero_view<'a>(
    image: &'a std::path::Path,
    heading: &'a str,
    parallax_offset: f32,
) -> Element<'a, Message> {
    let banner = Container::new(
        Image::new(Handle::from_path(image))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(iced::Padding {
        top: parallax_offset.max(0.0),
        ..Default::default()
    });

    let heading_text = Container::new(
        Text::new(heading.to_string())
            .size(typography::HERO_HEADING)
            .color(crate::ui::design_tokens::palette::WHITE),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center);

    Container::new(
        iced::widget::Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(banner)
            .push(heading_text),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HERO_HEIGHT))
    .clip(true)
    .into()
}

fn section_view<'a>(
    title: &'a str,
    body: &'a str,
    height: f32,
    pending: bool,
) -> Element<'a, Message> {
    let alpha = if pending {
        opacity::PENDING_SECTION
    } else {
        1.0
    };

    let mut column = Column::new().spacing(spacing::XS);
    if !title.is_empty() {
        column = column.push(Text::new(title.to_string()).size(typography::TITLE_MD));
    }
    column = column.push(Text::new(body.to_string()).size(typography::BODY));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(SECTION_PADDING)
        .clip(true)
        .style(move |theme: &Theme| container::Style {
            text_color: Some(with_alpha(
                theme.extended_palette().background.base.text,
                alpha,
            )),
            ..Default::default()
        })
        .into()
}

fn gallery_view<'a>(
    i18n: &I18n,
    images: &'a [crate::gallery::GalleryImage],
    first_index: usize,
) -> Element<'a, Message> {
    if images.is_empty() {
        return Container::new(Text::new(i18n.tr("gallery-empty")).size(typography::BODY))
            .width(Length::Fill)
            .padding(GALLERY_GAP)
            .align_x(Horizontal::Center)
            .into();
    }

    let mut grid = Column::new().spacing(GALLERY_GAP).padding(GALLERY_GAP);
    for (row_index, row_images) in images.chunks(GALLERY_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(GALLERY_GAP);
        for (column_index, image) in row_images.iter().enumerate() {
            let index = first_index + row_index * GALLERY_COLUMNS + column_index;
            let thumbnail = Image::new(Handle::from_path(image.source()))
                .width(Length::Fixed(GALLERY_THUMB_SIZE))
                .height(Length::Fixed(GALLERY_THUMB_SIZE));
            row = row.push(
                mouse_area(
                    button(thumbnail)
                        .padding(0.0)
                        .on_press(Message::ThumbnailPressed(index)),
                )
                .interaction(iced::mouse::Interaction::Pointer),
            );
        }
        grid = grid.push(row);
    }

    Container::new(grid)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PARALLAX_SPEED;
    use crate::effects::RevealPolicy;
    use crate::page::content;

    #[test]
    fn page_view_renders_the_demo_document() {
        let i18n = I18n::default();
        let document = content::load_document(None);
        let layout = PageLayout::build(&document);
        let parallax = ParallaxController::new(
            document.parallax_targets(),
            DEFAULT_PARALLAX_SPEED,
        );
        let reveal = RevealAnimator::new(RevealPolicy::default(), &document);

        let _element = view(ViewContext {
            i18n: &i18n,
            document: &document,
            layout: &layout,
            parallax: &parallax,
            reveal: &reveal,
        });
    }
}
