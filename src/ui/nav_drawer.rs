// SPDX-License-Identifier: MPL-2.0
//! Navigation drawer for the page.
//!
//! A toggle control in the header flips the drawer open or closed; a press
//! anywhere outside the drawer and its toggle forces it closed regardless
//! of current state. Selecting a link closes the drawer and asks the parent
//! to scroll the page to the target section.

use crate::i18n::I18n;
use crate::page::{BlockId, NavLink};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Theme,
};

/// Contextual data needed to render the header bar.
pub struct BarContext<'a> {
    pub i18n: &'a I18n,
    pub page_title: &'a str,
    /// Whether the page has nav links at all; without them the toggle is
    /// not rendered.
    pub has_links: bool,
}

/// Contextual data needed to render the open drawer panel.
pub struct PanelContext<'a> {
    pub i18n: &'a I18n,
    pub links: &'a [NavLink],
}

/// Messages emitted by the drawer and its toggle.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleDrawer,
    /// A press landed outside both the drawer and its toggle.
    OutsidePressed,
    LinkPressed(BlockId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Scroll the page so the given block is at the top of the viewport.
    ScrollToBlock(BlockId),
}

/// Process a drawer message against the open flag and return the resulting
/// event for the parent.
pub fn update(message: Message, drawer_open: &mut bool) -> Event {
    match message {
        Message::ToggleDrawer => {
            *drawer_open = !*drawer_open;
            Event::None
        }
        Message::OutsidePressed => {
            // Forces closed whatever the current state; a no-op when the
            // drawer is already closed.
            *drawer_open = false;
            Event::None
        }
        Message::LinkPressed(block) => {
            *drawer_open = false;
            Event::ScrollToBlock(block)
        }
    }
}

/// Render the fixed header bar: page title plus the drawer toggle.
pub fn view_bar<'a>(ctx: BarContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.page_title.to_string()).size(typography::TITLE_MD);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(iced::widget::space::horizontal());

    if ctx.has_links {
        let toggle = button(Text::new(ctx.i18n.tr("nav-toggle-button")))
            .on_press(Message::ToggleDrawer)
            .padding(spacing::XS);
        row = row.push(toggle);
    }

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

/// Render the open drawer panel, right-aligned over the page.
pub fn view_panel<'a>(ctx: PanelContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("nav-drawer-heading")).size(typography::BODY);

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fixed(sizing::NAV_DRAWER_WIDTH))
        .push(Container::new(heading).padding(spacing::XS));

    for link in ctx.links {
        let item = button(Text::new(link.label.clone()))
            .on_press(Message::LinkPressed(link.block))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(styles::button::drawer_item);
        column = column.push(item);
    }

    let panel = Container::new(column)
        .padding(spacing::XS)
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.base.color.into()),
            ..Default::default()
        });

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .into()
}
