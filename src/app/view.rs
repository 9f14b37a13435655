// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The base layer is the header bar over the scrollable page. The drawer
//! and the lightbox are stacked on top of it, each rendered only while its
//! state says it is open.

use super::{App, Message};
use crate::ui::nav_drawer::{self, BarContext, PanelContext};
use crate::ui::styles;
use crate::ui::{lightbox_overlay, page_view};
use iced::widget::{mouse_area, Column, Container, Stack};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let bar = nav_drawer::view_bar(BarContext {
        i18n: &app.i18n,
        page_title: &app.document.title,
        has_links: !app.document.nav_links.is_empty(),
    })
    .map(Message::NavDrawer);

    let page = page_view::view(page_view::ViewContext {
        i18n: &app.i18n,
        document: &app.document,
        layout: &app.layout,
        parallax: &app.parallax,
        reveal: &app.reveal,
    })
    .map(Message::Page);

    let base = Column::new()
        .push(bar)
        .push(page)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if app.drawer_open {
        stack = stack.push(drawer_scrim());
        stack = stack.push(
            nav_drawer::view_panel(PanelContext {
                i18n: &app.i18n,
                links: &app.document.nav_links,
            })
            .map(Message::NavDrawer),
        );
    }

    if app.lightbox.is_open() {
        // Both are Some whenever the lightbox is open; it rejects opening
        // on an empty collection.
        if let (Some(image), Some(counter)) =
            (app.lightbox.current(), app.lightbox.counter_label())
        {
            stack = stack.push(
                lightbox_overlay::view(
                    lightbox_overlay::ViewContext { i18n: &app.i18n },
                    lightbox_overlay::ViewModel { image, counter },
                )
                .map(Message::Lightbox),
            );
        }
    }

    stack.into()
}

/// Dimmed layer under the open drawer; pressing it anywhere closes the
/// drawer.
fn drawer_scrim<'a>() -> Element<'a, Message> {
    let scrim: Element<'a, nav_drawer::Message> = mouse_area(
        Container::new(iced::widget::Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::scrim),
    )
    .on_press(nav_drawer::Message::OutsidePressed)
    .into();

    scrim.map(Message::NavDrawer)
}
