// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All state transitions funnel through [`update`]. Scroll notifications
//! drive the parallax and reveal effects; while the lightbox is open they
//! are answered with a snap back to the held offset, which models the
//! page-level scroll lock.

use super::{App, Message};
use crate::error::Error;
use crate::page::geometry::ScrollViewport;
use crate::page::BlockId;
use crate::ui::nav_drawer::{self, Event as NavDrawerEvent};
use crate::ui::{lightbox_overlay, page_view};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Page(page_view::Message::Scrolled(viewport)) => {
            let offset = viewport.absolute_offset().y;
            let height = viewport.bounds().height;
            handle_scroll(app, ScrollViewport::new(offset, height))
        }
        Message::Page(page_view::Message::ThumbnailPressed(index)) => {
            if let Err(error) = app.lightbox.open(index) {
                eprintln!("Cannot open lightbox: {}", Error::Gallery(error));
            }
            Task::none()
        }
        Message::Lightbox(message) => handle_lightbox(app, message),
        Message::NavDrawer(message) => handle_nav_drawer(app, message),
        Message::KeyPressed(key) => {
            app.lightbox.handle_key(&key);
            Task::none()
        }
    }
}

/// Applies a scroll notification. While the lightbox holds the scroll lock
/// the held offset is re-asserted instead, so the page cannot move under
/// the overlay.
fn handle_scroll(app: &mut App, viewport: ScrollViewport) -> Task<Message> {
    if app.lightbox.locks_scroll() {
        if viewport.offset != app.viewport.offset {
            return snap_to_offset(app, app.viewport.offset);
        }
        return Task::none();
    }

    app.viewport = viewport;
    app.parallax.on_scroll(viewport, &app.layout);
    app.reveal.on_scroll(viewport, &app.layout);
    Task::none()
}

fn handle_lightbox(app: &mut App, message: lightbox_overlay::Message) -> Task<Message> {
    match message {
        lightbox_overlay::Message::ClosePressed | lightbox_overlay::Message::BackdropPressed => {
            app.lightbox.close();
        }
        lightbox_overlay::Message::NextPressed => {
            if let Err(error) = app.lightbox.next() {
                eprintln!("Cannot advance lightbox: {}", Error::Gallery(error));
            }
        }
        lightbox_overlay::Message::PreviousPressed => {
            if let Err(error) = app.lightbox.prev() {
                eprintln!("Cannot rewind lightbox: {}", Error::Gallery(error));
            }
        }
        // Swallowed so presses on the image never reach the backdrop.
        lightbox_overlay::Message::ContentPressed => {}
    }
    Task::none()
}

fn handle_nav_drawer(app: &mut App, message: nav_drawer::Message) -> Task<Message> {
    match nav_drawer::update(message, &mut app.drawer_open) {
        NavDrawerEvent::None => Task::none(),
        NavDrawerEvent::ScrollToBlock(block) => scroll_to_block(app, block),
    }
}

fn scroll_to_block(app: &mut App, block: BlockId) -> Task<Message> {
    match app.layout.extent(block) {
        Some(extent) => snap_to_offset(app, extent.top),
        None => Task::none(),
    }
}

/// Programmatic scroll of the page scrollable to an absolute offset,
/// expressed as the relative position `snap_to` expects.
fn snap_to_offset(app: &App, offset: f32) -> Task<Message> {
    let max_scroll = app.layout.total_height() - app.viewport.height;
    let y = if max_scroll > 0.0 {
        (offset / max_scroll).clamp(0.0, 1.0)
    } else {
        0.0
    };

    operation::snap_to(
        Id::new(page_view::PAGE_SCROLLABLE_ID),
        RelativeOffset { x: 0.0, y },
    )
}
