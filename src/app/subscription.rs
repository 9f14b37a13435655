// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The page has a single keyboard consumer, the lightbox, so all key presses
//! not captured by a widget are routed to `Message::KeyPressed`. The
//! lightbox itself decides whether it is open and whether the key means
//! anything.

use super::Message;
use iced::{event, keyboard, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event {
            return match status {
                event::Status::Ignored => Some(Message::KeyPressed(key.clone())),
                event::Status::Captured => None,
            };
        }
        None
    })
}
