// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::effects::RevealPolicy;
use crate::ui::lightbox_overlay;
use crate::ui::nav_drawer;
use crate::ui::page_view;
use iced::keyboard;

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override (`--lang`).
    pub lang: Option<String>,
    /// Reveal-policy override (`--reveal`), taking precedence over config.
    pub reveal: Option<RevealPolicy>,
    /// Directory holding `page.toml` and the gallery images.
    pub content_dir: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page_view::Message),
    Lightbox(lightbox_overlay::Message),
    NavDrawer(nav_drawer::Message),
    KeyPressed(keyboard::Key),
}
