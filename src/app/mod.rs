// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and its overlays.
//!
//! The `App` struct wires together the domains (page document, scroll
//! effects, lightbox, navigation drawer, localization) and translates
//! messages into state transitions. Policy decisions (which reveal policy is
//! active, parallax speed clamping, scroll locking) are resolved here, close
//! to the main update loop, so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_PARALLAX_SPEED};
use crate::effects::{ParallaxController, RevealAnimator};
use crate::gallery::{GalleryCollection, Lightbox};
use crate::i18n::I18n;
use crate::page::content;
use crate::page::geometry::{PageLayout, ScrollViewport};
use crate::page::PageDocument;
use crate::ui::theming::ThemeMode;
use iced::{Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state: the loaded page plus the owned effect and
/// overlay instances that operate on it.
pub struct App {
    pub i18n: I18n,
    document: PageDocument,
    layout: PageLayout,
    /// Last reported scroll position of the page scrollable.
    viewport: ScrollViewport,
    parallax: ParallaxController,
    reveal: RevealAnimator,
    lightbox: Lightbox,
    drawer_open: bool,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("blocks", &self.document.blocks.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("drawer_open", &self.drawer_open)
            .finish()
    }
}

fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the page document from the content directory and constructs
    /// the effect and overlay instances over it. Each instance is owned by
    /// the `App` and independent of the others.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match config::load() {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Failed to load config: {error}");
                Config::default()
            }
        };
        let i18n = I18n::new(flags.lang.clone(), &config);

        let content_dir = flags.content_dir.map(PathBuf::from);
        let document = content::load_document(content_dir.as_deref());
        let layout = PageLayout::build(&document);

        // Flag wins over config; config over the built-in default.
        let reveal_policy = flags
            .reveal
            .or(config.reveal_policy)
            .unwrap_or_default();
        let parallax_speed = config.parallax_speed.unwrap_or(DEFAULT_PARALLAX_SPEED);

        let parallax = ParallaxController::new(document.parallax_targets(), parallax_speed);
        let reveal = RevealAnimator::new(reveal_policy, &document);
        let lightbox = Lightbox::new(GalleryCollection::new(document.gallery_images()));
        let theme_mode = config.theme_mode.unwrap_or_default();

        let app = App {
            i18n,
            document,
            layout,
            viewport: ScrollViewport::default(),
            parallax,
            reveal,
            lightbox,
            drawer_open: false,
            theme_mode,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        if self.document.title.is_empty() {
            self.i18n.tr("app-title")
        } else {
            self.document.title.clone()
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Flags::default()).0
    }

    #[test]
    fn new_app_starts_with_everything_closed() {
        let app = app();
        assert!(!app.lightbox.is_open());
        assert!(!app.drawer_open);
        assert_eq!(app.viewport, ScrollViewport::default());
    }

    #[test]
    fn title_falls_back_to_the_app_name() {
        let mut app = app();
        app.document.title = String::new();
        assert!(!app.title().is_empty());
    }

    #[test]
    fn reveal_flag_overrides_the_config_default() {
        let flags = Flags {
            reveal: Some(crate::effects::RevealPolicy::Theatrical),
            ..Flags::default()
        };
        let (app, _) = App::new(flags);
        assert_eq!(
            app.reveal.policy(),
            crate::effects::RevealPolicy::Theatrical
        );
    }
}
