// SPDX-License-Identifier: MPL-2.0
//! `iced_stage` is a scroll-driven content page viewer built with the Iced GUI
//! framework.
//!
//! It renders a single long-form page (hero image, text sections, image
//! gallery) and layers the classic set of page enhancements on top of it:
//! scroll-linked parallax for the hero, one-way reveal animations for
//! sections entering the viewport, a toggled navigation drawer, and a modal
//! lightbox gallery with keyboard and pointer navigation.

pub mod app;
pub mod config;
pub mod effects;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod page;
pub mod ui;
