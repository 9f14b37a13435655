// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven page effects.
//!
//! Both effects consume the same [`crate::page::geometry::ScrollViewport`]
//! signal: [`parallax`] recomputes a vertical offset for registered blocks
//! on every scroll notification, and [`reveal`] flips a one-way "revealed"
//! flag the first time a block crosses its policy's visibility threshold.

pub mod parallax;
pub mod reveal;

pub use parallax::ParallaxController;
pub use reveal::{RevealAnimator, RevealPolicy};
