// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the page and its overlays.

pub mod button;
pub mod overlay;

pub use button::overlay as button_overlay;
