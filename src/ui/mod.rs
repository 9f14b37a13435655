// SPDX-License-Identifier: MPL-2.0
//! User interface modules.

pub mod design_tokens;
pub mod lightbox_overlay;
pub mod nav_drawer;
pub mod page_view;
pub mod styles;
pub mod theming;
