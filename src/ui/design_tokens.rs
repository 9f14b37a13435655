// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the page and its overlays.
//!
//! Organized in the usual scales: palette, opacity, spacing (8px grid),
//! sizing, typography, and radii. Keep ratios intact when adjusting
//! (e.g. `MD = XS * 2`).

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (warm scale, suits a photography page)
    pub const PRIMARY_400: Color = Color::from_rgb(0.85, 0.55, 0.25);
    pub const PRIMARY_500: Color = Color::from_rgb(0.75, 0.45, 0.18);
    pub const PRIMARY_600: Color = Color::from_rgb(0.62, 0.36, 0.13);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod opacity {
    /// Backdrop behind the lightbox content.
    pub const OVERLAY_STRONG: f32 = 0.85;
    /// Overlay chrome (counter, drawer scrim).
    pub const OVERLAY_MEDIUM: f32 = 0.6;
    /// Subtle borders on overlay indicators.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Sections still waiting on their reveal animation.
    pub const PENDING_SECTION: f32 = 0.25;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// Width of the open navigation drawer.
    pub const NAV_DRAWER_WIDTH: f32 = 260.0;
    /// Largest edge of the lightbox content area.
    pub const LIGHTBOX_CONTENT_MAX: f32 = 900.0;
}

pub mod typography {
    pub const CAPTION: f32 = 13.0;
    pub const BODY: f32 = 16.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_LG: f32 = 30.0;
    pub const HERO_HEADING: f32 = 40.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

/// Convenience: a color with its alpha replaced.
pub fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_its_ratios() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn with_alpha_only_touches_alpha() {
        let c = with_alpha(palette::GRAY_700, 0.5);
        assert_eq!(c.r, palette::GRAY_700.r);
        assert_eq!(c.a, 0.5);
    }
}
