// SPDX-License-Identifier: MPL-2.0
//! Page geometry: block extents and viewport intersection.
//!
//! The browser original read element geometry live from the layout engine.
//! Here the page is laid out deterministically from the document, so the
//! same numbers drive both rendering ([`crate::ui::page_view`]) and the
//! scroll effects. [`ScrollViewport`] is the shared "is this block visible,
//! and how much of it" signal used by parallax and all reveal policies.

use super::{Block, BlockContent, BlockId, PageDocument};

/// Fixed height of a hero banner block.
pub const HERO_HEIGHT: f32 = 420.0;
/// Vertical padding inside a text section.
pub const SECTION_PADDING: f32 = 32.0;
/// Height reserved for a section title line.
pub const SECTION_TITLE_HEIGHT: f32 = 36.0;
/// Estimated height of one wrapped body line.
pub const SECTION_LINE_HEIGHT: f32 = 24.0;
/// Characters per wrapped body line used for the height estimate.
const SECTION_LINE_CHARS: usize = 70;
/// Side length of a gallery thumbnail.
pub const GALLERY_THUMB_SIZE: f32 = 180.0;
/// Gap between gallery thumbnails.
pub const GALLERY_GAP: f32 = 16.0;
/// Thumbnails per gallery row.
pub const GALLERY_COLUMNS: usize = 3;
/// Vertical spacing between consecutive page blocks.
pub const BLOCK_SPACING: f32 = 24.0;

/// Document-relative vertical extent of a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockExtent {
    pub top: f32,
    pub height: f32,
}

impl BlockExtent {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// The scrolled viewport over the page: current offset plus visible height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollViewport {
    pub offset: f32,
    pub height: f32,
}

impl ScrollViewport {
    pub fn new(offset: f32, height: f32) -> Self {
        Self { offset, height }
    }

    /// True when the block is at least partially inside the viewport.
    pub fn intersects(&self, extent: BlockExtent) -> bool {
        self.offset + self.height > extent.top && self.offset < extent.bottom()
    }

    /// Fraction of the block currently visible, in `0.0..=1.0`.
    /// Zero-height blocks report `0.0`.
    pub fn visible_fraction(&self, extent: BlockExtent) -> f32 {
        if extent.height <= 0.0 {
            return 0.0;
        }
        let visible_top = extent.top.max(self.offset);
        let visible_bottom = extent.bottom().min(self.offset + self.height);
        ((visible_bottom - visible_top) / extent.height).clamp(0.0, 1.0)
    }
}

/// Deterministic vertical layout of the whole page, indexed by [`BlockId`].
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    extents: Vec<BlockExtent>,
}

impl PageLayout {
    /// Computes block extents for the document, top to bottom.
    pub fn build(document: &PageDocument) -> Self {
        let mut extents = Vec::with_capacity(document.blocks.len());
        let mut cursor = 0.0;

        for block in &document.blocks {
            let height = block_height(block);
            extents.push(BlockExtent {
                top: cursor,
                height,
            });
            cursor += height + BLOCK_SPACING;
        }

        Self { extents }
    }

    pub fn extent(&self, id: BlockId) -> Option<BlockExtent> {
        self.extents.get(id.0).copied()
    }

    /// Total scrollable height of the page content.
    pub fn total_height(&self) -> f32 {
        self.extents
            .last()
            .map(|extent| extent.bottom())
            .unwrap_or(0.0)
    }
}

fn block_height(block: &Block) -> f32 {
    match &block.content {
        BlockContent::Hero { .. } => HERO_HEIGHT,
        BlockContent::Section { body, .. } => {
            let lines = body.chars().count().div_ceil(SECTION_LINE_CHARS).max(1);
            SECTION_PADDING * 2.0 + SECTION_TITLE_HEIGHT + lines as f32 * SECTION_LINE_HEIGHT
        }
        BlockContent::Gallery { images } => {
            let rows = images.len().div_ceil(GALLERY_COLUMNS).max(1);
            rows as f32 * (GALLERY_THUMB_SIZE + GALLERY_GAP) + GALLERY_GAP
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GalleryImage;
    use crate::page::SectionKind;

    fn extent(top: f32, height: f32) -> BlockExtent {
        BlockExtent { top, height }
    }

    #[test]
    fn intersects_matches_partial_overlap() {
        let viewport = ScrollViewport::new(100.0, 600.0);

        // Fully above, fully below, and overlapping cases.
        assert!(!viewport.intersects(extent(0.0, 100.0)));
        assert!(!viewport.intersects(extent(700.0, 100.0)));
        assert!(viewport.intersects(extent(50.0, 100.0)));
        assert!(viewport.intersects(extent(650.0, 100.0)));
        assert!(viewport.intersects(extent(300.0, 100.0)));
    }

    #[test]
    fn intersects_is_exclusive_at_the_edges() {
        let viewport = ScrollViewport::new(100.0, 600.0);

        // A block ending exactly at the scroll offset is not visible, and
        // neither is one starting exactly at the viewport bottom.
        assert!(!viewport.intersects(extent(0.0, 100.0)));
        assert!(!viewport.intersects(extent(700.0, 50.0)));
    }

    #[test]
    fn visible_fraction_reports_partial_visibility() {
        let viewport = ScrollViewport::new(0.0, 600.0);

        assert_eq!(viewport.visible_fraction(extent(0.0, 100.0)), 1.0);
        assert_eq!(viewport.visible_fraction(extent(550.0, 100.0)), 0.5);
        assert_eq!(viewport.visible_fraction(extent(700.0, 100.0)), 0.0);
    }

    #[test]
    fn visible_fraction_of_zero_height_block_is_zero() {
        let viewport = ScrollViewport::new(0.0, 600.0);
        assert_eq!(viewport.visible_fraction(extent(10.0, 0.0)), 0.0);
    }

    #[test]
    fn layout_stacks_blocks_with_spacing() {
        let document = PageDocument {
            title: String::new(),
            nav_links: Vec::new(),
            blocks: vec![
                crate::page::Block {
                    id: BlockId(0),
                    content: BlockContent::Hero {
                        image: "hero.jpg".into(),
                        heading: String::new(),
                    },
                },
                crate::page::Block {
                    id: BlockId(1),
                    content: BlockContent::Section {
                        kind: SectionKind::Content,
                        title: "About".into(),
                        body: "short".into(),
                    },
                },
            ],
        };

        let layout = PageLayout::build(&document);
        let hero = layout.extent(BlockId(0)).unwrap();
        let section = layout.extent(BlockId(1)).unwrap();

        assert_eq!(hero.top, 0.0);
        assert_eq!(hero.height, HERO_HEIGHT);
        assert_eq!(section.top, HERO_HEIGHT + BLOCK_SPACING);
        assert!(layout.total_height() > section.top);
    }

    #[test]
    fn gallery_height_grows_with_rows() {
        let images = |n: usize| BlockContent::Gallery {
            images: (0..n)
                .map(|i| GalleryImage::new(format!("{i}.jpg"), ""))
                .collect(),
        };
        let one_row = block_height(&crate::page::Block {
            id: BlockId(0),
            content: images(3),
        });
        let two_rows = block_height(&crate::page::Block {
            id: BlockId(0),
            content: images(4),
        });

        assert!(two_rows > one_row);
    }
}
