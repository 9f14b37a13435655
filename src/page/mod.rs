// SPDX-License-Identifier: MPL-2.0
//! Page document model.
//!
//! A [`PageDocument`] is the in-memory form of the long-form content page:
//! an ordered list of blocks (hero image, text sections, image gallery) plus
//! the navigation links derived from them. The document is built once at
//! startup and never mutated afterwards; scroll effects and the lightbox all
//! hold on to block ids or image data captured from it.

pub mod content;
pub mod geometry;

use crate::gallery::GalleryImage;
use serde::Deserialize;
use std::path::PathBuf;

/// Stable identity of a page block, assigned in document order at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub usize);

/// The flavor of a text section. Mirrors the three section styles the page
/// stylesheet distinguishes; reveal policies target different subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Content,
    Press,
    MailingList,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    /// Full-width banner image with an optional heading. Parallax target.
    Hero { image: PathBuf, heading: String },
    /// A text section. Reveal-animation target.
    Section {
        kind: SectionKind,
        title: String,
        body: String,
    },
    /// The thumbnail grid feeding the lightbox. Reveal target for the
    /// slide-up policy.
    Gallery { images: Vec<GalleryImage> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub content: BlockContent,
}

/// A link in the navigation drawer pointing at a section block.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub block: BlockId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageDocument {
    pub title: String,
    pub nav_links: Vec<NavLink>,
    pub blocks: Vec<Block>,
}

impl PageDocument {
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.0)
    }

    /// Blocks registered for the parallax effect. Membership is fixed once
    /// the document is built.
    pub fn parallax_targets(&self) -> Vec<BlockId> {
        self.blocks
            .iter()
            .filter(|block| matches!(block.content, BlockContent::Hero { .. }))
            .map(|block| block.id)
            .collect()
    }

    /// All gallery images in document order. This order defines the
    /// lightbox navigation sequence and never changes afterwards.
    pub fn gallery_images(&self) -> Vec<GalleryImage> {
        self.blocks
            .iter()
            .filter_map(|block| match &block.content {
                BlockContent::Gallery { images } => Some(images.as_slice()),
                _ => None,
            })
            .flatten()
            .cloned()
            .collect()
    }
}
