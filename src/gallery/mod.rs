// SPDX-License-Identifier: MPL-2.0
//! Gallery data types shared by the page document and the lightbox.

pub mod lightbox;

pub use lightbox::Lightbox;

use std::path::{Path, PathBuf};

/// One viewable image: its source path and accessible label.
/// Immutable once captured from the page document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    source: PathBuf,
    alt_text: String,
}

impl GalleryImage {
    pub fn new(source: impl Into<PathBuf>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

/// Ordered, immutable sequence of gallery images. The order is the document
/// order captured at initialization and defines the navigation sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryCollection {
    images: Vec<GalleryImage>,
}

impl GalleryCollection {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryImage> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryImage> {
        self.images.iter()
    }
}

impl FromIterator<GalleryImage> for GalleryCollection {
    fn from_iter<T: IntoIterator<Item = GalleryImage>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_preserves_insertion_order() {
        let collection: GalleryCollection = vec![
            GalleryImage::new("a.jpg", "A"),
            GalleryImage::new("b.jpg", "B"),
        ]
        .into_iter()
        .collect();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(0).unwrap().alt_text(), "A");
        assert_eq!(collection.get(1).unwrap().alt_text(), "B");
        assert!(collection.get(2).is_none());
    }

    #[test]
    fn empty_collection_reports_empty() {
        let collection = GalleryCollection::default();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }
}
