// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine for the modal gallery viewer.
//!
//! The [`Lightbox`] owns the image collection, the current index, and the
//! open/closed flag. All navigation paths (thumbnail press, overlay
//! controls, keyboard) funnel through [`Lightbox::open`], which keeps the
//! displayed image, caption, counter, and scroll lock in sync as a single
//! transition. `is_open` is an explicit field; what the overlay looks like
//! is a projection of this state, never its source of truth.

use super::{GalleryCollection, GalleryImage};
use crate::error::GalleryError;
use iced::keyboard;

/// Modal viewer state machine.
///
/// Invariant: `current_index < collection.len()` whenever the collection is
/// non-empty. Closing preserves the last-viewed index, so reopening without
/// a thumbnail press resumes where the viewer left off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    collection: GalleryCollection,
    is_open: bool,
    current_index: usize,
}

impl Lightbox {
    pub fn new(collection: GalleryCollection) -> Self {
        Self {
            collection,
            is_open: false,
            current_index: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn collection(&self) -> &GalleryCollection {
        &self.collection
    }

    /// The image currently on display, if the collection has any.
    pub fn current(&self) -> Option<&GalleryImage> {
        self.collection.get(self.current_index)
    }

    /// Human-readable position indicator, 1-based over the 0-based index:
    /// `"2 / 3"`. `None` while the collection is empty.
    pub fn counter_label(&self) -> Option<String> {
        if self.collection.is_empty() {
            return None;
        }
        Some(format!(
            "{} / {}",
            self.current_index + 1,
            self.collection.len()
        ))
    }

    /// Background scrolling is suppressed exactly while the viewer is open.
    pub fn locks_scroll(&self) -> bool {
        self.is_open
    }

    /// Opens the viewer on `index`.
    ///
    /// Rejects an empty collection and out-of-range indices without any
    /// state change. On success the viewer is open (re-asserted if it
    /// already was) and `current_index == index`.
    pub fn open(&mut self, index: usize) -> Result<(), GalleryError> {
        if self.collection.is_empty() {
            return Err(GalleryError::Empty);
        }
        if index >= self.collection.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.collection.len(),
            });
        }

        self.current_index = index;
        self.is_open = true;
        Ok(())
    }

    /// Closes the viewer. Idempotent; the index is preserved.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Advances to the next image, wrapping past the end.
    pub fn next(&mut self) -> Result<(), GalleryError> {
        if self.collection.is_empty() {
            return Err(GalleryError::Empty);
        }
        self.open((self.current_index + 1) % self.collection.len())
    }

    /// Retreats to the previous image, wrapping past the start.
    pub fn prev(&mut self) -> Result<(), GalleryError> {
        if self.collection.is_empty() {
            return Err(GalleryError::Empty);
        }
        let len = self.collection.len();
        self.open((self.current_index + len - 1) % len)
    }

    /// Keyboard contract: Escape closes, ArrowRight/ArrowLeft navigate.
    /// Dispatches only while the viewer is open; every other key, and every
    /// key while closed, is ignored.
    pub fn handle_key(&mut self, key: &keyboard::Key) {
        if !self.is_open {
            return;
        }

        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => self.close(),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                // Cannot fail: the viewer only opens on a non-empty collection.
                let _ = self.next();
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                let _ = self.prev();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightbox_with(count: usize) -> Lightbox {
        let collection = (0..count)
            .map(|i| GalleryImage::new(format!("{i}.jpg"), format!("Image {i}")))
            .collect();
        Lightbox::new(collection)
    }

    fn named(key: keyboard::key::Named) -> keyboard::Key {
        keyboard::Key::Named(key)
    }

    #[test]
    fn open_sets_index_and_counter() {
        let mut lightbox = lightbox_with(3);

        for index in 0..3 {
            lightbox.open(index).expect("open failed");
            assert!(lightbox.is_open());
            assert_eq!(lightbox.current_index(), index);
            assert_eq!(
                lightbox.counter_label().unwrap(),
                format!("{} / 3", index + 1)
            );
        }
    }

    #[test]
    fn open_rejects_out_of_range_index_without_state_change() {
        let mut lightbox = lightbox_with(3);
        lightbox.open(1).expect("open failed");

        let err = lightbox.open(3).unwrap_err();
        assert_eq!(err, GalleryError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(lightbox.current_index(), 1);
        assert!(lightbox.is_open());
    }

    #[test]
    fn open_rejects_empty_gallery() {
        let mut lightbox = lightbox_with(0);
        assert_eq!(lightbox.open(0), Err(GalleryError::Empty));
        assert!(!lightbox.is_open());
        assert!(lightbox.counter_label().is_none());
    }

    #[test]
    fn full_next_cycle_returns_to_the_starting_index() {
        let mut lightbox = lightbox_with(5);
        lightbox.open(2).expect("open failed");

        for _ in 0..5 {
            lightbox.next().expect("next failed");
        }
        assert_eq!(lightbox.current_index(), 2);

        for _ in 0..5 {
            lightbox.prev().expect("prev failed");
        }
        assert_eq!(lightbox.current_index(), 2);
    }

    #[test]
    fn single_image_gallery_wraps_to_itself() {
        let mut lightbox = lightbox_with(1);
        lightbox.open(0).expect("open failed");

        lightbox.next().expect("next failed");
        assert_eq!(lightbox.current_index(), 0);
        lightbox.prev().expect("prev failed");
        assert_eq!(lightbox.current_index(), 0);
    }

    #[test]
    fn navigation_scenario_with_three_images() {
        let mut lightbox = lightbox_with(3);

        lightbox.open(0).expect("open failed");
        assert_eq!(lightbox.counter_label().unwrap(), "1 / 3");

        lightbox.next().expect("next failed");
        assert_eq!(lightbox.current_index(), 1);
        assert_eq!(lightbox.counter_label().unwrap(), "2 / 3");

        lightbox.next().expect("next failed");
        lightbox.next().expect("next failed");
        assert_eq!(lightbox.current_index(), 0);
        assert_eq!(lightbox.counter_label().unwrap(), "1 / 3");

        lightbox.prev().expect("prev failed");
        assert_eq!(lightbox.current_index(), 2);
        assert_eq!(lightbox.counter_label().unwrap(), "3 / 3");
    }

    #[test]
    fn close_restores_scroll_and_preserves_the_index() {
        let mut lightbox = lightbox_with(3);
        assert!(!lightbox.locks_scroll());

        lightbox.close();
        lightbox.open(2).expect("open failed");
        assert!(lightbox.locks_scroll());
        lightbox.close();

        assert!(!lightbox.locks_scroll());
        assert_eq!(lightbox.current_index(), 2);
    }

    #[test]
    fn close_is_idempotent() {
        let mut lightbox = lightbox_with(2);
        lightbox.close();
        lightbox.close();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut lightbox = lightbox_with(3);
        lightbox.open(1).expect("open failed");
        lightbox.close();

        lightbox.handle_key(&named(keyboard::key::Named::ArrowRight));
        assert_eq!(lightbox.current_index(), 1);
        assert!(!lightbox.is_open());

        lightbox.handle_key(&named(keyboard::key::Named::Escape));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn keyboard_navigation_while_open() {
        let mut lightbox = lightbox_with(3);
        lightbox.open(0).expect("open failed");

        lightbox.handle_key(&named(keyboard::key::Named::ArrowRight));
        assert_eq!(lightbox.current_index(), 1);

        lightbox.handle_key(&named(keyboard::key::Named::ArrowLeft));
        assert_eq!(lightbox.current_index(), 0);

        lightbox.handle_key(&named(keyboard::key::Named::Escape));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn unrelated_keys_do_nothing() {
        let mut lightbox = lightbox_with(3);
        lightbox.open(1).expect("open failed");

        lightbox.handle_key(&named(keyboard::key::Named::Space));
        lightbox.handle_key(&keyboard::Key::Character("x".into()));

        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_index(), 1);
    }

    #[test]
    fn current_returns_the_displayed_image() {
        let mut lightbox = lightbox_with(3);
        lightbox.open(2).expect("open failed");
        assert_eq!(lightbox.current().unwrap().alt_text(), "Image 2");
    }
}
