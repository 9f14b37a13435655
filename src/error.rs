// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Content(String),
    /// A piece of page content the feature needs is absent (no hero image,
    /// no gallery directory, no nav links). The feature is skipped; the
    /// rest of the page keeps working.
    MissingCollaborator(String),
    Gallery(GalleryError),
}

/// Specific error types for lightbox gallery navigation.
///
/// The original interaction model trusted every index to come from a
/// generated control; here `open` validates instead, so bad input is a
/// reported error rather than undefined behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// The gallery holds no images, so there is nothing to open.
    Empty,

    /// A navigation request referenced an index outside the collection.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Empty => write!(f, "The gallery is empty"),
            GalleryError::IndexOutOfRange { index, len } => {
                write!(f, "Image index {} out of range (gallery holds {})", index, len)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::MissingCollaborator(what) => {
                write!(f, "Missing page content: {}", what)
            }
            Error::Gallery(e) => write!(f, "Gallery Error: {}", e),
        }
    }
}

impl From<GalleryError> for Error {
    fn from(err: GalleryError) -> Self {
        Error::Gallery(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
