// SPDX-License-Identifier: MPL-2.0
//! Content loading: turns a content directory into a [`PageDocument`].
//!
//! The directory plays the role the host page's markup played in the
//! original system: it supplies the hero image, the text sections, the nav
//! links, and the gallery images. Every collaborator is optional — a missing
//! hero only disables parallax, a missing gallery only disables the
//! lightbox, and so on. Failures are reported on stderr and never prevent
//! the remaining features from initializing.

use super::{Block, BlockContent, BlockId, NavLink, PageDocument, SectionKind};
use crate::error::{Error, Result};
use crate::gallery::GalleryImage;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const MANIFEST_FILE: &str = "page.toml";
const DEFAULT_GALLERY_DIR: &str = "gallery";

#[derive(Debug, Deserialize)]
struct Manifest {
    title: Option<String>,
    hero: Option<HeroManifest>,
    #[serde(default, rename = "section")]
    sections: Vec<SectionManifest>,
    gallery: Option<GalleryManifest>,
    #[serde(default)]
    nav: NavManifest,
}

#[derive(Debug, Deserialize)]
struct HeroManifest {
    image: String,
    heading: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SectionManifest {
    kind: Option<SectionKind>,
    title: String,
    body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GalleryManifest {
    dir: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NavManifest {
    enabled: bool,
}

impl Default for NavManifest {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Loads the page document from `content_dir` (default `./content`).
///
/// Never fails as a whole: an unreadable or unparseable manifest falls back
/// to the built-in demo page, and each missing collaborator is reported and
/// skipped individually.
pub fn load_document(content_dir: Option<&Path>) -> PageDocument {
    let dir = content_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("content"));

    match read_manifest(&dir) {
        Ok(manifest) => build_document(&dir, manifest),
        Err(err) => {
            eprintln!("Failed to load {}: {}; using built-in demo page", MANIFEST_FILE, err);
            demo_document()
        }
    }
}

fn read_manifest(dir: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(dir.join(MANIFEST_FILE))?;
    toml::from_str(&content).map_err(|err| Error::Content(err.to_string()))
}

fn build_document(dir: &Path, manifest: Manifest) -> PageDocument {
    let mut blocks = Vec::new();
    let mut nav_links = Vec::new();

    if let Some(hero) = manifest.hero {
        let image = dir.join(&hero.image);
        if image.is_file() {
            blocks.push(BlockContent::Hero {
                image,
                heading: hero.heading.unwrap_or_default(),
            });
        } else {
            report_missing(&format!("hero image {}", image.display()), "parallax");
        }
    } else {
        report_missing("hero image", "parallax");
    }

    for section in manifest.sections {
        blocks.push(BlockContent::Section {
            kind: section.kind.unwrap_or(SectionKind::Content),
            title: section.title,
            body: section.body.unwrap_or_default(),
        });
    }

    let gallery_dir = dir.join(
        manifest
            .gallery
            .and_then(|g| g.dir)
            .unwrap_or_else(|| DEFAULT_GALLERY_DIR.to_string()),
    );
    match scan_gallery(&gallery_dir) {
        Ok(images) if !images.is_empty() => {
            blocks.push(BlockContent::Gallery { images });
        }
        Ok(_) => report_missing(
            &format!("gallery images in {}", gallery_dir.display()),
            "lightbox",
        ),
        Err(err) => {
            eprintln!("{}", Error::MissingCollaborator(err.to_string()));
            eprintln!("Skipping lightbox gallery");
        }
    }

    let blocks: Vec<Block> = blocks
        .into_iter()
        .enumerate()
        .map(|(i, content)| Block {
            id: BlockId(i),
            content,
        })
        .collect();

    if manifest.nav.enabled {
        for block in &blocks {
            if let BlockContent::Section { title, .. } = &block.content {
                if !title.is_empty() {
                    nav_links.push(NavLink {
                        label: title.clone(),
                        block: block.id,
                    });
                }
            }
        }
        if nav_links.is_empty() {
            report_missing("titled sections", "navigation drawer");
        }
    }

    PageDocument {
        title: manifest.title.unwrap_or_else(|| "Untitled page".to_string()),
        nav_links,
        blocks,
    }
}

fn report_missing(what: &str, feature: &str) {
    eprintln!("{}", Error::MissingCollaborator(what.to_string()));
    eprintln!("Skipping {}", feature);
}

/// Scans the gallery directory for supported images, sorted by file name.
/// The sorted order is the document order the lightbox navigates in.
fn scan_gallery(dir: &Path) -> Result<Vec<GalleryImage>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }

    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| {
            let alt = alt_text_for(&path);
            GalleryImage::new(path, alt)
        })
        .collect())
}

fn is_supported_image(path: &Path) -> bool {
    matches!(
        image_rs::ImageFormat::from_path(path),
        Ok(image_rs::ImageFormat::Jpeg
            | image_rs::ImageFormat::Png
            | image_rs::ImageFormat::Gif
            | image_rs::ImageFormat::WebP
            | image_rs::ImageFormat::Bmp)
    )
}

/// Accessible label for a gallery image: the contents of a `<stem>.txt`
/// sidecar when present, otherwise the prettified file stem.
fn alt_text_for(path: &Path) -> String {
    let sidecar = path.with_extension("txt");
    if let Ok(text) = fs::read_to_string(&sidecar) {
        let text = text.trim();
        if !text.is_empty() {
            return text.to_string();
        }
    }

    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_default()
}

/// Built-in text-only page used when no content directory is available.
/// Parallax and the lightbox stay disabled; reveal animations and the nav
/// drawer still work.
fn demo_document() -> PageDocument {
    let sections = [
        (
            SectionKind::Content,
            "About",
            "This is the built-in demo page. Point the binary at a content \
             directory containing a page.toml to replace it.",
        ),
        (
            SectionKind::Press,
            "Press",
            "Sections further down the page reveal themselves as they are \
             scrolled into view.",
        ),
        (
            SectionKind::MailingList,
            "Mailing list",
            "The mailing-list section participates in the fade-in reveal \
             policy only.",
        ),
    ];

    let blocks: Vec<Block> = sections
        .iter()
        .enumerate()
        .map(|(i, (kind, title, body))| Block {
            id: BlockId(i),
            content: BlockContent::Section {
                kind: *kind,
                title: (*title).to_string(),
                body: (*body).to_string(),
            },
        })
        .collect();

    let nav_links = blocks
        .iter()
        .map(|block| match &block.content {
            BlockContent::Section { title, .. } => NavLink {
                label: title.clone(),
                block: block.id,
            },
            _ => unreachable!("demo page only contains sections"),
        })
        .collect();

    PageDocument {
        title: "iced_stage demo".to_string(),
        nav_links,
        blocks,
    }
}
