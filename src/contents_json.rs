//! Contents.json for an Xcode `AppIcon.appiconset`
//!
//! Xcode matches each slot of an app icon set to a file through this
//! manifest. Writing it next to the generated PNGs lets the output directory
//! be dropped into an asset catalog as-is instead of dragging every file into
//! its slot by hand.

use crate::sizes::SizeEntry;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Author recorded in the manifest's `info` block
pub const AUTHOR: &str = "wand-icon";

/// Root structure of a Contents.json file
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// One entry per icon slot
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// A single icon slot
///
/// Several slots may point at the same `filename` when they need the same
/// pixel size.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub filename: String,

    /// Device family (e.g. "iphone", "ipad", "ios-marketing")
    pub idiom: String,

    /// Size in points (e.g. "29x29", "83.5x83.5")
    pub size: String,

    /// Scale factor (e.g. "1x", "2x", "3x")
    pub scale: String,
}

/// Versioning and authorship information
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// Format version, always 1
    pub version: u8,

    pub author: String,
}

impl ContentsFile {
    pub fn new(author: String) -> Self {
        Self {
            images: Vec::new(),
            info: Info { version: 1, author },
        }
    }

    pub fn add_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }

    /// Build a manifest from a size table. Entries without a slot are skipped.
    pub fn from_entries(entries: &[SizeEntry]) -> Self {
        let mut contents = Self::new(AUTHOR.to_string());
        for entry in entries {
            if let Some(image) = ImageEntry::from_size_entry(entry) {
                contents.add_image(image);
            }
        }
        contents
    }
}

impl ImageEntry {
    pub fn from_size_entry(entry: &SizeEntry) -> Option<Self> {
        let slot = entry.slot?;
        Some(Self {
            filename: entry.filename(),
            idiom: slot.idiom.to_string(),
            size: slot.point_size.to_string(),
            scale: format!("{}x", slot.scale),
        })
    }
}

/// Write `Contents.json` into `out_dir` and return its path.
pub fn write_contents_json(out_dir: &Path, entries: &[SizeEntry]) -> Result<PathBuf> {
    let contents = ContentsFile::from_entries(entries);

    let contents_path = out_dir.join("Contents.json");
    let contents_json =
        serde_json::to_string_pretty(&contents).context("Failed to serialize Contents.json")?;

    std::fs::write(&contents_path, contents_json).context("Failed to write Contents.json file")?;

    Ok(contents_path)
}
