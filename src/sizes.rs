//! The table of icon sizes to render.

use std::collections::HashSet;

/// The Xcode AppIcon slot an entry was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppIconSlot {
    /// Device family (e.g. "iphone", "ipad", "ios-marketing")
    pub idiom: &'static str,
    /// Size in points, as Xcode spells it (e.g. "83.5x83.5")
    pub point_size: &'static str,
    /// Pixel density multiplier
    pub scale: u32,
}

/// A labelled pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeEntry {
    pub label: String,
    pub size: u32,
    pub slot: Option<AppIconSlot>,
}

impl SizeEntry {
    pub fn new(label: impl Into<String>, size: u32) -> Self {
        Self {
            label: label.into(),
            size,
            slot: None,
        }
    }

    fn with_slot(mut self, idiom: &'static str, point_size: &'static str, scale: u32) -> Self {
        self.slot = Some(AppIconSlot {
            idiom,
            point_size,
            scale,
        });
        self
    }

    /// Output file name, keyed by pixel size only.
    pub fn filename(&self) -> String {
        icon_filename(self.size)
    }
}

pub fn icon_filename(size: u32) -> String {
    format!("icon_{size}x{size}.png")
}

/// All iOS app icon sizes, in generation order.
///
/// "120" and "120_spot" fill different slots with the same pixel size, so
/// they share one output file.
pub fn default_sizes() -> Vec<SizeEntry> {
    vec![
        // App Store
        SizeEntry::new("1024", 1024).with_slot("ios-marketing", "1024x1024", 1),
        // iPhone @3x
        SizeEntry::new("180", 180).with_slot("iphone", "60x60", 3),
        // iPhone @2x
        SizeEntry::new("120", 120).with_slot("iphone", "60x60", 2),
        // iPad Pro @2x
        SizeEntry::new("167", 167).with_slot("ipad", "83.5x83.5", 2),
        // iPad @2x
        SizeEntry::new("152", 152).with_slot("ipad", "76x76", 2),
        // iPad @1x
        SizeEntry::new("76", 76).with_slot("ipad", "76x76", 1),
        // iPhone notification @3x
        SizeEntry::new("60", 60).with_slot("iphone", "20x20", 3),
        // Settings @2x
        SizeEntry::new("58", 58).with_slot("iphone", "29x29", 2),
        // Settings @3x
        SizeEntry::new("87", 87).with_slot("iphone", "29x29", 3),
        // Spotlight @2x
        SizeEntry::new("80", 80).with_slot("iphone", "40x40", 2),
        // Spotlight @3x
        SizeEntry::new("120_spot", 120).with_slot("iphone", "40x40", 3),
        // Spotlight @1x
        SizeEntry::new("40", 40).with_slot("ipad", "40x40", 1),
        // Settings @1x
        SizeEntry::new("29", 29).with_slot("ipad", "29x29", 1),
        // Notification @1x
        SizeEntry::new("20", 20).with_slot("ipad", "20x20", 1),
    ]
}

/// Entries for user-supplied pixel sizes. These carry no asset-catalog slot.
pub fn custom_sizes(sizes: &[u32]) -> Vec<SizeEntry> {
    sizes
        .iter()
        .map(|&size| SizeEntry::new(size.to_string(), size))
        .collect()
}

/// Number of output files a table produces.
pub fn distinct_size_count(entries: &[SizeEntry]) -> usize {
    entries
        .iter()
        .map(|entry| entry.size)
        .collect::<HashSet<_>>()
        .len()
}
