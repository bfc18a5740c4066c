use crate::contents_json::write_contents_json;
use crate::draw::{
    draw_sparkle, draw_wand, pixmap_to_image, rounded_rect_mask, wand_stroke_width, SparkleSpec,
};
use crate::error::IconError;
use crate::gradient::create_gradient;
use crate::sizes::{default_sizes, SizeEntry};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops, ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tiny_skia::Pixmap;
use tracing::{debug, warn};

/// iOS icon corner radius is ~22.37% of the icon size
pub const CORNER_RADIUS_RATIO: f64 = 0.2237;

/// Alpha of the free-floating sparkles around the wand
pub const SPARKLE_ALPHA: u8 = 230;

/// Sparkle placement as fractions of the icon size: (x, y, star size)
const SPARKLE_POSITIONS: [(f64, f64, f64); 4] = [
    (0.2, 0.25, 0.08),  // Small top-left
    (0.75, 0.2, 0.06),  // Tiny top-right
    (0.25, 0.75, 0.07), // Small bottom-left
    (0.8, 0.7, 0.09),   // Medium bottom-right
];

pub const DEFAULT_OUTPUT_DIR: &str = "AppIcon";

/// Largest icon edge accepted, in pixels
pub const MAX_ICON_SIZE: u32 = 16_384;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub output: PathBuf,
    pub entries: Vec<SizeEntry>,
    pub write_contents_json: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            entries: default_sizes(),
            write_contents_json: false,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), IconError> {
        if self.entries.is_empty() {
            return Err(IconError::EmptyTable);
        }

        for entry in &self.entries {
            check_size(&entry.label, entry.size)?;
        }

        Ok(())
    }
}

/// What a generation run left on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Distinct files written, in the order they were first written
    pub files: Vec<PathBuf>,
    /// Number of table entries rendered, duplicates included
    pub rendered: usize,
    pub contents_json: Option<PathBuf>,
}

fn check_size(label: &str, size: u32) -> Result<(), IconError> {
    if size == 0 {
        return Err(IconError::ZeroSize {
            label: label.to_string(),
        });
    }

    if size > MAX_ICON_SIZE {
        return Err(IconError::TooLarge {
            label: label.to_string(),
            size,
            max: MAX_ICON_SIZE,
        });
    }

    Ok(())
}

/// Corner radius for an icon of the given size, truncated to whole pixels.
pub fn corner_radius(size: u32) -> u32 {
    (size as f64 * CORNER_RADIUS_RATIO) as u32
}

/// The free-floating sparkles for an icon of the given size.
pub fn sparkle_specs(size: u32) -> [SparkleSpec; 4] {
    let color = Rgba([255, 255, 255, SPARKLE_ALPHA]);
    let scaled = |ratio: f64| (size as f64 * ratio) as i32;

    SPARKLE_POSITIONS.map(|(x, y, star)| SparkleSpec::new(scaled(x), scaled(y), scaled(star), color))
}

/// Render the app icon at `size × size` pixels.
pub fn create_app_icon(size: u32) -> Result<RgbaImage, IconError> {
    let label = size.to_string();
    check_size(&label, size)?;

    let mut image = create_gradient(size, size);

    let mut overlay = Pixmap::new(size, size).ok_or(IconError::TooLarge {
        label,
        size,
        max: MAX_ICON_SIZE,
    })?;
    draw_wand(&mut overlay, size);
    for sparkle in sparkle_specs(size) {
        draw_sparkle(&mut overlay, sparkle);
    }

    imageops::overlay(&mut image, &pixmap_to_image(&overlay), 0, 0);

    let radius = corner_radius(size);
    let mask = rounded_rect_mask(size, size, radius);
    for (pixel, alpha) in image.pixels_mut().zip(mask.pixels()) {
        pixel[3] = alpha[0];
    }

    debug!(
        size,
        radius,
        stroke = wand_stroke_width(size),
        "rendered app icon"
    );

    Ok(image)
}

/// Render every entry of the table into `config.output`.
///
/// The first failure aborts the run; files already written are left behind.
pub fn generate_icons(config: &GeneratorConfig) -> Result<GenerationReport> {
    config.validate()?;

    create_dir_all(&config.output).context("Can't create output directory")?;

    let mut report = GenerationReport::default();

    for entry in &config.entries {
        let icon = create_app_icon(entry.size)?;
        let output_path = config.output.join(entry.filename());

        if report.files.contains(&output_path) {
            warn!(
                label = %entry.label,
                path = %output_path.display(),
                "overwriting icon written earlier in this run"
            );
        }

        save_png(&icon, &output_path)
            .with_context(|| format!("Failed to save icon '{}'", entry.label))?;
        println!("✓ Generated {}", output_path.display());

        if !report.files.contains(&output_path) {
            report.files.push(output_path);
        }
        report.rendered += 1;
    }

    if config.write_contents_json {
        let path = write_contents_json(&config.output, &config.entries)?;
        println!("✓ Generated {}", path.display());
        report.contents_json = Some(path);
    }

    Ok(report)
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path).context("Failed to create PNG file")?;
    let mut out_file = BufWriter::new(file);
    write_png(image.as_raw(), &mut out_file, image.width(), image.height())
        .context("Failed to write PNG")?;
    out_file.flush()?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_is_square_rgba() {
        for size in [1, 4, 29, 120] {
            let icon = create_app_icon(size).unwrap();
            assert_eq!(icon.dimensions(), (size, size));
        }
    }

    #[test]
    fn corners_are_transparent_and_center_is_opaque() {
        for size in [9, 20, 29, 60, 180, 1024] {
            let icon = create_app_icon(size).unwrap();
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(icon.get_pixel(x, y)[3], 0, "size {size} corner ({x}, {y})");
            }
            assert_eq!(icon.get_pixel(size / 2, size / 2)[3], 255, "size {size}");
        }
    }

    #[test]
    fn tiny_icon_keeps_square_corners() {
        let icon = create_app_icon(4).unwrap();
        assert_eq!(corner_radius(4), 0);
        assert!(icon.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn background_shows_through_away_from_glyphs() {
        let icon = create_app_icon(200).unwrap();
        // Left edge, middle row: gradient only
        let pixel = icon.get_pixel(2, 100);
        assert_eq!(pixel[0], 255);
        assert_eq!(pixel[1], 149 - 52);
        assert_eq!(pixel[2], 42);
        assert_eq!(pixel[3], 255);
    }

    #[test]
    fn wand_is_composited_in_white() {
        let icon = create_app_icon(200).unwrap();
        assert_eq!(icon.get_pixel(126, 73), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn translucent_sparkles_blend_with_background() {
        let size = 200;
        let icon = create_app_icon(size).unwrap();
        let background = create_gradient(size, size);

        // Center of the top-left sparkle
        let (x, y) = (40, 50);
        let pixel = icon.get_pixel(x, y);
        let under = background.get_pixel(x, y);
        assert!(pixel[1] > under[1], "sparkle should lighten the background");
        assert!(pixel[1] < 255, "sparkle is not fully opaque");
        assert_eq!(pixel[3], 255);
    }

    #[test]
    fn corner_radius_truncates() {
        assert_eq!(corner_radius(1024), 229);
        assert_eq!(corner_radius(180), 40);
        assert_eq!(corner_radius(120), 26);
        assert_eq!(corner_radius(9), 2);
        assert_eq!(corner_radius(8), 1);
    }

    #[test]
    fn sparkle_table_scales_with_size() {
        let specs = sparkle_specs(100);
        assert_eq!((specs[0].cx, specs[0].cy, specs[0].size), (20, 25, 8));
        assert_eq!((specs[3].cx, specs[3].cy, specs[3].size), (80, 70, 9));
        assert!(specs.iter().all(|s| s.color[3] == SPARKLE_ALPHA));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(
            create_app_icon(0).unwrap_err(),
            IconError::ZeroSize {
                label: "0".to_string()
            }
        );
    }

    #[test]
    fn oversized_icon_is_rejected_before_allocating() {
        assert!(matches!(
            create_app_icon(MAX_ICON_SIZE + 1),
            Err(IconError::TooLarge { size, .. }) if size == MAX_ICON_SIZE + 1
        ));
    }

    #[test]
    fn icon_shows_wand_caps_and_tip_star() {
        let icon = create_app_icon(200).unwrap();
        // Rounded cap behind the stick's start point
        assert_eq!(icon.get_pixel(72, 127), &Rgba([255, 255, 255, 255]));
        // Left arm of the star at the wand tip
        assert_eq!(icon.get_pixel(158, 22), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn validation_names_the_bad_entry() {
        let config = GeneratorConfig {
            entries: vec![SizeEntry::new("ok", 16), SizeEntry::new("broken", 0)],
            ..GeneratorConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            IconError::ZeroSize {
                label: "broken".to_string()
            }
        );

        let huge = GeneratorConfig {
            entries: vec![SizeEntry::new("huge", 4_000_000_000)],
            ..GeneratorConfig::default()
        };
        assert_eq!(
            huge.validate().unwrap_err(),
            IconError::TooLarge {
                label: "huge".to_string(),
                size: 4_000_000_000,
                max: MAX_ICON_SIZE,
            }
        );

        let empty = GeneratorConfig {
            entries: Vec::new(),
            ..GeneratorConfig::default()
        };
        assert_eq!(empty.validate().unwrap_err(), IconError::EmptyTable);
    }
}
