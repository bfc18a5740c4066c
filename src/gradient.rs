//! Vertical background gradient.

use image::{Rgba, RgbaImage};

/// Orange (#FF9500)
pub const START_COLOR: [u8; 3] = [255, 149, 0];
/// Pink (#FF2D55)
pub const END_COLOR: [u8; 3] = [255, 45, 85];

/// Create an opaque orange to pink gradient, interpolated per row.
///
/// Row `y` uses `ratio = y / height`, so the last row stops one step short of
/// [`END_COLOR`]. Channels are truncated, not rounded.
pub fn create_gradient(width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);

    for y in 0..height {
        let ratio = y as f64 / height as f64;
        let color = Rgba([
            lerp_channel(START_COLOR[0], END_COLOR[0], ratio),
            lerp_channel(START_COLOR[1], END_COLOR[1], ratio),
            lerp_channel(START_COLOR[2], END_COLOR[2], ratio),
            255,
        ]);

        for x in 0..width {
            image.put_pixel(x, y, color);
        }
    }

    image
}

fn lerp_channel(start: u8, end: u8, ratio: f64) -> u8 {
    let value = start as f64 + (end as f64 - start as f64) * ratio;
    value as u8
}
