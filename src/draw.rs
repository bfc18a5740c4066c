//! Wand and sparkle glyphs, rasterized with tiny-skia.
//!
//! Glyphs are drawn without anti-aliasing and with [`BlendMode::Source`], so
//! a translucent glyph replaces what is under it instead of blending. The
//! overlay keeps each glyph's exact alpha until it is composited onto the
//! background.
//!
//! Glyph geometry uses integer coordinates that name pixels, so polygon and
//! stroke paths are shifted by half a pixel onto pixel centers.

use image::{GrayImage, Luma, Rgba, RgbaImage};
use std::f64::consts::FRAC_PI_4;
use tiny_skia::{
    BlendMode, FillRule, LineCap, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// A four-pointed star glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparkleSpec {
    pub cx: i32,
    pub cy: i32,
    pub size: i32,
    pub color: Rgba<u8>,
}

impl SparkleSpec {
    pub fn new(cx: i32, cy: i32, size: i32, color: Rgba<u8>) -> Self {
        Self {
            cx,
            cy,
            size,
            color,
        }
    }
}

/// Stroke width of the wand: 6% of the icon, never thinner than 3px.
pub fn wand_stroke_width(size: u32) -> i32 {
    ((size as f64 * 0.06) as i32).max(3)
}

/// Draw a four-pointed sparkle star with four small diagonal accents.
pub fn draw_sparkle(canvas: &mut Pixmap, spec: SparkleSpec) {
    let SparkleSpec {
        cx,
        cy,
        size,
        color,
    } = spec;
    let q = size.div_euclid(4);

    // Main cross
    fill_polygon(
        canvas,
        &[
            (cx, cy - size),
            (cx - q, cy - q),
            (cx - size, cy),
            (cx - q, cy + q),
            (cx, cy + size),
            (cx + q, cy + q),
            (cx + size, cy),
            (cx + q, cy - q),
        ],
        color,
    );

    let diag_size = (size as f64 * 0.6) as i32;
    let diag_offset = (size as f64 * 0.7) as i32;
    let dq = diag_size.div_euclid(4);
    let dh = diag_size.div_euclid(2);

    let accents = [
        // Top-left
        [
            (cx - diag_offset, cy - diag_offset),
            (cx - diag_offset + dq, cy - diag_offset),
            (cx, cy - dh),
            (cx, cy - diag_offset + dq),
        ],
        // Top-right
        [
            (cx + diag_offset, cy - diag_offset),
            (cx + diag_offset, cy - diag_offset + dq),
            (cx + dh, cy),
            (cx + diag_offset - dq, cy),
        ],
        // Bottom-left
        [
            (cx - diag_offset, cy + diag_offset),
            (cx - dh, cy),
            (cx, cy + diag_offset - dq),
            (cx - diag_offset + dq, cy + diag_offset),
        ],
        // Bottom-right
        [
            (cx + diag_offset, cy + diag_offset),
            (cx + diag_offset - dq, cy + diag_offset),
            (cx, cy + dh),
            (cx, cy + diag_offset - dq),
        ],
    ];

    for accent in accents {
        fill_polygon(canvas, &accent, color);
    }
}

/// Draw the magic wand: a 45° stick with rounded ends and a star at its tip.
pub fn draw_wand(canvas: &mut Pixmap, size: u32) {
    let center = (size / 2) as f64;
    let stick_width = wand_stroke_width(size);

    let stick_length = size as f64 * 0.55;
    let (sin, cos) = FRAC_PI_4.sin_cos();

    let end_x = (center + stick_length * cos) as i32;
    let end_y = (center - stick_length * sin) as i32;
    let start_x = (center - stick_length * 0.3 * cos) as i32;
    let start_y = (center + stick_length * 0.3 * sin) as i32;

    draw_line(canvas, (start_x, start_y), (end_x, end_y), stick_width, WHITE);

    let cap = stick_width.div_euclid(2);
    for (x, y) in [(start_x, start_y), (end_x, end_y)] {
        fill_ellipse(canvas, x - cap, y - cap, x + cap, y + cap, WHITE);
    }

    let star_size = (size as f64 * 0.12) as i32;
    draw_sparkle(canvas, SparkleSpec::new(end_x, end_y, star_size, WHITE));
}

/// Fill a closed polygon. Zero-area polygons draw nothing.
pub fn fill_polygon(canvas: &mut Pixmap, points: &[(i32, i32)], color: Rgba<u8>) {
    let Some((&(x0, y0), rest)) = points.split_first() else {
        return;
    };

    let mut pb = PathBuilder::new();
    pb.move_to(x0 as f32, y0 as f32);
    for &(x, y) in rest {
        pb.line_to(x as f32, y as f32);
    }
    pb.close();

    if let Some(path) = pb.finish() {
        canvas.fill_path(
            &path,
            &solid_paint(color),
            FillRule::Winding,
            pixel_centers(),
            None,
        );
    }
}

/// Draw a straight line `width` pixels wide with flat ends.
pub fn draw_line(
    canvas: &mut Pixmap,
    from: (i32, i32),
    to: (i32, i32),
    width: i32,
    color: Rgba<u8>,
) {
    let mut pb = PathBuilder::new();
    pb.move_to(from.0 as f32, from.1 as f32);
    pb.line_to(to.0 as f32, to.1 as f32);

    let Some(path) = pb.finish() else {
        return;
    };

    let stroke = Stroke {
        width: width.max(1) as f32,
        line_cap: LineCap::Butt,
        ..Stroke::default()
    };
    canvas.stroke_path(&path, &solid_paint(color), &stroke, pixel_centers(), None);
}

/// Fill the ellipse inscribed in the inclusive pixel box `[x0, x1] × [y0, y1]`.
pub fn fill_ellipse(canvas: &mut Pixmap, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    // The box is inclusive, so its far edge lies one pixel past x1/y1.
    let Some(rect) = Rect::from_ltrb(
        x0.min(x1) as f32,
        y0.min(y1) as f32,
        (x0.max(x1) + 1) as f32,
        (y0.max(y1) + 1) as f32,
    ) else {
        return;
    };

    if let Some(path) = PathBuilder::from_oval(rect) {
        canvas.fill_path(
            &path,
            &solid_paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

/// Copy a pixmap into an RGBA image, undoing tiny-skia's premultiplied alpha.
pub fn pixmap_to_image(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (pixel, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let color = src.demultiply();
        *pixel = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }
    image
}

/// Build a binary mask that is opaque inside a rounded rectangle covering the
/// whole `width × height` area and transparent outside it.
///
/// A pixel belongs to the shape when its center lies inside. The radius is
/// clamped to half the shorter side.
pub fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let w = width as f32;
    let h = height as f32;
    let r = (radius as f32).min(w.min(h) / 2.0);

    GrayImage::from_fn(width, height, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        // Nearest point on the inner rectangle whose corners are the arc centers
        let nearest_x = px.clamp(r, w - r);
        let nearest_y = py.clamp(r, h - r);
        let dx = px - nearest_x;
        let dy = py - nearest_y;

        if dx * dx + dy * dy <= r * r {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

fn solid_paint(color: Rgba<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = false;
    paint.blend_mode = BlendMode::Source;
    paint
}

fn pixel_centers() -> Transform {
    Transform::from_translate(0.5, 0.5)
}
