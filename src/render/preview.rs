use std::path::Path;

use crate::book::pose::{BookFrame, FaceSide, SheetPose};
use crate::foundation::core::{Affine, Point};
use crate::foundation::error::{BookError, BookResult};

/// Flat preview rendering options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewOpts {
    /// Empty space around the spread, in pixels.
    pub margin: u32,
    /// Straight RGBA background.
    pub background: [u8; 4],
    /// Ink border width around each sheet, in pixels.
    pub border: f64,
}

impl Default for PreviewOpts {
    fn default() -> Self {
        Self {
            margin: 24,
            background: [18, 20, 28, 255],
            border: 2.0,
        }
    }
}

const INK: [u8; 3] = [20, 20, 20];
const COVER: [u8; 3] = [196, 38, 46];
const BACK_COVER: [u8; 3] = [32, 64, 160];
const PAPER_FRONT: [u8; 3] = [245, 240, 225];
const PAPER_BACK: [u8; 3] = [232, 224, 204];
const BLANK: [u8; 3] = [190, 190, 190];

/// Base colour of the visible face of `pose`, before shading.
pub fn face_colour(pose: &SheetPose) -> [u8; 3] {
    match pose.visible_face {
        _ if pose.visible_face_blank => BLANK,
        FaceSide::Front if pose.is_cover => COVER,
        FaceSide::Front if pose.is_back_cover => BACK_COVER,
        FaceSide::Front => PAPER_FRONT,
        FaceSide::Back => PAPER_BACK,
    }
}

/// Rasterize `frame` as flat-shaded quads in painter's order.
///
/// This is a debugging view of the book geometry: rotation is projected orthographically and
/// page content is not drawn.
pub fn render_preview(frame: &BookFrame, opts: &PreviewOpts) -> BookResult<image::RgbaImage> {
    let dims = frame.dimensions;
    if dims.width == 0 || dims.height == 0 {
        return Err(BookError::render("page dimensions must be non-zero"));
    }
    let width = dims
        .width
        .checked_mul(2)
        .and_then(|w| w.checked_add(opts.margin.saturating_mul(2)))
        .ok_or_else(|| BookError::render("preview width overflows"))?;
    let height = dims
        .height
        .checked_add(opts.margin.saturating_mul(2))
        .ok_or_else(|| BookError::render("preview height overflows"))?;

    let mut img = image::RgbaImage::from_pixel(width, height, image::Rgba(opts.background));
    let offset = Affine::translate((f64::from(opts.margin), f64::from(opts.margin)));
    for pose in frame.painter_order() {
        draw_sheet(&mut img, pose, offset * pose.transform, frame, opts.border);
    }
    Ok(img)
}

/// Write a rendered preview as PNG, creating parent directories as needed.
pub fn save_png(img: &image::RgbaImage, path: impl AsRef<Path>) -> BookResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            BookError::render(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| BookError::render(format!("write png '{}': {e}", path.display())))
}

fn draw_sheet(
    img: &mut image::RgbaImage,
    pose: &SheetPose,
    to_screen: Affine,
    frame: &BookFrame,
    border: f64,
) {
    // Edge-on sheets have no area.
    let x_scale = to_screen.as_coeffs()[0].abs();
    if x_scale < 1e-3 {
        return;
    }
    let inv = to_screen.inverse();
    let w = f64::from(frame.dimensions.width);
    let h = f64::from(frame.dimensions.height);

    let corners =
        [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)].map(|(x, y)| to_screen * Point::new(x, y));
    let (min_x, max_x) = span(corners.iter().map(|p| p.x), img.width());
    let (min_y, max_y) = span(corners.iter().map(|p| p.y), img.height());

    let fill = shade(face_colour(pose), pose.shade);
    for y in min_y..max_y {
        for x in min_x..max_x {
            let local = inv * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if local.x < 0.0 || local.x > w || local.y < 0.0 || local.y > h {
                continue;
            }
            let edge = local.x * x_scale < border
                || (w - local.x) * x_scale < border
                || local.y < border
                || h - local.y < border;
            let [r, g, b] = if edge { INK } else { fill };
            img.put_pixel(x, y, image::Rgba([r, g, b, 255]));
        }
    }
}

fn span(values: impl Iterator<Item = f64>, limit: u32) -> (u32, u32) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let clamp = |v: f64| v.clamp(0.0, f64::from(limit)) as u32;
    (clamp(lo.floor()), clamp(hi.ceil()))
}

fn shade(rgb: [u8; 3], amount: f64) -> [u8; 3] {
    let k = (1.0 - amount).clamp(0.0, 1.0);
    rgb.map(|c| (f64::from(c) * k).round() as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
