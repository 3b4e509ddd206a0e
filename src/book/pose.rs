use crate::book::animator::FlipAnimator;
use crate::foundation::core::{Affine, Dimensions, Point, Rect, SheetIndex};

/// Which face of a sheet points at the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceSide {
    /// Front face (sheet on the right half of its turn).
    Front,
    /// Back face (sheet on the left half of its turn).
    Back,
}

/// Render state of one sheet at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SheetPose {
    /// Sheet position in the book.
    pub sheet: SheetIndex,
    /// Rotation around the spine: 0 on the right stack, -180 on the left stack.
    pub rotation_deg: f64,
    /// Paint order; higher draws later.
    pub z_index: i32,
    /// Face pointing at the viewer.
    pub visible_face: FaceSide,
    /// Whether the visible face has no content.
    pub visible_face_blank: bool,
    /// Projection of the page rect `(0, 0)-(width, height)` into spread space.
    ///
    /// The spine sits at `x = width`; the left page spans `[0, width]`.
    pub transform: Affine,
    /// Turn shading in `[0, max_shade]`, strongest when the sheet stands upright.
    pub shade: f64,
    /// Sheet 0 styled as a hard cover.
    pub is_cover: bool,
    /// Last sheet of the book.
    pub is_back_cover: bool,
}

impl SheetPose {
    /// The four projected corners of the sheet, clockwise from the spine top.
    pub fn corners(&self, dims: Dimensions) -> [Point; 4] {
        let r = Rect::from_origin_size(Point::ORIGIN, dims.to_size());
        [
            self.transform * Point::new(r.x0, r.y0),
            self.transform * Point::new(r.x1, r.y0),
            self.transform * Point::new(r.x1, r.y1),
            self.transform * Point::new(r.x0, r.y1),
        ]
    }

    /// Horizontal extent of the projected sheet.
    pub fn projected_width(&self, dims: Dimensions) -> f64 {
        (self.transform.as_coeffs()[0] * f64::from(dims.width)).abs()
    }
}

/// Render state of every sheet at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BookFrame {
    /// Page dimensions the poses were computed for.
    pub dimensions: Dimensions,
    /// One pose per sheet, in book order.
    pub poses: Vec<SheetPose>,
}

impl BookFrame {
    /// Poses sorted by ascending z-index (draw order). Ties keep book order.
    pub fn painter_order(&self) -> Vec<&SheetPose> {
        let mut out: Vec<&SheetPose> = self.poses.iter().collect();
        out.sort_by_key(|p| p.z_index);
        out
    }

    /// Bounds of the open two-page spread.
    pub fn spread_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.dimensions.spread())
    }
}

/// Transform of a page rotated `rotation_deg` around a spine at `x = spine_x`.
///
/// Rotation about the vertical axis projects onto the page plane as a horizontal scale by
/// `cos(theta)`; at -180 degrees the page is mirrored onto the left half.
pub fn spine_transform(rotation_deg: f64, spine_x: f64) -> Affine {
    let c = rotation_deg.to_radians().cos();
    Affine::translate((spine_x, 0.0)) * Affine::scale_non_uniform(c, 1.0)
}

impl<T> FlipAnimator<T> {
    /// Render state of every sheet right now.
    pub fn frame(&self) -> BookFrame {
        let dims = self.dimensions();
        let total = self.total_sheets();
        let max_shade = self.config().max_shade;
        let show_cover = self.config().show_cover;

        let poses = self
            .sheets()
            .iter()
            .enumerate()
            .map(|(i, sheet)| {
                let rotation_deg = self.sheet_rotation(i);
                let theta = rotation_deg.to_radians();
                let visible_face = if theta.cos() >= 0.0 {
                    FaceSide::Front
                } else {
                    FaceSide::Back
                };
                SheetPose {
                    sheet: sheet.index,
                    rotation_deg,
                    z_index: self.sheet_z_index(i),
                    visible_face,
                    visible_face_blank: visible_face == FaceSide::Back && sheet.back.is_blank(),
                    transform: spine_transform(rotation_deg, f64::from(dims.width)),
                    shade: theta.sin().abs() * max_shade,
                    is_cover: i == 0 && show_cover,
                    is_back_cover: i + 1 == total,
                }
            })
            .collect();

        BookFrame {
            dimensions: dims,
            poses,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/book/pose.rs"]
mod tests;
