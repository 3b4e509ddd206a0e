pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Index of a physical sheet (one front/back pair of pages).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SheetIndex(pub usize);

/// Index of a single page (one face of a sheet).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PageIndex(pub usize);

impl SheetIndex {
    /// Page shown on this sheet's front face.
    pub fn front_page(self) -> PageIndex {
        PageIndex(self.0 * 2)
    }

    /// Page shown on this sheet's back face.
    pub fn back_page(self) -> PageIndex {
        PageIndex(self.0 * 2 + 1)
    }
}

impl PageIndex {
    /// Sheet that carries this page.
    pub fn sheet(self) -> SheetIndex {
        SheetIndex(self.0 / 2)
    }

    /// True when the page sits on the back face of its sheet.
    pub fn is_back_face(self) -> bool {
        self.0 % 2 == 1
    }
}

/// Browser-style viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport from a width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Size of one page of the book, in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Page width.
    pub width: u32,
    /// Page height.
    pub height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 350,
            height: 525,
        }
    }
}

impl Dimensions {
    /// Page size as a kurbo [`Size`].
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Size of the open two-page spread.
    pub fn spread(self) -> Size {
        Size::new(f64::from(self.width) * 2.0, f64::from(self.height))
    }

    /// Height over width.
    pub fn ratio(self) -> f64 {
        if self.width == 0 {
            return 0.0;
        }
        f64::from(self.height) / f64::from(self.width)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
