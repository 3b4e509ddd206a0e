use crate::foundation::core::{Dimensions, Viewport};
use crate::foundation::error::{BookError, BookResult};

/// Parameters of the page-size calculation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Page width over page height.
    pub aspect_ratio: f64,
    /// Vertical space reserved for chrome (top gap plus navigation bar).
    pub vertical_margin: f64,
    /// Horizontal space reserved around the spread.
    pub horizontal_margin: f64,
    /// Share of the available height a page may use.
    pub fill_factor: f64,
    /// Smallest page width.
    pub min_width: u32,
    /// Smallest page height.
    pub min_height: u32,
    /// Largest page height before the width rule applies.
    pub max_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 2.0 / 3.0,
            vertical_margin: 82.0,
            horizontal_margin: 24.0,
            fill_factor: 0.98,
            min_width: 200,
            min_height: 300,
            max_height: 2400,
        }
    }
}

impl LayoutConfig {
    /// Check the parameters can only produce valid geometry.
    pub fn validate(&self) -> BookResult<()> {
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(BookError::layout("aspect_ratio must be finite and > 0"));
        }
        if !self.fill_factor.is_finite() || self.fill_factor <= 0.0 || self.fill_factor > 1.0 {
            return Err(BookError::layout("fill_factor must be in (0, 1]"));
        }
        if !self.vertical_margin.is_finite() || !self.horizontal_margin.is_finite() {
            return Err(BookError::layout("margins must be finite"));
        }
        if self.max_height < self.min_height {
            return Err(BookError::layout("max_height must be >= min_height"));
        }
        Ok(())
    }

    /// Page dimensions for `viewport`. See [`compute_dimensions`].
    pub fn dimensions_for(&self, viewport: Viewport) -> Dimensions {
        compute_dimensions(viewport, self)
    }
}

/// Fit one page of the two-page spread into `viewport`.
///
/// The height fills the available vertical space (within the height clamps) and the width
/// follows the aspect ratio; when two pages would not fit side by side, the width is capped at
/// half the available horizontal space and the height is derived from it. Both values are
/// floored, then raised to the configured minimums.
pub fn compute_dimensions(viewport: Viewport, cfg: &LayoutConfig) -> Dimensions {
    let available_height = finite_or_zero(viewport.height - cfg.vertical_margin).max(0.0);
    let available_width = finite_or_zero(viewport.width - cfg.horizontal_margin).max(0.0);
    let max_page_width = available_width / 2.0;

    let mut height = (available_height * cfg.fill_factor).clamp(
        f64::from(cfg.min_height),
        f64::from(cfg.max_height.max(cfg.min_height)),
    );
    let mut width = height * cfg.aspect_ratio;

    if width > max_page_width {
        width = max_page_width;
        height = width / cfg.aspect_ratio;
    }

    Dimensions {
        width: floor_u32(width).max(cfg.min_width),
        height: floor_u32(height).max(cfg.min_height),
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

fn floor_u32(v: f64) -> u32 {
    if !v.is_finite() || v <= 0.0 {
        return 0;
    }
    v.floor().min(f64::from(u32::MAX)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/book/layout.rs"]
mod tests;
