use crate::foundation::error::{BookError, BookResult};

/// Easing curve applied to a flip's normalized progress.
///
/// Deserializes through [`Ease::parse`], so config files may use either variant names or the
/// `power1`/`power2` aliases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Quadratic acceleration.
    InQuad,
    /// Quadratic deceleration.
    OutQuad,
    /// Quadratic acceleration then deceleration.
    InOutQuad,
    /// Cubic acceleration.
    InCubic,
    /// Cubic deceleration.
    OutCubic,
    /// Cubic acceleration then deceleration. Default page-turn feel.
    #[default]
    InOutCubic,
}

impl Ease {
    /// Map `t` in `[0, 1]` onto the curve. Inputs outside the range are clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Parse a curve name. Accepts the variant names in any case plus the
    /// `power1`/`power2` timeline aliases (`power2.inOut` is [`Ease::InOutCubic`]).
    pub fn parse(name: &str) -> BookResult<Self> {
        let key = name.trim().to_ascii_lowercase().replace(['_', '-'], "");
        let ease = match key.as_str() {
            "linear" | "none" => Self::Linear,
            "inquad" | "power1.in" => Self::InQuad,
            "outquad" | "power1.out" => Self::OutQuad,
            "inoutquad" | "power1.inout" => Self::InOutQuad,
            "incubic" | "power2.in" => Self::InCubic,
            "outcubic" | "power2.out" => Self::OutCubic,
            "inoutcubic" | "power2.inout" => Self::InOutCubic,
            _ => {
                return Err(BookError::validation(format!(
                    "unknown ease '{}'",
                    name.trim()
                )));
            }
        };
        Ok(ease)
    }
}

impl TryFrom<String> for Ease {
    type Error = BookError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::parse(&name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
