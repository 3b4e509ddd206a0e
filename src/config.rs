use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::animation::ease::Ease;
use crate::book::layout::LayoutConfig;
use crate::book::zorder::DEFAULT_Z_BOOST;
use crate::foundation::error::{BookError, BookResult};

/// Book behaviour and layout settings.
///
/// Every field has a default, so a JSON file only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Length of one flip animation, in milliseconds.
    pub flip_duration_ms: u64,
    /// Easing curve of the flip rotation.
    pub ease: Ease,
    /// Page the book opens at. Rounded down to its sheet.
    pub start_page: usize,
    /// Style sheet 0 as a hard cover. Presentation only.
    pub show_cover: bool,
    /// Extra z-index given to the sheet while it is mid-flip.
    pub z_boost: i32,
    /// Strongest shading applied to a sheet at the middle of its turn, in `[0, 1]`.
    pub max_shade: f64,
    /// Remember one flip requested during an animation and run it afterwards.
    pub queue_while_animating: bool,
    /// Page-size calculation parameters.
    pub layout: LayoutConfig,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            flip_duration_ms: 800,
            ease: Ease::InOutCubic,
            start_page: 0,
            show_cover: true,
            z_boost: DEFAULT_Z_BOOST,
            max_shade: 0.35,
            queue_while_animating: false,
            layout: LayoutConfig::default(),
        }
    }
}

impl BookConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BookResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| BookError::serde(format!("parse book config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BookResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BookError::validation(format!("open book config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject settings the animator cannot honour.
    pub fn validate(&self) -> BookResult<()> {
        if self.flip_duration_ms == 0 {
            return Err(BookError::validation("flip_duration_ms must be > 0"));
        }
        if self.z_boost < 1 {
            return Err(BookError::validation("z_boost must be >= 1"));
        }
        if !(0.0..=1.0).contains(&self.max_shade) {
            return Err(BookError::validation("max_shade must be in [0, 1]"));
        }
        self.layout.validate()
    }

    /// Flip duration as a [`Duration`].
    pub fn flip_duration(&self) -> Duration {
        Duration::from_millis(self.flip_duration_ms)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
