//! Layout configuration.
//!
//! A [`LayoutConfig`] sets the defaults a canvas applies to every control it
//! creates. It can be built in code or loaded from TOML; every field is
//! optional in the file.
//!
//! ```toml
//! default_minimum_size = { width = 0.0, height = 0.0 }
//! tree_style = "ascii"
//!
//! [glyph_metrics]
//! advance = 8.0
//! line_height = 18.0
//! ```

use std::path::{Path, PathBuf};

use horizon_trellis_core::{Size, logging::targets};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::debug::TreeStyle;

/// Errors from loading a [`LayoutConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read layout config {path}: {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML was malformed or had the wrong shape.
    #[error("invalid layout config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Fixed-pitch text metrics used by text leaf controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphMetrics {
    /// Horizontal advance of one character.
    pub advance: f32,
    /// Height of one line.
    pub line_height: f32,
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self {
            advance: 7.0,
            line_height: 16.0,
        }
    }
}

impl GlyphMetrics {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance: advance.max(0.0),
            line_height: line_height.max(0.0),
        }
    }

    /// Size of `text`: the longest line's character count times the advance
    /// by the number of lines times the line height.
    ///
    /// Empty text still occupies one line.
    pub fn measure(&self, text: &str) -> Size {
        let (lines, longest) = text
            .lines()
            .fold((0usize, 0usize), |(lines, longest), line| {
                (lines + 1, longest.max(line.chars().count()))
            });
        Size::new(
            longest as f32 * self.advance,
            lines.max(1) as f32 * self.line_height,
        )
    }
}

/// Defaults applied by a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum size of every new control.
    pub default_minimum_size: Size,
    /// Maximum size of every new control; unbounded when absent.
    pub default_maximum_size: Option<Size>,
    /// Metrics for text leaf controls.
    pub glyph_metrics: GlyphMetrics,
    /// Style of debug tree dumps.
    pub tree_style: TreeStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_minimum_size: Size::new(1.0, 1.0),
            default_maximum_size: None,
            glyph_metrics: GlyphMetrics::default(),
            tree_style: TreeStyle::default(),
        }
    }
}

impl LayoutConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded layout config");
        Ok(config)
    }

    /// Maximum size with the unbounded default filled in.
    pub fn maximum_size(&self) -> Size {
        self.default_maximum_size.unwrap_or(Size::INFINITE)
    }
}
