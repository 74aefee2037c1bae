//! Explicit render configuration
//!
//! All figure styling lives in a context value constructed by the caller;
//! nothing is read from process-global state.

use crate::colormap::Colormap;
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Font family and pixel size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    pub family: String,
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 80,
        }
    }
}

/// Render configuration for the health figure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderContext {
    /// Output path of the figure; overwritten on every render
    pub output_path: PathBuf,
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
    /// Histogram bin count shared by all panels
    pub bins: usize,
    /// Background color as a hex string
    pub background_color: String,
    /// Panel title font
    pub title_font: FontConfig,
    /// Axis label font
    pub label_font: FontConfig,
    /// Bar gradient
    pub colormap: Colormap,
    /// Outer margin of each panel, in pixels
    pub margin: u32,
    /// Height reserved for x-axis labels, in pixels
    pub x_label_area: u32,
    /// Width reserved for y-axis labels, in pixels
    pub y_label_area: u32,
}

impl Default for RenderContext {
    fn default() -> Self {
        // 10x10 in at 400 DPI; fonts sized to match the original's 16 pt.
        Self {
            output_path: PathBuf::from("./plot.png"),
            width: 4000,
            height: 4000,
            bins: 40,
            background_color: "#FFFFFF".to_string(),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 96,
            },
            label_font: FontConfig::default(),
            colormap: Colormap::CoolWarm,
            margin: 40,
            x_label_area: 180,
            y_label_area: 200,
        }
    }
}

impl RenderContext {
    /// Create a context writing to the given output path
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ..Default::default()
        }
    }

    /// Set the figure dimensions in pixels
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the histogram bin count
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Set the bar gradient
    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    /// Scale fonts and label areas for small figures (test renders)
    pub fn with_compact_labels(mut self) -> Self {
        self.title_font.size = 18;
        self.label_font.size = 14;
        self.margin = 10;
        self.x_label_area = 30;
        self.y_label_area = 40;
        self
    }

    /// The figure's output path
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Parse the configured background into an RGB color
    ///
    /// Falls back to white on an unparseable value.
    pub fn background(&self) -> RGBColor {
        parse_color(&self.background_color).unwrap_or(RGBColor(255, 255, 255))
    }
}

/// Parse a "#RRGGBB" hex color string
pub fn parse_color(color_str: &str) -> Option<RGBColor> {
    let hex = color_str.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(RGBColor(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_figure_spec() {
        let ctx = RenderContext::default();
        assert_eq!(ctx.width, 4000);
        assert_eq!(ctx.height, 4000);
        assert_eq!(ctx.bins, 40);
        assert_eq!(ctx.colormap, Colormap::CoolWarm);
        assert_eq!(ctx.output_path, PathBuf::from("./plot.png"));
    }

    #[test]
    fn test_builder_methods() {
        let ctx = RenderContext::new("/tmp/health.png")
            .with_dimensions(800, 800)
            .with_bins(20)
            .with_colormap(Colormap::Grayscale);

        assert_eq!(ctx.output_path, PathBuf::from("/tmp/health.png"));
        assert_eq!(ctx.width, 800);
        assert_eq!(ctx.bins, 20);
        assert_eq!(ctx.colormap, Colormap::Grayscale);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#FF0000"), Some(RGBColor(255, 0, 0)));
        assert_eq!(parse_color("#00FF00"), Some(RGBColor(0, 255, 0)));
        assert_eq!(parse_color("#0000FF"), Some(RGBColor(0, 0, 255)));
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZ0000"), None);
    }

    #[test]
    fn test_background_falls_back_to_white() {
        let mut ctx = RenderContext::default();
        ctx.background_color = "not-a-color".to_string();
        assert_eq!(ctx.background(), RGBColor(255, 255, 255));
    }
}
