//! Sequential bar colormaps

use plotters::style::RGBColor;

/// Gradient applied across histogram bars by bar index
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Colormap {
    /// Diverging cool-to-warm gradient: blue through light gray to red
    CoolWarm,
    /// Dark-to-light grayscale ramp
    Grayscale,
}

impl Colormap {
    /// Sample the gradient at position `t` in [0, 1]
    pub fn sample(&self, t: f64) -> RGBColor {
        let t = t.clamp(0.0, 1.0);
        match self {
            Colormap::CoolWarm => {
                // Endpoints and midpoint of matplotlib's coolwarm scale.
                const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
                const MID: (f64, f64, f64) = (221.0, 221.0, 221.0);
                const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);
                if t < 0.5 {
                    lerp(COOL, MID, t * 2.0)
                } else {
                    lerp(MID, WARM, (t - 0.5) * 2.0)
                }
            }
            Colormap::Grayscale => lerp((32.0, 32.0, 32.0), (224.0, 224.0, 224.0), t),
        }
    }

    /// Color for bar `index` of a histogram with `count` bars
    ///
    /// The gradient is mapped linearly across bar index 0..count-1.
    pub fn bar_color(&self, index: usize, count: usize) -> RGBColor {
        if count <= 1 {
            return self.sample(0.0);
        }
        self.sample(index as f64 / (count - 1) as f64)
    }
}

fn lerp(from: (f64, f64, f64), to: (f64, f64, f64), t: f64) -> RGBColor {
    RGBColor(
        (from.0 + (to.0 - from.0) * t).round() as u8,
        (from.1 + (to.1 - from.1) * t).round() as u8,
        (from.2 + (to.2 - from.2) * t).round() as u8,
    )
}
