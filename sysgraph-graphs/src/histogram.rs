//! Density histogram computation

use sysgraph_common::{Result, SysGraphError};

/// A single histogram bin
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Inclusive lower edge
    pub start: f64,
    /// Exclusive upper edge (inclusive for the last bin)
    pub end: f64,
    /// Number of samples in the bin
    pub count: usize,
    /// Normalized bar height: count / (samples * bin_width)
    pub density: f64,
}

/// A density-normalized histogram over one derived series
///
/// Density semantics: the integral over all bins is 1, so bar heights are
/// comparable across runs with different sample counts.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Bins in ascending edge order
    pub bins: Vec<HistogramBin>,
    /// Value range covered by the bins
    pub range: (f64, f64),
    /// Width of each bin
    pub bin_width: f64,
    /// Number of samples counted into the bins
    pub samples: usize,
}

impl Histogram {
    /// Build a histogram over a fixed value range
    ///
    /// Samples outside the range are excluded from both the bins and the
    /// density normalization.
    pub fn fixed_range(
        series: &str,
        values: &[f64],
        bins: usize,
        range: (f64, f64),
    ) -> Result<Self> {
        if values.is_empty() {
            return Err(SysGraphError::empty_data(series));
        }
        if bins == 0 {
            return Err(SysGraphError::render("Histogram requires at least one bin"));
        }
        if range.1 <= range.0 {
            return Err(SysGraphError::render(format!(
                "Invalid histogram range [{}, {}]",
                range.0, range.1
            )));
        }
        Self::compute(series, values, bins, range)
    }

    /// Build a histogram ranged to the data's min/max
    ///
    /// A degenerate range (all samples equal) is padded by ±0.5 around the
    /// single value.
    pub fn auto_range(series: &str, values: &[f64], bins: usize) -> Result<Self> {
        if values.is_empty() {
            return Err(SysGraphError::empty_data(series));
        }
        if bins == 0 {
            return Err(SysGraphError::render("Histogram requires at least one bin"));
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };
        Self::compute(series, values, bins, range)
    }

    fn compute(series: &str, values: &[f64], bins: usize, range: (f64, f64)) -> Result<Self> {
        let (lo, hi) = range;
        let bin_width = (hi - lo) / bins as f64;

        let mut counts = vec![0usize; bins];
        let mut counted = 0usize;
        for &v in values {
            if v < lo || v > hi || !v.is_finite() {
                continue;
            }
            // The upper edge belongs to the last bin.
            let mut idx = ((v - lo) / bin_width) as usize;
            if idx >= bins {
                idx = bins - 1;
            }
            counts[idx] += 1;
            counted += 1;
        }

        if counted == 0 {
            return Err(SysGraphError::render(format!(
                "No '{series}' samples fall within [{lo}, {hi}]"
            )));
        }

        let bins = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let start = lo + i as f64 * bin_width;
                HistogramBin {
                    start,
                    end: start + bin_width,
                    count,
                    density: count as f64 / (counted as f64 * bin_width),
                }
            })
            .collect();

        Ok(Self {
            bins,
            range,
            bin_width,
            samples: counted,
        })
    }

    /// Tallest bar height, used for y-axis scaling
    pub fn max_density(&self) -> f64 {
        self.bins.iter().map(|b| b.density).fold(0.0, f64::max)
    }
}
