//! Numeric series parsing and summary math

use std::path::Path;
use sysgraph_common::{Result, SysGraphError};

/// Parse a whitespace/newline-delimited numeric series file body
///
/// Any non-numeric token fails the whole series; partially parsed input is
/// never returned.
pub fn parse_series(content: &str, path: &Path) -> Result<Vec<f64>> {
    content
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                SysGraphError::data_at(format!("Non-numeric sample '{token}'"), path)
            })
        })
        .collect()
}

/// Arithmetic mean of a sample window
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}
