//! Derived metric history and run averages

use serde::{Deserialize, Serialize};
use sysgraph_common::MetricKey;

use crate::series;

/// The three derived series of one report run, plus the sample count
///
/// Derived once per run and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricHistory {
    /// RAM usage percentage per sample
    pub ram: Vec<f64>,
    /// CPU load percentage per sample
    pub cpu: Vec<f64>,
    /// CPU temperature in degrees Celsius per sample
    pub temp: Vec<f64>,
    /// Number of synchronized samples in each series
    pub size: usize,
}

impl MetricHistory {
    /// Assemble a history from the three derived series
    pub fn new(ram: Vec<f64>, cpu: Vec<f64>, temp: Vec<f64>) -> Self {
        let size = cpu.len();
        Self {
            ram,
            cpu,
            temp,
            size,
        }
    }

    /// Borrow the series behind a metric key
    pub fn series(&self, key: MetricKey) -> &[f64] {
        match key {
            MetricKey::Ram => &self.ram,
            MetricKey::Cpu => &self.cpu,
            MetricKey::Temp => &self.temp,
        }
    }

    /// Compute the per-key averages for this history
    pub fn averages(&self) -> MetricAverages {
        MetricAverages {
            ram: series::mean(&self.ram),
            cpu: series::mean(&self.cpu),
            temp: series::mean(&self.temp),
        }
    }
}

/// Arithmetic mean of each derived series
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricAverages {
    pub ram: f64,
    pub cpu: f64,
    pub temp: f64,
}

impl MetricAverages {
    /// Mean behind a metric key
    pub fn mean(&self, key: MetricKey) -> f64 {
        match key {
            MetricKey::Ram => self.ram,
            MetricKey::Cpu => self.cpu,
            MetricKey::Temp => self.temp,
        }
    }
}

/// Complete Data Loader output: label, history and averages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// Operating-system identifier used verbatim in the report text
    pub distro: String,
    /// Derived series
    pub history: MetricHistory,
    /// Run averages
    pub averages: MetricAverages,
}
