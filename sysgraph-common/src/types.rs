//! Shared metric vocabulary types

use serde::{Deserialize, Serialize};

/// The three derived metrics a health report carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKey {
    /// RAM usage as a percentage of total memory
    Ram,
    /// CPU load as a percentage of available cores
    Cpu,
    /// CPU temperature in whole degrees Celsius
    Temp,
}

impl MetricKey {
    /// All metric keys, in report order
    pub const ALL: [MetricKey; 3] = [MetricKey::Ram, MetricKey::Cpu, MetricKey::Temp];

    /// Stable lowercase key, matching the on-disk metric naming
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::Ram => "ram",
            MetricKey::Cpu => "cpu",
            MetricKey::Temp => "temp",
        }
    }

    /// Human-readable panel title
    pub fn title(&self) -> &'static str {
        match self {
            MetricKey::Ram => "RAM",
            MetricKey::Cpu => "CPU",
            MetricKey::Temp => "Thermal",
        }
    }

    /// Axis label for the metric's histogram panel
    pub fn axis_label(&self) -> &'static str {
        match self {
            MetricKey::Ram => "Usage [%]",
            MetricKey::Cpu => "Load [%]",
            MetricKey::Temp => "Temperature [°C]",
        }
    }
}

impl std::fmt::Display for MetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
