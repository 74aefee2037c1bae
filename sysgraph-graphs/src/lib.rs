//! Histogram figure rendering for the sysgraph Telegram bot
//!
//! This crate turns a derived metric history into the report's chart
//! artifact: a 2×2 panel figure of density histograms rendered natively
//! with plotters.

pub mod colormap;
pub mod context;
pub mod figure;
pub mod histogram;

pub use colormap::Colormap;
pub use context::{FontConfig, RenderContext};
pub use figure::HealthFigure;
pub use histogram::{Histogram, HistogramBin};
