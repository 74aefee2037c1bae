//! The 2×2 health figure

use crate::context::RenderContext;
use crate::histogram::Histogram;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::PathBuf;
use sysgraph_common::{MetricKey, Result, SysGraphError};
use sysgraph_metrics::MetricHistory;
use tracing::{debug, info};

/// Renders the report's chart artifact from a derived metric history
///
/// Layout mirrors the report figure: CPU load top-left, RAM usage top-right,
/// temperature bottom-right; the bottom-left panel is reserved and left
/// blank to keep the 2×2 shape.
#[derive(Debug, Clone)]
pub struct HealthFigure {
    ctx: RenderContext,
}

impl HealthFigure {
    /// Create a figure renderer with the given context
    pub fn new(ctx: RenderContext) -> Self {
        Self { ctx }
    }

    /// Render the figure and return its output path
    ///
    /// The output file is fully regenerated on every call. All histograms
    /// are computed before the backend opens the file, so a data error never
    /// leaves a truncated artifact behind.
    pub fn render(&self, history: &MetricHistory) -> Result<PathBuf> {
        for key in MetricKey::ALL {
            if history.series(key).is_empty() {
                return Err(SysGraphError::empty_data(key.as_str()));
            }
        }

        let cpu = Histogram::fixed_range("cpu", &history.cpu, self.ctx.bins, (0.0, 100.0))?;
        let ram = Histogram::fixed_range("ram", &history.ram, self.ctx.bins, (0.0, 100.0))?;
        let temp = Histogram::auto_range("temp", &history.temp, self.ctx.bins)?;
        debug!(bins = self.ctx.bins, samples = history.size, "Histograms computed");

        let root = BitMapBackend::new(&self.ctx.output_path, (self.ctx.width, self.ctx.height))
            .into_drawing_area();
        root.fill(&self.ctx.background())?;

        // Row-major: 0 top-left, 1 top-right, 2 bottom-left, 3 bottom-right.
        let panels = root.split_evenly((2, 2));
        self.draw_panel(&panels[0], MetricKey::Cpu, &cpu)?;
        self.draw_panel(&panels[1], MetricKey::Ram, &ram)?;
        self.draw_panel(&panels[3], MetricKey::Temp, &temp)?;

        root.present()?;
        info!(
            "Successfully rendered health figure to {}",
            self.ctx.output_path.display()
        );
        Ok(self.ctx.output_path.clone())
    }

    /// Draw one histogram panel with gradient-colored bars
    fn draw_panel(
        &self,
        area: &DrawingArea<BitMapBackend<'_>, Shift>,
        key: MetricKey,
        hist: &Histogram,
    ) -> Result<()> {
        let title_font = (
            self.ctx.title_font.family.as_str(),
            self.ctx.title_font.size,
        );
        let label_font = (
            self.ctx.label_font.family.as_str(),
            self.ctx.label_font.size,
        );

        let y_max = hist.max_density() * 1.1;
        let mut chart = ChartBuilder::on(area)
            .caption(key.title(), title_font)
            .margin(self.ctx.margin)
            .x_label_area_size(self.ctx.x_label_area)
            .y_label_area_size(self.ctx.y_label_area)
            .build_cartesian_2d(hist.range.0..hist.range.1, 0.0..y_max)?;

        chart
            .configure_mesh()
            .x_desc(key.axis_label())
            .axis_desc_style(label_font)
            .label_style(label_font)
            .draw()?;

        let bin_count = hist.bins.len();
        chart.draw_series(hist.bins.iter().enumerate().map(|(i, bin)| {
            let color = self.ctx.colormap.bar_color(i, bin_count);
            Rectangle::new([(bin.start, 0.0), (bin.end, bin.density)], color.filled())
        }))?;

        Ok(())
    }
}
