//! Scaling Chart Renderer
//! Renders the throughput-vs-batch-size comparison as a static PNG:
//! log-log axes, one line per kernel implementation, legend lower right.

use crate::data::{DataError, ScalingData};
use plotters::prelude::*;
use std::fmt::Display;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("chart rendering failed: {0}")]
    Backend(String),
}

/// Raster output density.
pub const DPI: u32 = 240;
/// Figure size in inches; pixel output is this times DPI.
const FIGURE_SIZE_IN: (f64, f64) = (6.4, 4.8);

/// Fixed axis limits, both axes log-scaled.
pub const X_RANGE: (f64, f64) = (1.0, 8192.0);
pub const Y_RANGE: (f64, f64) = (10.0, 11000.0);

const TITLE: &str = "LLaMA 3 8b, single user, 8192 context, RTX 4090";
const X_LABEL: &str = "Batch size";
const Y_LABEL: &str = "Throughput [tokens / second]";

/// Line color per series, cycled in insertion order
const PALETTE: [RGBColor; 5] = [
    RGBColor(31, 119, 180),  // Blue
    RGBColor(255, 127, 14),  // Orange
    RGBColor(44, 160, 44),   // Green
    RGBColor(214, 39, 40),   // Red
    RGBColor(148, 103, 189), // Purple
];

pub struct ScalingChartRenderer;

impl ScalingChartRenderer {
    /// Pixel dimensions of the output image (figure size times DPI).
    pub fn output_dimensions() -> (u32, u32) {
        (
            (FIGURE_SIZE_IN.0 * DPI as f64) as u32,
            (FIGURE_SIZE_IN.1 * DPI as f64) as u32,
        )
    }

    /// Render `data` as a PNG at `path`, overwriting any existing file.
    ///
    /// Validation runs first: a malformed dataset fails before any file is
    /// created. Any backend or I/O failure is fatal to the render.
    pub fn render_to_file(data: &ScalingData, path: &Path) -> Result<(), RenderError> {
        data.validate()?;

        let (width, height) = Self::output_dimensions();
        // 12pt text at the configured density (72pt per inch)
        let font_px = 12.0 * DPI as f64 / 72.0;

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(Self::backend_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, ("sans-serif", font_px))
            .margin(20)
            .x_label_area_size(90)
            .y_label_area_size(110)
            .build_cartesian_2d(
                (X_RANGE.0..X_RANGE.1).log_scale(),
                (Y_RANGE.0..Y_RANGE.1).log_scale(),
            )
            .map_err(Self::backend_err)?;

        chart
            .configure_mesh()
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .axis_desc_style(("sans-serif", font_px))
            .label_style(("sans-serif", font_px * 0.75))
            .x_label_formatter(&|v| format!("{:.0}", v))
            .y_label_formatter(&|v| format!("{:.0}", v))
            .draw()
            .map_err(Self::backend_err)?;

        for (i, series) in data.series.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            let points: Vec<(f64, f64)> = data
                .batch_sizes
                .iter()
                .zip(&series.tokens_per_second)
                .map(|(&b, &ts)| (f64::from(b), ts))
                .collect();

            chart
                .draw_series(LineSeries::new(points, color.stroke_width(3)))
                .map_err(Self::backend_err)?
                .label(series.label.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(3))
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .label_font(("sans-serif", font_px))
            .draw()
            .map_err(Self::backend_err)?;

        root.present().map_err(Self::backend_err)?;
        Ok(())
    }

    fn backend_err<E: Display>(err: E) -> RenderError {
        RenderError::Backend(err.to_string())
    }
}
