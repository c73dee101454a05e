//! Mul Mat Scaling - matmul kernel throughput chart
//!
//! Renders the measured throughput of five matmul kernel implementations
//! against batch size as a log-log PNG chart.

mod charts;
mod data;

use anyhow::Context;
use charts::ScalingChartRenderer;
use std::path::Path;

/// Fixed output artifact name, written to the current working directory.
const OUTPUT_FILE: &str = "020_mul_mat_scaling.png";

fn main() -> anyhow::Result<()> {
    let data = data::rtx4090_llama3_8b();
    let path = Path::new(OUTPUT_FILE);
    ScalingChartRenderer::render_to_file(&data, path)
        .with_context(|| format!("failed to render {}", path.display()))?;
    Ok(())
}
