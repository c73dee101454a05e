//! Data module - benchmark series and the fixed reference measurements

mod measurements;
mod series;

pub use measurements::rtx4090_llama3_8b;
pub use series::{DataError, ScalingData, ThroughputSeries};
