//! Measurements Module
//! Measured token generation throughput of LLaMA 3 8b on an RTX 4090 at
//! 8192 context, single user, per matmul kernel implementation.
//!
//! The numbers are fixed benchmark results and carry no model behind them;
//! they are reproduced verbatim.

use super::{ScalingData, ThroughputSeries};

const BATCH_SIZE: [u32; 14] = [
    1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192,
];

const TS_FP16: [f64; 14] = [
    56.23, 102.2, 205.7, 406.1, 797.7, 1508.0, 2747.0, 4553.0, 7287.0, 8591.0, 8695.0, 8751.0,
    8781.0, 8797.0,
];
const TS_Q4_0_GEMM: [f64; 14] = [
    28.21, 54.63, 109.6, 217.3, 430.2, 839.7, 1562.0, 2907.0, 4799.0, 6400.0, 6547.0, 6624.0,
    6663.0, 6678.0,
];
const TS_Q8_0_GEMM: [f64; 14] = [
    26.84, 51.93, 104.1, 206.7, 408.2, 798.8, 1485.0, 2753.0, 4593.0, 6148.0, 6296.0, 6368.0,
    6408.0, 6425.0,
];
const TS_Q4_0_INT8: [f64; 14] = [
    148.9, 275.1, 543.1, 944.8, 1616.0, 2764.0, 4860.0, 6677.0, 9061.0, 9829.0, 9894.0, 9916.0,
    9931.0, 9937.0,
];
const TS_Q8_0_INT8: [f64; 14] = [
    95.10, 179.5, 357.4, 664.4, 1196.0, 2149.0, 3752.0, 5672.0, 8465.0, 9571.0, 9645.0, 9673.0,
    9705.0, 9702.0,
];

/// The reference dataset: five kernel implementations across batch sizes
/// 1 through 8192.
pub fn rtx4090_llama3_8b() -> ScalingData {
    let mut data = ScalingData::new(BATCH_SIZE.to_vec());
    data.add_series(ThroughputSeries::new("FP16 cuBLAS GEMM", TS_FP16.to_vec()));
    data.add_series(ThroughputSeries::new(
        "Q4_0 cuBLAS GEMM",
        TS_Q4_0_GEMM.to_vec(),
    ));
    data.add_series(ThroughputSeries::new(
        "Q8_0 cuBLAS GEMM",
        TS_Q8_0_GEMM.to_vec(),
    ));
    data.add_series(ThroughputSeries::new(
        "Q4_0 llama.cpp custom int8",
        TS_Q4_0_INT8.to_vec(),
    ));
    data.add_series(ThroughputSeries::new(
        "Q8_0 llama.cpp custom int8",
        TS_Q8_0_INT8.to_vec(),
    ));
    data
}
