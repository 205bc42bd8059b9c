//! Micro-benchmark counters for the multiplication kernel.

use std::hint::black_box;
use std::time::Instant;

use crate::constants::bench::{LHS, OPERAND_BYTES, RHS};
use crate::error::HcError;
use crate::quaternion::Quaternion;

/// Result of a [`benchmark`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfStats {
    pub operations_per_second: u64,
    pub average_latency_ns: f64,
    /// Two 16-byte operands read per multiplication.
    pub bytes_processed: u64,
}

impl PerfStats {
    /// Input throughput in MiB/s.
    pub fn throughput_mib_s(&self) -> f64 {
        let seconds = self.average_latency_ns * 1e-9;
        let ops = if seconds > 0.0 { 1.0 / seconds } else { 0.0 };
        ops * OPERAND_BYTES as f64 / (1024.0 * 1024.0)
    }
}

/// Times `iterations` multiplications of two fixed operands.
///
/// # Errors
/// [`HcError::InvalidData`] if `iterations` is zero.
///
/// # Examples
///
/// ```
/// use hypercomplex::perf::benchmark;
///
/// let stats = benchmark(1_000).unwrap();
/// assert_eq!(stats.bytes_processed, 32_000);
/// assert!(stats.operations_per_second > 0);
/// ```
pub fn benchmark(iterations: usize) -> Result<PerfStats, HcError> {
    if iterations == 0 {
        return Err(HcError::InvalidData);
    }

    let a = Quaternion::from_array(LHS);
    let b = Quaternion::from_array(RHS);

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(black_box(&a).multiply(black_box(&b)));
    }
    let elapsed_ns = start.elapsed().as_nanos().max(1) as f64;

    let iters = iterations as f64;
    Ok(PerfStats {
        operations_per_second: (iters * 1e9 / elapsed_ns) as u64,
        average_latency_ns: elapsed_ns / iters,
        bytes_processed: (iterations as u64).saturating_mul(OPERAND_BYTES as u64),
    })
}
