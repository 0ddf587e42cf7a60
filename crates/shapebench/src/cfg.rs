//! Fixed constants for the reference workload (internal defaults).
//!
//! Policy
//! - Defaults are fixed constants. `BenchCfg` bundles the two a caller may
//!   reasonably vary (size, tolerance) without touching call sites.

/// Absolute tolerance when comparing totals produced by different loops.
pub const SUM_EPS: f64 = 1e-7;
/// Number of shapes in the reference workload.
pub const REFERENCE_COUNT: usize = 10_000;
/// Width of the manually unrolled loops (independent accumulators).
pub const UNROLL: usize = 8;
/// Total area of `Dataset::generate(REFERENCE_COUNT)`, rolled, ascending index.
pub const REFERENCE_TOTAL: f64 = 35_997_907.637_563_91;

/// Workload configuration passed to the validator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchCfg {
    pub count: usize,
    pub eps: f64,
}

impl Default for BenchCfg {
    fn default() -> Self {
        Self {
            count: REFERENCE_COUNT,
            eps: SUM_EPS,
        }
    }
}
