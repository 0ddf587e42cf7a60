//! Total checking for the eight runners.
//!
//! A total that drifts from the reference beyond tolerance, or a dataset that
//! is not the workload the config describes, is a failed validation
//! (`ValidationError`), never a panic.

use crate::cfg::BenchCfg;
use crate::dataset::Dataset;
use crate::sum::{run, LoopShape, Strategy};
use std::fmt;

/// `|a - b| < eps`. NaN never compares equal.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Reasons a validation run fails.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValidationError {
    /// A runner whose total diverged from the expected value.
    TotalMismatch {
        strategy: Strategy,
        loop_shape: LoopShape,
        expected: f64,
        actual: f64,
    },
    /// The dataset length differs from `BenchCfg::count`.
    CountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TotalMismatch {
                strategy,
                loop_shape,
                expected,
                actual,
            } => write!(
                f,
                "{strategy}/{loop_shape} total {actual} differs from expected {expected} by {:e}",
                (actual - expected).abs()
            ),
            Self::CountMismatch { expected, actual } => {
                write!(f, "dataset has {actual} shapes, config expects {expected}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// One validated runner total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunReport {
    pub strategy: Strategy,
    pub loop_shape: LoopShape,
    pub total: f64,
}

/// Reference total: dynamic dispatch, rolled, ascending index.
pub fn reference_total(ds: &Dataset) -> f64 {
    run(Strategy::Dynamic, LoopShape::Rolled, ds)
}

/// Run one combination and compare against `expected`.
pub fn check(
    ds: &Dataset,
    strategy: Strategy,
    loop_shape: LoopShape,
    expected: f64,
    eps: f64,
) -> Result<RunReport, ValidationError> {
    let total = run(strategy, loop_shape, ds);
    if !approx_eq(total, expected, eps) {
        tracing::warn!(%strategy, %loop_shape, total, expected, "total mismatch");
        return Err(ValidationError::TotalMismatch {
            strategy,
            loop_shape,
            expected,
            actual: total,
        });
    }
    tracing::debug!(%strategy, %loop_shape, total, "total ok");
    Ok(RunReport {
        strategy,
        loop_shape,
        total,
    })
}

/// Check all eight combinations against `expected`; stops at the first mismatch.
///
/// Fails with `CountMismatch` before running anything if `ds` is not
/// `cfg.count` shapes long.
pub fn validate_all(
    ds: &Dataset,
    expected: f64,
    cfg: BenchCfg,
) -> Result<Vec<RunReport>, ValidationError> {
    if ds.len() != cfg.count {
        tracing::warn!(len = ds.len(), count = cfg.count, "dataset size mismatch");
        return Err(ValidationError::CountMismatch {
            expected: cfg.count,
            actual: ds.len(),
        });
    }
    let mut reports = Vec::with_capacity(Strategy::ALL.len() * LoopShape::ALL.len());
    for strategy in Strategy::ALL {
        for loop_shape in LoopShape::ALL {
            reports.push(check(ds, strategy, loop_shape, expected, cfg.eps)?);
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::SUM_EPS;

    #[test]
    fn approx_eq_rejects_nan_and_far_values() {
        assert!(approx_eq(1.0, 1.0 + 5e-8, SUM_EPS));
        assert!(!approx_eq(1.0, 1.0 + 2e-7, SUM_EPS));
        assert!(!approx_eq(f64::NAN, f64::NAN, SUM_EPS));
    }

    #[test]
    fn validate_all_reports_every_combination() {
        let ds = Dataset::generate(123);
        let expected = reference_total(&ds);
        let cfg = BenchCfg {
            count: 123,
            ..BenchCfg::default()
        };
        let reports = validate_all(&ds, expected, cfg).unwrap();
        assert_eq!(reports.len(), 8);
        assert!(reports.iter().all(|r| approx_eq(r.total, expected, SUM_EPS)));
    }

    #[test]
    fn validate_all_rejects_a_different_workload_size() {
        let ds = Dataset::generate(40);
        let cfg = BenchCfg {
            count: 3,
            ..BenchCfg::default()
        };
        let err = validate_all(&ds, reference_total(&ds), cfg).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CountMismatch {
                expected: 3,
                actual: 40,
            }
        );
        assert!(err.to_string().contains("40"));
    }

    #[test]
    fn mismatch_is_an_error_not_a_panic() {
        let ds = Dataset::generate(16);
        let wrong = reference_total(&ds) + 1.0;
        let err = check(&ds, Strategy::Table, LoopShape::Unrolled, wrong, SUM_EPS)
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TotalMismatch {
                strategy: Strategy::Table,
                loop_shape: LoopShape::Unrolled,
                ..
            }
        ));
        assert!(err.to_string().starts_with("table/unrolled8"));
    }
}
