//! Dispatch-strategy micro-benchmarks over a homogeneous shape collection.
//!
//! Four ways to compute the total surface area of the same shapes:
//! - `Dynamic`: trait objects (`Box<dyn Area>`), one virtual call per element.
//! - `Enum`: closed sum type `Shape`, exhaustive `match`.
//! - `Branch`: fixed-layout `ShapeUnion`, `match` on the tag.
//! - `Table`: fixed-layout `ShapeUnion`, coefficient lookup indexed by the tag.
//!
//! Each strategy has a rolled and an unrolled-by-8 summation loop (see `sum`).
//! The timing driver lives in `benches/` (Criterion); this crate only exposes
//! pure, repeatable computations plus a validator for their totals.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod cfg;
pub mod dataset;
pub mod shapes;
pub mod sum;
pub mod union;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for benches and examples.
pub mod prelude {
    pub use crate::cfg::{BenchCfg, REFERENCE_COUNT, REFERENCE_TOTAL, SUM_EPS};
    pub use crate::dataset::{dimension, kind_for, Dataset};
    pub use crate::shapes::{Area, Circle, Rectangle, Shape, Square, Triangle};
    pub use crate::sum::{run, LoopShape, Strategy};
    pub use crate::union::{area_by_table, ShapeTag, ShapeUnion, TagError, COEFFICIENTS};
    pub use crate::validate::{approx_eq, validate_all, RunReport, ValidationError};
}
