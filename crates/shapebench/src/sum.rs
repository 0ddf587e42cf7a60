//! Summation runners: four strategies × {rolled, unrolled-by-8}.
//!
//! - Rolled: one accumulator, ascending index. Reproducible rounding.
//! - Unrolled: `UNROLL` independent accumulators over `chunks_exact`, summed in
//!   lane order, then a scalar tail. Addition order differs from rolled, so the
//!   two agree only within `SUM_EPS`.
//!
//! The eight named runners are what a timing driver calls; `run` dispatches by
//! `(Strategy, LoopShape)` for drivers that iterate over all combinations.

use crate::cfg::UNROLL;
use crate::dataset::Dataset;
use crate::union::area_by_table;
use std::fmt;

/// Single-accumulator reduction in ascending index order.
#[inline(always)]
pub fn sum_rolled<T, F>(items: &[T], area: F) -> f64
where
    F: Fn(&T) -> f64,
{
    let mut sum = 0.0;
    for item in items {
        sum += area(item);
    }
    sum
}

/// Reduction with `UNROLL` lockstep accumulators plus a scalar tail.
#[inline(always)]
pub fn sum_unrolled8<T, F>(items: &[T], area: F) -> f64
where
    F: Fn(&T) -> f64,
{
    let mut acc = [0.0f64; UNROLL];
    let blocks = items.chunks_exact(UNROLL);
    let tail = blocks.remainder();
    for block in blocks {
        acc[0] += area(&block[0]);
        acc[1] += area(&block[1]);
        acc[2] += area(&block[2]);
        acc[3] += area(&block[3]);
        acc[4] += area(&block[4]);
        acc[5] += area(&block[5]);
        acc[6] += area(&block[6]);
        acc[7] += area(&block[7]);
    }
    let mut sum = acc[0] + acc[1] + acc[2] + acc[3] + acc[4] + acc[5] + acc[6] + acc[7];
    for item in tail {
        sum += area(item);
    }
    sum
}

pub fn dyn_rolled(ds: &Dataset) -> f64 {
    sum_rolled(ds.dynamic(), |s| s.area())
}

pub fn dyn_unrolled(ds: &Dataset) -> f64 {
    sum_unrolled8(ds.dynamic(), |s| s.area())
}

pub fn enum_rolled(ds: &Dataset) -> f64 {
    sum_rolled(ds.closed(), |s| s.area())
}

pub fn enum_unrolled(ds: &Dataset) -> f64 {
    sum_unrolled8(ds.closed(), |s| s.area())
}

pub fn branch_rolled(ds: &Dataset) -> f64 {
    sum_rolled(ds.unions(), |su| su.area())
}

pub fn branch_unrolled(ds: &Dataset) -> f64 {
    sum_unrolled8(ds.unions(), |su| su.area())
}

pub fn table_rolled(ds: &Dataset) -> f64 {
    sum_rolled(ds.unions(), area_by_table)
}

pub fn table_unrolled(ds: &Dataset) -> f64 {
    sum_unrolled8(ds.unions(), area_by_table)
}

/// How each element's area is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `Box<dyn Area>` virtual call.
    Dynamic,
    /// `match` on the closed `Shape` enum.
    Enum,
    /// `match` on the `ShapeUnion` tag.
    Branch,
    /// `COEFFICIENTS[tag] * width * height`.
    Table,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Dynamic,
        Strategy::Enum,
        Strategy::Branch,
        Strategy::Table,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Dynamic => "dynamic",
            Strategy::Enum => "enum",
            Strategy::Branch => "branch",
            Strategy::Table => "table",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopShape {
    Rolled,
    Unrolled,
}

impl LoopShape {
    pub const ALL: [LoopShape; 2] = [LoopShape::Rolled, LoopShape::Unrolled];

    pub fn name(self) -> &'static str {
        match self {
            LoopShape::Rolled => "rolled",
            LoopShape::Unrolled => "unrolled8",
        }
    }
}

impl fmt::Display for LoopShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Total area of `ds` using `strategy` and `shape`.
pub fn run(strategy: Strategy, shape: LoopShape, ds: &Dataset) -> f64 {
    runner(strategy, shape)(ds)
}

/// The named runner for a combination, as a plain function pointer.
pub fn runner(strategy: Strategy, shape: LoopShape) -> fn(&Dataset) -> f64 {
    match (strategy, shape) {
        (Strategy::Dynamic, LoopShape::Rolled) => dyn_rolled,
        (Strategy::Dynamic, LoopShape::Unrolled) => dyn_unrolled,
        (Strategy::Enum, LoopShape::Rolled) => enum_rolled,
        (Strategy::Enum, LoopShape::Unrolled) => enum_unrolled,
        (Strategy::Branch, LoopShape::Rolled) => branch_rolled,
        (Strategy::Branch, LoopShape::Unrolled) => branch_unrolled,
        (Strategy::Table, LoopShape::Rolled) => table_rolled,
        (Strategy::Table, LoopShape::Unrolled) => table_unrolled,
    }
}
