//! Deterministic dataset generator.
//!
//! Purpose
//! - Build the same N shapes in three index-aligned representations:
//!   trait objects, the closed `Shape` enum, and `ShapeUnion`.
//! - Element `i` depends on `i` alone: kind from `i mod 4`, every dimension
//!   from `((i*i) mod 100) + 1`. No randomness, no external input.
//!
//! `Dataset::shuffled` is the one seeded variant: a single permutation applied
//! to all three sequences, so index alignment still holds but the kinds no
//! longer cycle (defeats the branch predictor in the `Branch` strategy).

use crate::cfg::REFERENCE_COUNT;
use crate::shapes::{Area, Circle, Rectangle, Shape, Square, Triangle};
use crate::union::{ShapeTag, ShapeUnion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Dimension of element `i`: `((i*i) mod 100) + 1`, always in `1..=100`.
///
/// Reduces `i` first; `(i*i) mod 100 == ((i mod 100)^2) mod 100` and this form
/// cannot overflow.
#[inline]
pub fn dimension(i: usize) -> f64 {
    let r = i % 100;
    ((r * r) % 100 + 1) as f64
}

/// Kind of element `i`: 0→Square, 1→Rectangle, 2→Triangle, 3→Circle.
#[inline]
pub fn kind_for(i: usize) -> ShapeTag {
    match i % 4 {
        0 => ShapeTag::Square,
        1 => ShapeTag::Rectangle,
        2 => ShapeTag::Triangle,
        _ => ShapeTag::Circle,
    }
}

/// The logical shape at index `i`.
pub fn shape_at(i: usize) -> Shape {
    match kind_for(i) {
        ShapeTag::Square => Square { side: dimension(i) }.into(),
        ShapeTag::Rectangle => Rectangle {
            width: dimension(i),
            height: dimension(i),
        }
        .into(),
        ShapeTag::Triangle => Triangle {
            width: dimension(i),
            height: dimension(i),
        }
        .into(),
        _ => Circle {
            radius: dimension(i),
        }
        .into(),
    }
}

/// Three index-aligned views of the same shapes. Immutable once built.
pub struct Dataset {
    dynamic: Vec<Box<dyn Area>>,
    closed: Vec<Shape>,
    unions: Vec<ShapeUnion>,
}

impl Dataset {
    /// Generate `n` shapes in ascending index order.
    pub fn generate(n: usize) -> Self {
        let closed: Vec<Shape> = (0..n).map(shape_at).collect();
        let ds = Self::from_shapes(closed);
        tracing::debug!(count = n, "dataset generated");
        ds
    }

    /// The reference workload (`REFERENCE_COUNT` shapes).
    pub fn reference() -> Self {
        Self::generate(REFERENCE_COUNT)
    }

    /// Generate `n` shapes and permute them with one seeded shuffle.
    pub fn shuffled(n: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut closed: Vec<Shape> = (0..n).map(shape_at).collect();
        closed.shuffle(&mut rng);
        let ds = Self::from_shapes(closed);
        tracing::debug!(count = n, seed, "shuffled dataset generated");
        ds
    }

    fn from_shapes(closed: Vec<Shape>) -> Self {
        let dynamic = closed.iter().map(|s| s.boxed()).collect();
        let unions = closed.iter().map(|&s| ShapeUnion::from(s)).collect();
        Self {
            dynamic,
            closed,
            unions,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.closed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.closed.is_empty()
    }

    #[inline]
    pub fn dynamic(&self) -> &[Box<dyn Area>] {
        &self.dynamic
    }

    #[inline]
    pub fn closed(&self) -> &[Shape] {
        &self.closed
    }

    #[inline]
    pub fn unions(&self) -> &[ShapeUnion] {
        &self.unions
    }

    /// Logical shape at index `i`, if in range.
    pub fn describe(&self, i: usize) -> Option<Shape> {
        self.closed.get(i).copied()
    }
}

impl std::fmt::Debug for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dataset")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
