//! Concrete shapes, the `Area` capability, and the closed `Shape` sum type.
//!
//! Purpose
//! - `Area` trait objects give per-call dynamic dispatch over a `Vec<Box<dyn Area>>`.
//! - `Shape` re-expresses the same four kinds as an enum with payloads, so the
//!   compiler sees the closed variant set and can inline every arm.
//!
//! Code cross-refs: `union::ShapeUnion` (fixed-layout encoding of the same kinds).

mod types;

pub use types::{Area, Circle, Rectangle, Shape, Square, Triangle};

#[cfg(test)]
mod tests;
