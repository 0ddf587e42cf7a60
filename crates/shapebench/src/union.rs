//! Fixed-layout tagged union and the two tag-driven area strategies.
//!
//! Encoding
//! - `tag` selects the formula; `width`/`height` are reused per kind.
//! - Square, Circle: `width` holds side/radius and `height` duplicates it.
//! - Rectangle, Triangle: independent dimensions.
//!
//! Invalid tag
//! - `ShapeUnion::area` (branch) panics: an Invalid element is a data defect.
//! - `area_by_table` stays branch-free; the Invalid slot of `COEFFICIENTS` is NaN,
//!   so an Invalid element poisons every total it enters instead of adding 0.
//! - `ShapeUnion::checked_area` reports `TagError::Invalid` for validation paths.

use crate::shapes::Shape;
use std::f64::consts::PI;
use std::fmt;

/// Shape discriminant. Declaration order is the index into `COEFFICIENTS`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeTag {
    #[default]
    Invalid = 0,
    Square = 1,
    Rectangle = 2,
    Triangle = 3,
    Circle = 4,
}

impl ShapeTag {
    /// The four tags that may appear in generated data.
    pub const VALID: [ShapeTag; 4] = [
        ShapeTag::Square,
        ShapeTag::Rectangle,
        ShapeTag::Triangle,
        ShapeTag::Circle,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for ShapeTag {
    type Error = TagError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(ShapeTag::Invalid),
            1 => Ok(ShapeTag::Square),
            2 => Ok(ShapeTag::Rectangle),
            3 => Ok(ShapeTag::Triangle),
            4 => Ok(ShapeTag::Circle),
            _ => Err(TagError::OutOfRange { raw }),
        }
    }
}

/// Tag defects surfaced by the checked paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagError {
    /// `ShapeTag::Invalid` where a real shape was required.
    Invalid,
    /// Raw discriminant outside `0..=4`.
    OutOfRange { raw: u8 },
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::Invalid => write!(f, "shape tag is Invalid (uninitialized union?)"),
            TagError::OutOfRange { raw } => write!(f, "shape tag {raw} is out of range 0..=4"),
        }
    }
}

impl std::error::Error for TagError {}

/// Coefficient per tag: `COEFFICIENTS[tag] * width * height == area`.
pub const COEFFICIENTS: [f64; 5] = [f64::NAN, 1.0, 1.0, 0.5, PI];

/// One shape as `{tag, width, height}`. `Default` yields the Invalid sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShapeUnion {
    pub tag: ShapeTag,
    pub width: f64,
    pub height: f64,
}

impl ShapeUnion {
    #[inline]
    pub fn new(tag: ShapeTag, width: f64, height: f64) -> Self {
        Self { tag, width, height }
    }

    /// Area by branching on the tag.
    ///
    /// Panics on `ShapeTag::Invalid`.
    #[inline]
    pub fn area(&self) -> f64 {
        match self.tag {
            ShapeTag::Square => self.width * self.width,
            ShapeTag::Rectangle => self.width * self.height,
            ShapeTag::Triangle => 0.5 * self.width * self.height,
            ShapeTag::Circle => PI * self.width * self.width,
            ShapeTag::Invalid => panic!("area requested for a ShapeUnion with an Invalid tag"),
        }
    }

    /// Non-panicking variant of `area`.
    pub fn checked_area(&self) -> Result<f64, TagError> {
        match self.tag {
            ShapeTag::Invalid => Err(TagError::Invalid),
            _ => Ok(self.area()),
        }
    }
}

/// Area by coefficient lookup; no branch on the tag.
#[inline]
pub fn area_by_table(su: &ShapeUnion) -> f64 {
    COEFFICIENTS[su.tag.index()] * su.width * su.height
}

impl From<Shape> for ShapeUnion {
    fn from(shape: Shape) -> Self {
        let tag = shape.kind();
        match shape {
            Shape::Square(s) => Self::new(tag, s.side, s.side),
            Shape::Rectangle(r) => Self::new(tag, r.width, r.height),
            Shape::Triangle(t) => Self::new(tag, t.width, t.height),
            Shape::Circle(c) => Self::new(tag, c.radius, c.radius),
        }
    }
}
