//! Shape value types and their planar area formulas.

use crate::union::ShapeTag;
use std::f64::consts::PI;

/// Anything with a planar surface area.
pub trait Area {
    fn area(&self) -> f64;
}

/// Square with side length `side`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    pub side: f64,
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

/// Triangle given by base `width` and `height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Area for Square {
    #[inline]
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl Area for Rectangle {
    #[inline]
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Area for Triangle {
    #[inline]
    fn area(&self) -> f64 {
        0.5 * self.width * self.height
    }
}

impl Area for Circle {
    #[inline]
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

/// Closed set of shapes; payloads are the concrete value types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Square(Square),
    Rectangle(Rectangle),
    Triangle(Triangle),
    Circle(Circle),
}

impl Shape {
    #[inline]
    pub fn area(&self) -> f64 {
        match self {
            Shape::Square(s) => s.area(),
            Shape::Rectangle(r) => r.area(),
            Shape::Triangle(t) => t.area(),
            Shape::Circle(c) => c.area(),
        }
    }

    /// Tag of this shape in the union encoding. Never `ShapeTag::Invalid`.
    #[inline]
    pub fn kind(&self) -> ShapeTag {
        match self {
            Shape::Square(_) => ShapeTag::Square,
            Shape::Rectangle(_) => ShapeTag::Rectangle,
            Shape::Triangle(_) => ShapeTag::Triangle,
            Shape::Circle(_) => ShapeTag::Circle,
        }
    }

    /// Box the payload as a trait object (the dynamic-dispatch representation).
    pub fn boxed(self) -> Box<dyn Area> {
        match self {
            Shape::Square(s) => Box::new(s),
            Shape::Rectangle(r) => Box::new(r),
            Shape::Triangle(t) => Box::new(t),
            Shape::Circle(c) => Box::new(c),
        }
    }
}

impl Area for Shape {
    #[inline]
    fn area(&self) -> f64 {
        Shape::area(self)
    }
}

impl From<Square> for Shape {
    fn from(s: Square) -> Self {
        Shape::Square(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}
