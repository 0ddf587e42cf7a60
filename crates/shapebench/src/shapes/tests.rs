use super::*;
use crate::union::ShapeTag;
use std::f64::consts::PI;

#[test]
fn formulas_on_literal_cases() {
    assert_eq!(Square { side: 5.0 }.area(), 25.0);
    assert_eq!(
        Rectangle {
            width: 3.0,
            height: 4.0,
        }
        .area(),
        12.0
    );
    assert_eq!(
        Triangle {
            width: 6.0,
            height: 4.0,
        }
        .area(),
        12.0
    );
    let c = Circle { radius: 2.0 }.area();
    assert!((c - 12.566_370_614).abs() < 1e-9);
    assert!((c - 4.0 * PI).abs() < 1e-12);
}

#[test]
fn trait_objects_resolve_per_element() {
    let shapes: Vec<Box<dyn Area>> = vec![
        Box::new(Square { side: 2.0 }),
        Box::new(Circle { radius: 1.0 }),
        Box::new(Triangle {
            width: 2.0,
            height: 3.0,
        }),
    ];
    let areas: Vec<f64> = shapes.iter().map(|s| s.area()).collect();
    assert_eq!(areas[0], 4.0);
    assert!((areas[1] - PI).abs() < 1e-12);
    assert_eq!(areas[2], 3.0);
}

#[test]
fn enum_matches_payload_and_boxed_form() {
    let cases: [Shape; 4] = [
        Square { side: 7.0 }.into(),
        Rectangle {
            width: 2.0,
            height: 9.0,
        }
        .into(),
        Triangle {
            width: 5.0,
            height: 3.0,
        }
        .into(),
        Circle { radius: 3.0 }.into(),
    ];
    for shape in cases {
        // Same formula either way; bit-exact.
        assert_eq!(shape.area(), shape.boxed().area());
    }
}

#[test]
fn kind_is_never_invalid() {
    assert_eq!(Shape::from(Square { side: 1.0 }).kind(), ShapeTag::Square);
    assert_eq!(
        Shape::from(Rectangle {
            width: 1.0,
            height: 2.0,
        })
        .kind(),
        ShapeTag::Rectangle
    );
    assert_eq!(
        Shape::from(Triangle {
            width: 1.0,
            height: 2.0,
        })
        .kind(),
        ShapeTag::Triangle
    );
    assert_eq!(Shape::from(Circle { radius: 1.0 }).kind(), ShapeTag::Circle);
}
