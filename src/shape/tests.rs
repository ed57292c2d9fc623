use approx::assert_relative_eq;
use nalgebra::Point2;

use crate::error::BonjeanError;

use super::*;

#[test]
fn rectangle_with_shared_horizontal_coordinate_is_degenerate() {
    let rect = rectangle_metrics(&Point2::new(2., 1.), &Point2::new(2., 2.));
    assert_eq!(rect, Err(BonjeanError::DegenerateShape));
}

#[test]
fn rectangle_with_shared_vertical_coordinate_is_degenerate() {
    let rect = rectangle_metrics(&Point2::new(1., 3.), &Point2::new(4., 3.));
    assert_eq!(rect, Err(BonjeanError::DegenerateShape));
}

#[test]
fn rectangle_area_and_centroid() {
    let rect = rectangle_metrics(&Point2::new(2., 1.), &Point2::new(3., 3.)).unwrap();
    assert_relative_eq!(rect.area(), 2.);
    assert_relative_eq!(rect.centroid().x, 2.5);
    assert_relative_eq!(rect.centroid().y, 2.);

    // corner order does not matter
    let flipped = rectangle_metrics(&Point2::new(3., 3.), &Point2::new(2., 1.)).unwrap();
    assert_eq!(rect, flipped);
}

#[test]
fn triangle_uses_crosswise_vertex() {
    let tri = triangle_metrics(&Point2::new(1., 1.), &Point2::new(2., 2.));
    assert_relative_eq!(tri.area(), 0.5);
    assert_relative_eq!(tri.centroid().x, 4. / 3.);
    assert_relative_eq!(tri.centroid().y, 5. / 3.);

    let tri = triangle_metrics(&Point2::new(2., 1.), &Point2::new(1., 2.));
    assert_relative_eq!(tri.area(), 0.5);
    assert_relative_eq!(tri.centroid().x, 4. / 3.);
    assert_relative_eq!(tri.centroid().y, 4. / 3.);
}

#[test]
fn trapezium_widening_upwards() {
    let trap = trapezium_metrics(&Point2::new(1., 1.), &Point2::new(2., 2.)).unwrap();
    assert_relative_eq!(trap.area(), 1.5);
    assert_relative_eq!(trap.centroid().x, 7. / 9.);
    assert_relative_eq!(trap.centroid().y, 14. / 9.);
}

#[test]
fn trapezium_narrowing_upwards() {
    let trap = trapezium_metrics(&Point2::new(2., 1.), &Point2::new(1., 2.)).unwrap();
    assert_relative_eq!(trap.area(), 1.5);
    assert_relative_eq!(trap.centroid().x, 7. / 9.);
    assert_relative_eq!(trap.centroid().y, 13. / 9.);
}

#[test]
fn trapezium_area_matches_decomposition() {
    let p1 = Point2::new(1.25, 0.5);
    let p2 = Point2::new(3.75, 2.);
    let trap = trapezium_metrics(&p1, &p2).unwrap();
    let rect = rectangle_metrics(&Point2::new(0., p1.y), &Point2::new(p1.x, p2.y)).unwrap();
    let tri = triangle_metrics(&p1, &p2);
    assert_relative_eq!(trap.area(), rect.area() + tri.area(), epsilon = 1e-12);
}

#[test]
fn trapezium_from_keel() {
    // a section starting on the centreline has no rectangular part
    let trap = trapezium_metrics(&Point2::new(0., 0.), &Point2::new(2., 1.)).unwrap();
    assert_relative_eq!(trap.area(), 1.);
    assert_relative_eq!(trap.centroid().x, 2. / 3.);
    assert_relative_eq!(trap.centroid().y, 1.);
}

#[test]
fn vertical_side_is_a_rectangle() {
    let trap = trapezium_metrics(&Point2::new(3., 0.), &Point2::new(3., 2.)).unwrap();
    assert_relative_eq!(trap.area(), 6.);
    assert_relative_eq!(trap.centroid().x, 1.5);
    assert_relative_eq!(trap.centroid().y, 1.);
}

#[test]
fn flat_trapezium_is_degenerate() {
    let trap = trapezium_metrics(&Point2::new(1., 2.), &Point2::new(3., 2.));
    assert_eq!(trap, Err(BonjeanError::DegenerateShape));
    let trap = trapezium_metrics(&Point2::new(0., 1.), &Point2::new(0., 2.));
    assert_eq!(trap, Err(BonjeanError::DegenerateShape));
}

#[test]
fn combine_weights_by_area() {
    let a = ShapeMetrics::new(3., Point2::new(1., 1.));
    let b = ShapeMetrics::new(1., Point2::new(5., -3.));
    let c = a.combine(&b);
    assert_relative_eq!(c.area(), 4.);
    assert_relative_eq!(c.centroid().x, 2.);
    assert_relative_eq!(c.centroid().y, 0.);
}

#[test]
fn combine_empty_shapes() {
    let a = ShapeMetrics::empty(Point2::new(1., 1.));
    let b = ShapeMetrics::empty(Point2::new(2., 4.));
    let c = a.combine(&b);
    assert_eq!(c.area(), 0.);
    assert_eq!(c.centroid(), &Point2::new(2., 4.));

    let d = ShapeMetrics::new(2., Point2::new(7., 7.));
    assert_eq!(a.combine(&d), d);
}

#[test]
fn single_precision() {
    let trap = trapezium_metrics(&Point2::new(1_f32, 1.), &Point2::new(2., 2.)).unwrap();
    assert_relative_eq!(trap.area(), 1.5_f32);
    assert_relative_eq!(trap.centroid().x, 7. / 9., epsilon = 1e-6);
}
