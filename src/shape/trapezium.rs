use nalgebra::{Point2, Vector2};

use crate::{error::BonjeanError, misc::FloatingPoint};

use super::{rectangle_metrics, triangle_metrics, ShapeMetrics};

/// Area and centroid of the trapezium between the centreline (x = 0) and the segment `p1`-`p2`
///
/// The trapezium is split into a rectangle reaching out to the smaller horizontal
/// coordinate and the right triangle covering the remaining strip.
/// The area is taken from the closed form `(|x1| + |x2|) * |y1 - y2| / 2`
/// and the centroid from the composite centroid of both parts.
/// Fails with `DegenerateShape` when the closed form area is zero.
/// # Example
/// ```
/// use bonjean::prelude::*;
/// use nalgebra::Point2;
/// let trap = trapezium_metrics(&Point2::new(1., 1.), &Point2::new(2., 2.)).unwrap();
/// assert_eq!(trap.area(), 1.5);
/// approx::assert_relative_eq!(trap.centroid().x, 7. / 9.);
/// approx::assert_relative_eq!(trap.centroid().y, 14. / 9.);
/// ```
pub fn trapezium_metrics<T: FloatingPoint>(
    p1: &Point2<T>,
    p2: &Point2<T>,
) -> Result<ShapeMetrics<T>, BonjeanError> {
    let height = (p1.y - p2.y).abs();
    let area = (p1.x.abs() + p2.x.abs()) * height / T::two();

    // the narrower side bounds the rectangle, projected onto the other side's level
    let (narrow, wide) = if p1.x <= p2.x { (p1, p2) } else { (p2, p1) };
    let corner = Point2::new(narrow.x, wide.y);
    let axis = Point2::new(T::zero(), narrow.y);

    let rectangle_moment = match rectangle_metrics(&axis, &corner) {
        Ok(rect) => rect.first_moment(),
        Err(BonjeanError::DegenerateShape) => Vector2::zeros(),
        Err(e) => return Err(e),
    };
    let triangle = triangle_metrics(p1, p2);

    ShapeMetrics::from_moment(area, rectangle_moment + triangle.first_moment())
        .ok_or(BonjeanError::DegenerateShape)
}
