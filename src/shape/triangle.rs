use nalgebra::Point2;

use crate::misc::FloatingPoint;

use super::ShapeMetrics;

/// Area and centroid of the right triangle spanned by `p1` and `p2`
///
/// The third vertex is `(p1.y, p2.x)`, the two coordinates taken crosswise,
/// which is the strip used when integrating a monotone offset curve.
/// The area is half the bounding rectangle of `p1` and `p2` and
/// the centroid is the mean of the three vertices.
/// # Example
/// ```
/// use bonjean::prelude::*;
/// use nalgebra::Point2;
/// let tri = triangle_metrics(&Point2::new(1., 1.), &Point2::new(2., 2.));
/// assert_eq!(tri.area(), 0.5);
/// approx::assert_relative_eq!(tri.centroid().x, 4. / 3.);
/// approx::assert_relative_eq!(tri.centroid().y, 5. / 3.);
/// ```
pub fn triangle_metrics<T: FloatingPoint>(p1: &Point2<T>, p2: &Point2<T>) -> ShapeMetrics<T> {
    let p3 = Point2::new(p1.y, p2.x);
    let width = (p1.x - p2.x).abs();
    let height = (p1.y - p2.y).abs();
    let area = width * height / T::two();
    let centroid = (p1.coords + p2.coords + p3.coords) / T::three();
    ShapeMetrics::new(area, centroid.into())
}
