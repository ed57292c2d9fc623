use nalgebra::{center, Point2};

use crate::{error::BonjeanError, misc::FloatingPoint};

use super::ShapeMetrics;

/// Area and centroid of the axis-aligned rectangle with opposite corners `p1` and `p2`
/// Fails with `DegenerateShape` when the corners span no area
/// # Example
/// ```
/// use bonjean::prelude::*;
/// use nalgebra::Point2;
/// let rect = rectangle_metrics(&Point2::new(2., 1.), &Point2::new(3., 3.)).unwrap();
/// assert_eq!(rect.area(), 2.);
/// assert_eq!(rect.centroid(), &Point2::new(2.5, 2.));
/// assert_eq!(
///     rectangle_metrics(&Point2::new(2., 1.), &Point2::new(2., 2.)),
///     Err(BonjeanError::DegenerateShape)
/// );
/// ```
pub fn rectangle_metrics<T: FloatingPoint>(
    p1: &Point2<T>,
    p2: &Point2<T>,
) -> Result<ShapeMetrics<T>, BonjeanError> {
    let width = (p1.x - p2.x).abs();
    let height = (p1.y - p2.y).abs();
    let area = width * height;
    if area.is_zero() {
        return Err(BonjeanError::DegenerateShape);
    }
    Ok(ShapeMetrics::new(area, center(p1, p2)))
}
