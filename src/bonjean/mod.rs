pub mod bonjean_option;
pub mod bonjean_result;
pub use bonjean_option::*;
pub use bonjean_result::*;

use std::iter;

use itertools::Itertools;
use log::{debug, warn};
use nalgebra::{center, Point2};

use crate::{
    curve::pair_with_ordinates,
    error::BonjeanError,
    integrate::cumulative_sum,
    misc::FloatingPoint,
    shape::{trapezium_metrics, ShapeMetrics},
};

/// Compute the Bonjean curves of a section with the default option
/// `points` are the offsets of the section ordered by waterline, `x` being the half breadth and `y` the height.
/// # Example
/// ```
/// use bonjean::prelude::*;
/// use nalgebra::Point2;
/// let points = vec![
///     Point2::new(1., 2.),
///     Point2::new(2., 3.),
///     Point2::new(3., 4.),
/// ];
/// let bonjean = compute_bonjean(&points).unwrap();
/// assert_eq!(bonjean.area().values(), vec![0., 1.5, 4.]);
/// assert_eq!(bonjean.area().ordinates(), vec![2., 3., 4.]);
/// ```
pub fn compute_bonjean<T: FloatingPoint>(
    points: &[Point2<T>],
) -> Result<BonjeanResult<T>, BonjeanError> {
    compute_bonjean_with_option(points, &BonjeanOption::default())
}

/// Compute the Bonjean curves of a section
///
/// Each pair of adjacent points bounds a trapezium against the centreline.
/// The centroid of the section is folded from bottom to top, weighting the running centroid
/// by the area accumulated so far and each new trapezium by its own area.
/// The moment increment of a segment is the folded centroid times the segment area,
/// and the three increment sequences are accumulated and paired with the point heights.
///
/// Points are taken in the given order, they are never sorted nor deduplicated.
pub fn compute_bonjean_with_option<T: FloatingPoint>(
    points: &[Point2<T>],
    option: &BonjeanOption<T>,
) -> Result<BonjeanResult<T>, BonjeanError> {
    if points.len() < 2 {
        return Err(BonjeanError::InsufficientPoints {
            count: points.len(),
        });
    }

    let ordinates = points.iter().map(|p| p.y).collect_vec();

    let mut degenerate_segments = vec![];
    let mut segments = Vec::with_capacity(points.len() - 1);
    for (index, (p1, p2)) in points.iter().tuple_windows().enumerate() {
        match trapezium_metrics(p1, p2) {
            Ok(metrics) if !metrics.area().is_negligible(option.zero_tolerance()) => {
                segments.push(metrics);
            }
            Ok(_) | Err(BonjeanError::DegenerateShape) => match option.degenerate_policy() {
                DegeneratePolicy::ZeroFill => {
                    warn!(
                        "segment {} spans no area, zero filled at ({:?}, {:?})",
                        index,
                        (p1.x + p2.x) / T::two(),
                        (p1.y + p2.y) / T::two()
                    );
                    degenerate_segments.push(index);
                    segments.push(ShapeMetrics::empty(center(p1, p2)));
                }
                DegeneratePolicy::Reject => {
                    return Err(BonjeanError::DegenerateSegment { index });
                }
            },
            Err(e) => return Err(e),
        }
    }

    let (horizontal, vertical) = moment_increments(&segments);
    let areas = iter::once(T::zero())
        .chain(segments.iter().map(|s| s.area()))
        .collect_vec();

    let area = pair_with_ordinates(&cumulative_sum(&areas), &ordinates)?;
    let horizontal_moment = pair_with_ordinates(&cumulative_sum(&horizontal), &ordinates)?;
    let vertical_moment = pair_with_ordinates(&cumulative_sum(&vertical), &ordinates)?;

    debug!(
        "bonjean curves over {} points, {} degenerate segments",
        points.len(),
        degenerate_segments.len()
    );

    Ok(BonjeanResult::new(
        area,
        horizontal_moment,
        vertical_moment,
        degenerate_segments,
    ))
}

/// Moment increments of each segment about both axes, led by a zero seed
fn moment_increments<T: FloatingPoint>(segments: &[ShapeMetrics<T>]) -> (Vec<T>, Vec<T>) {
    let mut horizontal = Vec::with_capacity(segments.len() + 1);
    let mut vertical = Vec::with_capacity(segments.len() + 1);
    horizontal.push(T::zero());
    vertical.push(T::zero());

    segments.iter().fold(None, |running: Option<ShapeMetrics<T>>, segment| {
        let combined = match running {
            Some(running) => running.combine(segment),
            None => *segment,
        };
        horizontal.push(combined.centroid().x * segment.area());
        vertical.push(combined.centroid().y * segment.area());
        Some(combined)
    });

    (horizontal, vertical)
}
