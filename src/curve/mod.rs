pub mod curve_point;
pub use curve_point::*;

use itertools::Itertools;

use crate::{error::BonjeanError, misc::FloatingPoint};

/// A sequence of values paired with the waterline ordinates they were measured at
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve<T: FloatingPoint> {
    points: Vec<CurvePoint<T>>,
}

impl<T: FloatingPoint> Curve<T> {
    pub fn new(points: Vec<CurvePoint<T>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[CurvePoint<T>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<CurvePoint<T>> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint<T>> {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&CurvePoint<T>> {
        self.points.last()
    }

    pub fn values(&self) -> Vec<T> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn ordinates(&self) -> Vec<T> {
        self.points.iter().map(|p| p.ordinate).collect()
    }

    /// Read the curve at an arbitrary waterline by linear interpolation
    /// Returns None if the ordinate lies outside the measured range
    /// # Example
    /// ```
    /// use bonjean::prelude::*;
    /// let curve = pair_with_ordinates(&[0., 2., 6.], &[1., 2., 3.]).unwrap();
    /// assert_eq!(curve.value_at(1.5), Some(1.));
    /// assert_eq!(curve.value_at(3.), Some(6.));
    /// assert_eq!(curve.value_at(4.), None);
    /// ```
    pub fn value_at(&self, ordinate: T) -> Option<T> {
        if let [single] = self.points.as_slice() {
            return (single.ordinate == ordinate).then_some(single.value);
        }

        self.points.iter().tuple_windows().find_map(|(a, b)| {
            let (lo, hi) = if a.ordinate <= b.ordinate {
                (a.ordinate, b.ordinate)
            } else {
                (b.ordinate, a.ordinate)
            };
            if ordinate < lo || ordinate > hi {
                return None;
            }
            let span = b.ordinate - a.ordinate;
            if span.is_zero() {
                Some(a.value)
            } else {
                let t = (ordinate - a.ordinate) / span;
                Some(a.value + (b.value - a.value) * t)
            }
        })
    }
}

impl<T: FloatingPoint> FromIterator<CurvePoint<T>> for Curve<T> {
    fn from_iter<I: IntoIterator<Item = CurvePoint<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T: FloatingPoint> IntoIterator for &'a Curve<T> {
    type Item = &'a CurvePoint<T>;
    type IntoIter = std::slice::Iter<'a, CurvePoint<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Pair each value with the ordinate at the same position
/// Fails with `LengthMismatch` if the sequences differ in length
/// # Example
/// ```
/// use bonjean::prelude::*;
/// let curve = pair_with_ordinates(&[0., 1.5], &[2., 3.]).unwrap();
/// assert_eq!(curve.points()[1], CurvePoint::new(1.5, 3.));
/// assert_eq!(
///     pair_with_ordinates(&[0., 1.5], &[2.]),
///     Err(BonjeanError::LengthMismatch { values: 2, ordinates: 1 })
/// );
/// ```
pub fn pair_with_ordinates<T: FloatingPoint>(
    values: &[T],
    ordinates: &[T],
) -> Result<Curve<T>, BonjeanError> {
    if values.len() != ordinates.len() {
        return Err(BonjeanError::LengthMismatch {
            values: values.len(),
            ordinates: ordinates.len(),
        });
    }
    Ok(values
        .iter()
        .zip(ordinates.iter())
        .map(|(&value, &ordinate)| CurvePoint::new(value, ordinate))
        .collect())
}
