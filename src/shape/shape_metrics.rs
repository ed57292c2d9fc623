use nalgebra::{Point2, Vector2};

use crate::misc::FloatingPoint;

/// Area and centroid of a planar shape
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeMetrics<T: FloatingPoint> {
    area: T,
    centroid: Point2<T>,
}

impl<T: FloatingPoint> ShapeMetrics<T> {
    pub fn new(area: T, centroid: Point2<T>) -> Self {
        Self { area, centroid }
    }

    /// A shape without area located at `centroid`
    pub fn empty(centroid: Point2<T>) -> Self {
        Self::new(T::zero(), centroid)
    }

    /// Build the metrics from a total area and its first moment about both axes
    /// Returns None if the area is zero, since no centroid can be derived
    pub fn from_moment(area: T, moment: Vector2<T>) -> Option<Self> {
        if area.is_zero() {
            None
        } else {
            Some(Self::new(area, (moment / area).into()))
        }
    }

    pub fn area(&self) -> T {
        self.area
    }

    pub fn centroid(&self) -> &Point2<T> {
        &self.centroid
    }

    /// First moment of area, x component about the vertical axis and y component about the horizontal axis
    pub fn first_moment(&self) -> Vector2<T> {
        self.centroid.coords * self.area
    }

    /// Combine two disjoint shapes by the composite centroid theorem
    /// (C1·A1 + C2·A2) / (A1 + A2), applied per coordinate.
    /// If both areas are zero, the result is empty and located at `other`'s centroid.
    /// # Example
    /// ```
    /// use bonjean::prelude::ShapeMetrics;
    /// use nalgebra::Point2;
    /// let a = ShapeMetrics::new(1., Point2::new(0.5, 0.5));
    /// let b = ShapeMetrics::new(1., Point2::new(1.5, 0.5));
    /// let c = a.combine(&b);
    /// assert_eq!(c.area(), 2.);
    /// assert_eq!(c.centroid(), &Point2::new(1., 0.5));
    /// ```
    pub fn combine(&self, other: &Self) -> Self {
        let area = self.area + other.area;
        Self::from_moment(area, self.first_moment() + other.first_moment())
            .unwrap_or_else(|| Self::empty(other.centroid))
    }
}
