use nalgebra::Point2;

use crate::{
    bonjean::{compute_bonjean_with_option, BonjeanOption, BonjeanResult},
    error::BonjeanError,
    misc::FloatingPoint,
};

/// A transverse section of the hull at a fixed longitudinal position
/// Points hold the half breadth in `x` and the height in `y`, ordered by height
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station<T: FloatingPoint> {
    position: T,
    points: Vec<Point2<T>>,
}

impl<T: FloatingPoint> Station<T> {
    pub fn new(position: T, points: Vec<Point2<T>>) -> Self {
        Self { position, points }
    }

    /// Longitudinal position of the station
    pub fn position(&self) -> T {
        self.position
    }

    pub fn points(&self) -> &[Point2<T>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2<T>> {
        self.points
    }

    /// Compute the Bonjean curves of this station
    pub fn bonjean(&self, option: &BonjeanOption<T>) -> Result<BonjeanResult<T>, BonjeanError> {
        compute_bonjean_with_option(&self.points, option)
    }
}
