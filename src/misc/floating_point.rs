use nalgebra::{convert, RealField};
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Every offset coordinate, area and moment in the crate is expressed in this scalar type
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    fn two() -> Self {
        convert(2.0)
    }

    fn three() -> Self {
        convert(3.0)
    }

    /// Returns true if the magnitude does not exceed the tolerance
    fn is_negligible(self, tolerance: Self) -> bool {
        self.abs() <= tolerance
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
