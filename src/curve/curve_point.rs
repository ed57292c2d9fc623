use crate::misc::FloatingPoint;

/// A value of a Bonjean curve measured at a waterline
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint<T: FloatingPoint> {
    pub value: T,
    pub ordinate: T,
}

impl<T: FloatingPoint> CurvePoint<T> {
    pub fn new(value: T, ordinate: T) -> Self {
        Self { value, ordinate }
    }

    pub fn into_tuple(self) -> (T, T) {
        (self.value, self.ordinate)
    }
}

impl<T: FloatingPoint> From<(T, T)> for CurvePoint<T> {
    fn from((value, ordinate): (T, T)) -> Self {
        Self::new(value, ordinate)
    }
}
