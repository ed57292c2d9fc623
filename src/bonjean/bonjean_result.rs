use crate::{curve::Curve, misc::FloatingPoint};

/// Bonjean curves of a single section
/// The area, horizontal moment and vertical moment curves share the same ordinates
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonjeanResult<T: FloatingPoint> {
    area: Curve<T>,
    horizontal_moment: Curve<T>,
    vertical_moment: Curve<T>,
    /// indices of segments which spanned no area and were zero filled
    degenerate_segments: Vec<usize>,
}

impl<T: FloatingPoint> BonjeanResult<T> {
    pub fn new(
        area: Curve<T>,
        horizontal_moment: Curve<T>,
        vertical_moment: Curve<T>,
        degenerate_segments: Vec<usize>,
    ) -> Self {
        Self {
            area,
            horizontal_moment,
            vertical_moment,
            degenerate_segments,
        }
    }

    /// Cumulative sectional area
    pub fn area(&self) -> &Curve<T> {
        &self.area
    }

    /// Cumulative first moment of area along the horizontal offset
    pub fn horizontal_moment(&self) -> &Curve<T> {
        &self.horizontal_moment
    }

    /// Cumulative first moment of area along the vertical ordinate
    pub fn vertical_moment(&self) -> &Curve<T> {
        &self.vertical_moment
    }

    pub fn degenerate_segments(&self) -> &[usize] {
        &self.degenerate_segments
    }

    pub fn has_degenerate_segments(&self) -> bool {
        !self.degenerate_segments.is_empty()
    }

    pub fn into_tuple(self) -> (Curve<T>, Curve<T>, Curve<T>) {
        (self.area, self.horizontal_moment, self.vertical_moment)
    }
}
