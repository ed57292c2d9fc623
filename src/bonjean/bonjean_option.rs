use crate::misc::FloatingPoint;

/// How a segment spanning no area is handled while building Bonjean curves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Keep the segment with zero area, its centroid at the midpoint of its points
    #[default]
    ZeroFill,
    /// Abort with `BonjeanError::DegenerateSegment`
    Reject,
}

/// Option for Bonjean curve computation
#[derive(Debug, Clone, PartialEq)]
pub struct BonjeanOption<T> {
    /// Handling of segments spanning no area
    degenerate_policy: DegeneratePolicy,
    /// Segment areas at or below this magnitude are treated as degenerate
    zero_tolerance: T,
}

impl<T: FloatingPoint> Default for BonjeanOption<T> {
    fn default() -> Self {
        Self {
            degenerate_policy: Default::default(),
            zero_tolerance: T::zero(),
        }
    }
}

impl<T: FloatingPoint> BonjeanOption<T> {
    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate_policy
    }

    pub fn zero_tolerance(&self) -> T {
        self.zero_tolerance
    }

    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    pub fn with_zero_tolerance(mut self, tol: T) -> Self {
        self.zero_tolerance = tol.abs();
        self
    }
}
