//! Hull section geometry and Bonjean curve integration.
//!
//! Offsets of a station, ordered by waterline, are integrated into the running
//! sectional area and its first moments about both axes.

mod bonjean;
mod curve;
mod error;
mod integrate;
mod misc;
mod shape;
mod station;

pub mod prelude {
    pub use crate::bonjean::*;
    pub use crate::curve::*;
    pub use crate::error::*;
    pub use crate::integrate::*;
    pub use crate::misc::*;
    pub use crate::shape::*;
    pub use crate::station::*;
}
