pub mod rectangle;
pub mod shape_metrics;
pub mod trapezium;
pub mod triangle;

pub use rectangle::*;
pub use shape_metrics::*;
pub use trapezium::*;
pub use triangle::*;

#[cfg(test)]
mod tests;
