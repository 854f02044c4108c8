// Public modules
pub mod color;
pub mod component;
pub mod data;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod simplify;
pub mod spline;
pub mod svg;

// Re-export common types for convenience
pub use data::{DataPoint, Frame};
pub use error::{Error, Result};
pub use geometry::Point;
pub use pipeline::{VizConfig, VizResult};
