//! cloudnorm-core - Robust point cloud normalization
//!
//! Ties the loader and the statistics together into a single forward
//! pipeline:
//!
//! 1. **Load** points and per-axis columns (`cloudnorm-io`)
//! 2. **Estimate** a median center and isotropic scale (`cloudnorm-stats`)
//! 3. **Normalize** the original points: `(p - center) * scale`
//! 4. **Show** the result through an injected [`PointSink`]
//!
//! The sink is the only way results leave the pipeline; rendering lives
//! outside this crate.

pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod sink;

pub use camera::*;
pub use color::*;
pub use config::*;
pub use error::*;
pub use normalize::*;
pub use pipeline::*;
pub use sink::*;

pub use cloudnorm_io::{Point, PointSet};
pub use cloudnorm_stats::{Axis, AxisStats, RobustFrame, RobustOptions};
