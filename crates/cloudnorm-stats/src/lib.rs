//! cloudnorm-stats - Robust statistics for point normalization
//!
//! This crate provides the outlier-resistant estimates used to center and
//! scale a point cloud:
//!
//! - **Selection**: median and percentile by quickselect, in place
//! - **Robust frame**: per-axis median center and a single isotropic scale
//!   taken from the widest 5th-95th percentile range
//!
//! # In-place selection
//!
//! Selection reorders the slice it is given. Only the returned value is
//! meaningful; callers must not rely on the slice order afterwards.

pub mod robust;
pub mod selection;

pub use robust::*;
pub use selection::*;
