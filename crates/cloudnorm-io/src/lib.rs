//! cloudnorm-io - Point input for cloudnorm
//!
//! Reads flat lists of 3D coordinates written as whitespace-separated
//! `x y z` triples. No header, no delimiters beyond whitespace.
//!
//! Every load produces two views of the same data:
//!
//! - **Points**: the immutable point list, in file order
//! - **Axis columns**: one `Vec<f64>` per axis, index-aligned with the points,
//!   handed to the statistics stage which is free to reorder them

pub mod points;
pub mod reader;

pub use points::*;
pub use reader::*;
