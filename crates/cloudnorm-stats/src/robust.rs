//! Robust center and scale for 3D coordinates
//!
//! Each axis contributes a median (the center) and the spread between two
//! percentiles (the extent). The scale is the reciprocal of the largest
//! extent, so the normalized cloud's robust range fits within one unit on
//! its widest axis.

use crate::selection::{median, percentile, StatsError, StatsResult};
use serde::{Deserialize, Serialize};

/// Default lower percentile for the robust extent
pub const DEFAULT_LOWER_PERCENTILE: f64 = 0.05;

/// Default upper percentile for the robust extent
pub const DEFAULT_UPPER_PERCENTILE: f64 = 0.95;

/// Extents at or below this are treated as degenerate
pub const DEFAULT_MIN_EXTENT: f64 = 1e-6;

/// Spatial axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Tuning for the robust estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobustOptions {
    /// Lower percentile as a fraction in [0, 1]
    pub lower_percentile: f64,
    /// Upper percentile as a fraction in [0, 1]
    pub upper_percentile: f64,
    /// Largest extent still considered degenerate
    pub min_extent: f64,
}

impl Default for RobustOptions {
    fn default() -> Self {
        Self {
            lower_percentile: DEFAULT_LOWER_PERCENTILE,
            upper_percentile: DEFAULT_UPPER_PERCENTILE,
            min_extent: DEFAULT_MIN_EXTENT,
        }
    }
}

impl RobustOptions {
    /// Check percentile ordering and ranges
    pub fn validate(&self) -> StatsResult<()> {
        for p in [self.lower_percentile, self.upper_percentile] {
            if !(0.0..=1.0).contains(&p) {
                return Err(StatsError::InvalidPercentile(p));
            }
        }
        if self.lower_percentile > self.upper_percentile {
            return Err(StatsError::InvalidPercentile(self.lower_percentile));
        }
        if self.min_extent.is_nan() || self.min_extent < 0.0 {
            return Err(StatsError::InvalidMinExtent(self.min_extent));
        }
        Ok(())
    }

    /// Scale factor for a given maximum extent
    pub fn scale_for(&self, max_extent: f64) -> f64 {
        if max_extent > self.min_extent {
            1.0 / max_extent
        } else {
            1.0
        }
    }
}

/// Robust statistics for one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStats {
    pub median: f64,
    /// Value at the lower percentile
    pub lower: f64,
    /// Value at the upper percentile
    pub upper: f64,
    /// `upper - lower`
    pub extent: f64,
}

impl AxisStats {
    /// Compute axis statistics, consuming the order of `values`.
    ///
    /// The median is selected first; both percentiles are then selected on
    /// the already reordered slice.
    pub fn from_sequence(values: &mut [f64], options: &RobustOptions) -> StatsResult<Self> {
        let median = median(values)?;
        let lower = percentile(values, options.lower_percentile)?;
        let upper = percentile(values, options.upper_percentile)?;

        Ok(Self {
            median,
            lower,
            upper,
            extent: upper - lower,
        })
    }
}

/// Robust center and isotropic scale of a 3D point set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobustFrame {
    /// Per-axis medians
    pub center: [f64; 3],
    /// Per-axis statistics, indexed by [`Axis::index`]
    pub axes: [AxisStats; 3],
    /// Largest per-axis extent
    pub max_extent: f64,
    /// `1 / max_extent`, or exactly 1.0 when the extent is degenerate
    pub scale: f64,
}

impl RobustFrame {
    /// Estimate the frame from three axis sequences.
    ///
    /// The sequences are reordered in place and should not be reused.
    pub fn estimate(columns: &mut [Vec<f64>; 3], options: &RobustOptions) -> StatsResult<Self> {
        options.validate()?;

        let axes = compute_axes(columns, options)?;
        let max_extent = largest_extent(&axes);

        Ok(Self {
            center: [axes[0].median, axes[1].median, axes[2].median],
            axes,
            max_extent,
            scale: options.scale_for(max_extent),
        })
    }

    /// Statistics for a single axis
    pub fn axis(&self, axis: Axis) -> &AxisStats {
        &self.axes[axis.index()]
    }

    /// Per-axis extents
    pub fn extents(&self) -> [f64; 3] {
        [self.axes[0].extent, self.axes[1].extent, self.axes[2].extent]
    }

    /// Whether the scale fell back to 1.0
    pub fn is_degenerate(&self, options: &RobustOptions) -> bool {
        self.max_extent.is_nan() || self.max_extent <= options.min_extent
    }

    /// Axis with the largest extent (first on ties)
    pub fn dominant_axis(&self) -> Axis {
        let mut best = Axis::X;
        for axis in Axis::ALL {
            if self.axis(axis).extent > self.axis(best).extent {
                best = axis;
            }
        }
        best
    }
}

/// Largest extent; NaN if any extent is NaN
fn largest_extent(axes: &[AxisStats; 3]) -> f64 {
    axes.iter().map(|a| a.extent).fold(f64::NEG_INFINITY, |acc, e| {
        if acc.is_nan() || e.is_nan() {
            f64::NAN
        } else {
            acc.max(e)
        }
    })
}

#[cfg(not(feature = "parallel"))]
fn compute_axes(columns: &mut [Vec<f64>; 3], options: &RobustOptions) -> StatsResult<[AxisStats; 3]> {
    let [x, y, z] = columns;
    Ok([
        AxisStats::from_sequence(x, options)?,
        AxisStats::from_sequence(y, options)?,
        AxisStats::from_sequence(z, options)?,
    ])
}

#[cfg(feature = "parallel")]
fn compute_axes(columns: &mut [Vec<f64>; 3], options: &RobustOptions) -> StatsResult<[AxisStats; 3]> {
    use rayon::prelude::*;

    let stats = columns
        .par_iter_mut()
        .map(|values| AxisStats::from_sequence(values, options))
        .collect::<StatsResult<Vec<_>>>()?;
    Ok([stats[0], stats[1], stats[2]])
}
