//! Translation + isotropic scale normalization
//!
//! Points are translated by `-center` and then scaled about the origin,
//! so each output point is `(p - center) * scale`. Input points are never
//! modified; the normalized cloud owns fresh copies.

use crate::color::Color;
use crate::error::{CoreError, CoreResult};
use cloudnorm_io::Point;
use cloudnorm_stats::RobustFrame;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Translate-then-scale transform derived from a robust frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationTransform {
    pub center: Vector3<f64>,
    pub scale: f64,
}

impl NormalizationTransform {
    pub fn new(center: Vector3<f64>, scale: f64) -> Self {
        Self { center, scale }
    }

    /// The identity transform
    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), 1.0)
    }

    /// Map a point into normalized space
    pub fn apply(&self, point: &Point) -> Point {
        Point::from((point.coords - self.center) * self.scale)
    }

    /// Map a normalized point back to the original space
    pub fn inverse(&self, point: &Point) -> Point {
        Point::from(point.coords / self.scale + self.center)
    }
}

impl From<&RobustFrame> for NormalizationTransform {
    fn from(frame: &RobustFrame) -> Self {
        Self::new(Vector3::from(frame.center), frame.scale)
    }
}

/// Normalized points ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCloud {
    pub points: Vec<Point>,
    /// Uniform color for every point, if painted
    pub color: Option<Color>,
}

impl NormalizedCloud {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Paint every point with one color
    pub fn paint_uniform(&mut self, color: Color) {
        self.color = Some(color);
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` when empty
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = self.points.first()?;
        let (min, max) = self
            .points
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Some((min, max))
    }
}

/// Apply `transform` to every point, leaving `points` untouched
pub fn normalize(points: &[Point], transform: &NormalizationTransform) -> CoreResult<NormalizedCloud> {
    if points.is_empty() {
        return Err(CoreError::EmptyInput);
    }

    Ok(NormalizedCloud {
        points: points.iter().map(|p| transform.apply(p)).collect(),
        color: None,
    })
}
