//! Load → estimate → normalize → show
//!
//! The pipeline runs strictly forward and stops at the first error. Axis
//! columns are taken from the point set and consumed by the estimator;
//! the points themselves are only read.

use crate::config::PipelineConfig;
use crate::error::{CoreError, CoreResult};
use crate::normalize::{normalize, NormalizationTransform, NormalizedCloud};
use crate::sink::PointSink;
use cloudnorm_io::{load_points, PointSet};
use cloudnorm_stats::RobustFrame;
use serde::Serialize;
use std::path::Path;

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineReport {
    pub point_count: usize,
    pub frame: RobustFrame,
    pub transform: NormalizationTransform,
}

/// Normalization pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Estimate the robust frame of a point set.
    ///
    /// Consumes the set's axis columns; its points are left as loaded.
    /// Repeated calls on the same set give the same frame.
    pub fn estimate(&self, set: &mut PointSet) -> CoreResult<RobustFrame> {
        if set.is_empty() {
            return Err(CoreError::EmptyInput);
        }

        tracing::info!("Computing robust center and scale (median / percentiles)");
        let mut columns = set.take_columns().into_array();
        let frame = RobustFrame::estimate(&mut columns, &self.config.robust)?;

        tracing::info!(
            x = frame.center[0],
            y = frame.center[1],
            z = frame.center[2],
            "Robust center (median)"
        );
        if frame.is_degenerate(&self.config.robust) {
            tracing::warn!(
                max_extent = frame.max_extent,
                "Robust extent is degenerate, keeping unit scale"
            );
        }
        tracing::info!(
            scale = frame.scale,
            axis = frame.dominant_axis().name(),
            lower = self.config.robust.lower_percentile,
            upper = self.config.robust.upper_percentile,
            "Robust scale"
        );

        Ok(frame)
    }

    /// Normalize an estimated point set and paint it per the config
    pub fn normalize(&self, set: &PointSet, frame: &RobustFrame) -> CoreResult<NormalizedCloud> {
        let transform = NormalizationTransform::from(frame);
        let mut cloud = normalize(set.points(), &transform)?;
        if let Some(color) = self.config.paint_color() {
            cloud.paint_uniform(color);
        }
        Ok(cloud)
    }

    /// Run on an already loaded point set
    pub fn run_set(&self, mut set: PointSet, sink: &mut dyn PointSink) -> CoreResult<PipelineReport> {
        tracing::info!(points = set.len(), "Points loaded");
        if set.is_empty() {
            return Err(CoreError::EmptyInput);
        }

        let frame = self.estimate(&mut set)?;

        tracing::info!("Applying normalization");
        let cloud = self.normalize(&set, &frame)?;

        tracing::info!("Displaying cloud");
        sink.show(&cloud)?;

        Ok(PipelineReport {
            point_count: set.len(),
            frame,
            transform: NormalizationTransform::from(&frame),
        })
    }

    /// Load points from a file and run
    pub fn run_path(&self, path: impl AsRef<Path>, sink: &mut dyn PointSink) -> CoreResult<PipelineReport> {
        let set = load_points(path)?;
        self.run_set(set, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::sink::RecordingSink;
    use cloudnorm_io::{parse_points, Point};
    use cloudnorm_stats::RobustOptions;

    const OUTLIER: &str = "0 0 0\n1 0 0\n2 0 0\n3 0 0\n100 0 0\n";

    #[test]
    fn test_outlier_cloud() {
        let mut sink = RecordingSink::new();
        let report = Pipeline::default()
            .run_set(parse_points(OUTLIER), &mut sink)
            .unwrap();

        assert_eq!(report.point_count, 5);
        assert_eq!(report.frame.center, [2.0, 0.0, 0.0]);
        assert_eq!(report.frame.scale, 1.0 / 3.0);

        let cloud = sink.last().unwrap();
        assert_eq!(cloud.len(), 5);
        assert_eq!(cloud.color, Some(Color::default()));
        assert!((cloud.points[4].x - 98.0 / 3.0).abs() < 1e-12);
        assert_eq!(cloud.points[2], Point::origin());
    }

    #[test]
    fn test_full_range_options() {
        let config = PipelineConfig {
            robust: RobustOptions {
                lower_percentile: 0.0,
                upper_percentile: 1.0,
                ..Default::default()
            },
            paint: false,
            ..Default::default()
        };
        let mut sink = RecordingSink::new();
        Pipeline::new(config)
            .run_set(parse_points(OUTLIER), &mut sink)
            .unwrap();

        let cloud = sink.last().unwrap();
        let xs: Vec<f64> = cloud.points.iter().map(|p| p.x).collect();
        for (got, want) in xs.iter().zip([-0.02, -0.01, 0.0, 0.01, 0.98]) {
            assert!((got - want).abs() < 1e-12);
        }
        assert_eq!(cloud.color, None);
    }

    #[test]
    fn test_empty_set_rejected_before_sink() {
        let mut sink = RecordingSink::new();
        let result = Pipeline::default().run_set(PointSet::new(), &mut sink);

        assert!(matches!(result, Err(CoreError::EmptyInput)));
        assert!(sink.shown().is_empty());
    }

    #[test]
    fn test_estimate_keeps_points() {
        let mut set = parse_points(OUTLIER);
        let before = set.points().to_vec();
        Pipeline::default().estimate(&mut set).unwrap();
        assert_eq!(set.points(), &before[..]);
    }

    #[test]
    fn test_estimate_twice_on_same_set() {
        let pipeline = Pipeline::default();
        let mut set = parse_points(OUTLIER);
        let first = pipeline.estimate(&mut set).unwrap();
        let second = pipeline.estimate(&mut set).unwrap();

        assert_eq!(set.len(), 5);
        assert_eq!(second, first);
        assert_eq!(second.scale, 1.0 / 3.0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = RecordingSink::new();
        let result = Pipeline::default().run_path(dir.path().join("missing.txt"), &mut sink);

        match result {
            Err(err @ CoreError::SourceUnavailable(_)) => assert_eq!(err.exit_code(), 1),
            other => panic!("expected SourceUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_cloud_unit_scale() {
        let mut sink = RecordingSink::new();
        let report = Pipeline::default()
            .run_set(parse_points("4 4 4\n4 4 4\n"), &mut sink)
            .unwrap();

        assert_eq!(report.frame.scale, 1.0);
        assert_eq!(sink.last().unwrap().points[0], Point::origin());
    }
}
