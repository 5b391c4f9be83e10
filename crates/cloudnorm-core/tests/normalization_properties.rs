//! End-to-end pipeline and normalization properties

use cloudnorm_core::{
    normalize, CoreError, NormalizationTransform, Pipeline, PipelineConfig, Point, PointSet,
    RecordingSink,
};
use nalgebra::Vector3;
use proptest::prelude::*;
use std::io::Write;

fn coordinate() -> impl Strategy<Value = f64> {
    -1.0e4f64..1.0e4
}

fn triples() -> impl Strategy<Value = Vec<[f64; 3]>> {
    prop::collection::vec([coordinate(), coordinate(), coordinate()], 1..100)
}

proptest! {
    #[test]
    fn test_normalize_is_componentwise(
        raw in triples(),
        center in [coordinate(), coordinate(), coordinate()],
        scale in 1.0e-4f64..10.0
    ) {
        let points: Vec<Point> = raw.iter().map(|&[x, y, z]| Point::new(x, y, z)).collect();
        let snapshot = points.clone();
        let transform = NormalizationTransform::new(Vector3::from(center), scale);

        let cloud = normalize(&points, &transform).unwrap();

        prop_assert_eq!(&points, &snapshot);
        prop_assert_eq!(cloud.len(), points.len());
        for (input, output) in points.iter().zip(&cloud.points) {
            for axis in 0..3 {
                prop_assert_eq!(output[axis], (input[axis] - center[axis]) * scale);
            }
        }
    }

    #[test]
    fn test_pipeline_uses_original_points(raw in triples()) {
        let set: PointSet = raw.iter().copied().collect();
        let mut sink = RecordingSink::new();
        let report = Pipeline::default().run_set(set.clone(), &mut sink).unwrap();

        let cloud = sink.last().unwrap();
        for (input, output) in set.points().iter().zip(&cloud.points) {
            prop_assert_eq!(*output, report.transform.apply(input));
        }
    }
}

#[test]
fn test_run_path_reads_file_and_truncates() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "0 0 0\n1 0 0\n2 0 0\n3 0 0\n100 0 0\ntrailing garbage 1 2 3\n").unwrap();
    file.flush().unwrap();

    let mut sink = RecordingSink::new();
    let report = Pipeline::default().run_path(file.path(), &mut sink).unwrap();

    assert_eq!(report.point_count, 5);
    assert_eq!(report.frame.center, [2.0, 0.0, 0.0]);
}

#[test]
fn test_run_path_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut sink = RecordingSink::new();
    let err = Pipeline::default().run_path(file.path(), &mut sink).unwrap_err();

    assert!(matches!(err, CoreError::EmptyInput));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_report_serializes() {
    let set: PointSet = vec![[1.0, 2.0, 3.0], [2.0, 4.0, 6.0]].into_iter().collect();
    let mut sink = RecordingSink::new();
    let report = Pipeline::new(PipelineConfig::default())
        .run_set(set, &mut sink)
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["point_count"], 2);
    assert!(json["frame"]["scale"].is_number());
}
