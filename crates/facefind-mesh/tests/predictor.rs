use facefind_core::{DetectionKind, FaceDetection, GrayImage, PixelRect};
use facefind_mesh::{
    default_mean_shape, MeshDetector, MeshError, MeshParams, MeshPredictor,
    MeshPredictorBuilder, RegressionTree, Shape, TreeEnsemble, TreeNode,
};

/// A model whose single stage predicts zero deltas everywhere.
fn zero_delta_model() -> MeshPredictor {
    let mean = default_mean_shape();
    let n = mean.num_landmarks();
    let tree = RegressionTree::new(vec![TreeNode::Leaf {
        delta: Shape::zeros(n),
    }]);
    MeshPredictorBuilder::new()
        .mean_shape(mean)
        .add_stage(TreeEnsemble::new(vec![tree], n))
        .build()
        .expect("valid model")
}

#[test]
fn zero_delta_cascade_returns_mean_shape_in_box() {
    let model = zero_delta_model();
    let img = GrayImage::filled(320, 240, 128);
    let rect = PixelRect::new(60, 40, 120, 150);

    let shape = model.predict(&img.as_view(), &rect);
    assert_eq!(shape.num_landmarks(), 68);

    let expected = default_mean_shape().denormalized_into(&rect);
    for (got, want) in shape.points.iter().zip(expected.points.iter()) {
        assert!((got.x - want.x).abs() < 1e-4);
        assert!((got.y - want.y).abs() < 1e-4);
    }

    // The mean shape is normalized, so everything stays inside the box.
    for p in &shape.points {
        assert!(p.x >= rect.x as f32 && p.x <= rect.right() as f32);
        assert!(p.y >= rect.y as f32 && p.y <= rect.bottom() as f32);
    }
}

#[test]
fn save_and_load_roundtrip() {
    let model = zero_delta_model();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("face_mesh.bin");

    model.save(&path).expect("save");
    let loaded = MeshPredictor::load(&path).expect("load");

    assert_eq!(loaded.num_landmarks(), model.num_landmarks());
    assert_eq!(loaded.num_stages(), model.num_stages());
}

#[test]
fn missing_model_is_a_typed_error() {
    let err = MeshPredictor::load("/no/such/dir/face_mesh.bin").unwrap_err();
    match err {
        MeshError::ModelNotFound { path } => assert!(path.ends_with("face_mesh.bin")),
        other => panic!("expected ModelNotFound, got {other:?}"),
    }
}

#[test]
fn builder_rejects_empty_cascade() {
    let err = MeshPredictorBuilder::new()
        .mean_shape(default_mean_shape())
        .build()
        .unwrap_err();
    assert!(matches!(err, MeshError::InvalidModel(_)));
}

#[test]
fn builder_rejects_landmark_count_mismatch() {
    let mean = default_mean_shape();
    let tree = RegressionTree::new(vec![TreeNode::Leaf {
        delta: Shape::zeros(5),
    }]);
    let err = MeshPredictorBuilder::new()
        .mean_shape(mean)
        .add_stage(TreeEnsemble::new(vec![tree], 5))
        .build()
        .unwrap_err();
    assert!(matches!(err, MeshError::InvalidModel(_)));
}

#[test]
fn mesh_detector_caps_faces_and_stays_in_bounds() {
    let model = zero_delta_model();
    let detector = MeshDetector::new(model, MeshParams { max_faces: 2 });
    let img = GrayImage::filled(400, 300, 100);

    let face = |x: i32, y: i32| FaceDetection {
        kind: DetectionKind::Cascade,
        bbox: PixelRect::new(x, y, 80, 100),
        score: 3.0,
    };
    let faces = vec![face(10, 10), face(150, 40), face(280, 60)];

    let meshes = detector.detect(&img.as_view(), &faces);
    assert_eq!(meshes.len(), 2);

    for mesh in &meshes {
        assert_eq!(mesh.landmarks.num_landmarks(), 68);
        let norm = mesh.normalized_landmarks(400, 300);
        for p in &norm {
            assert!((0.0..=1.0).contains(&p.x));
            assert!((0.0..=1.0).contains(&p.y));
        }
    }
}
