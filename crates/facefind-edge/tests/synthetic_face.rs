use facefind_core::{DetectionKind, PixelRect};
use facefind_edge::{render_sample_face, EdgeDetectorParams, EdgeFaceDetector};

#[test]
fn detects_face_contour_on_sample_image() {
    let canvas = render_sample_face();
    let gray = canvas.to_gray();

    let detector = EdgeFaceDetector::new(EdgeDetectorParams::default());
    let result = detector.detect(&gray.as_view());

    assert!(result.found_face(), "no contour above the area threshold");

    // Exactly one contour is large enough: the face oval. The eyes and the
    // mouth trace contours well under the 1000 px cut.
    assert_eq!(result.faces.len(), 1);
    let face = &result.faces[0];
    assert_eq!(face.kind, DetectionKind::EdgeContour);
    assert!(face.score > 1000.0);

    // The box encloses the oval (200 x 240 centred at 150, 150) and stays
    // inside the image.
    let image_rect = PixelRect::new(0, 0, 300, 300);
    assert!(image_rect.contains_rect(&face.bbox));
    assert!(face.bbox.width >= 180 && face.bbox.width <= 220);
    assert!(face.bbox.height >= 220 && face.bbox.height <= 260);
    assert!(face.bbox.contains_point(150, 150));
}

#[test]
fn edge_map_matches_input_dimensions() {
    let gray = render_sample_face().to_gray();
    let result = EdgeFaceDetector::default().detect(&gray.as_view());
    assert_eq!(result.edges.width, 300);
    assert_eq!(result.edges.height, 300);
}

#[test]
fn blank_image_detects_nothing() {
    let gray = facefind_core::GrayImage::filled(64, 64, 0);
    let result = EdgeFaceDetector::default().detect(&gray.as_view());
    assert!(!result.found_face());
    assert!(result.contours.is_empty());
}
