//! Generate a synthetic face image and detect it via edge analysis.

use facefind::annotate;
use facefind::edge::{render_sample_face, EdgeDetectorParams, EdgeFaceDetector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./output".to_string());
    std::fs::create_dir_all(&out_dir)?;

    // 1. Generate the image.
    let canvas = render_sample_face();
    let gray = canvas.to_gray();

    // 2. Run detection.
    let detector = EdgeFaceDetector::new(EdgeDetectorParams::default());
    let result = detector.detect(&gray.as_view());

    // 3. Save the edge map and the annotated image.
    let edges = image::GrayImage::from_raw(
        result.edges.width as u32,
        result.edges.height as u32,
        result.edges.data.clone(),
    )
    .expect("edge map buffer");
    edges.save(format!("{out_dir}/edge_map.jpg"))?;

    let mut annotated = annotate::canvas_to_image(canvas).expect("canvas buffer");
    annotate::draw_face_boxes(&mut annotated, &result.faces, annotate::FEATURE_COLOR);
    annotated.save(format!("{out_dir}/detected_edges.jpg"))?;

    if result.found_face() {
        println!("Success: Face shape detected via edge analysis.");
    } else {
        println!("No face-like edges found.");
    }
    Ok(())
}
