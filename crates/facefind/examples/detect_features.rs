//! Two-stage detection: faces first, then eyes inside each face region.

use std::path::Path;
use std::process::exit;

use facefind::annotate;
use facefind::cascade::{EyeSearchParams, FaceCascadeParams, SeetaFaceDetector};
use facefind::detect;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let image_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./data/sample_faces.jpeg".to_string());
    let model_path = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "./models/seeta_fd_frontal_v1.0.bin".to_string());

    if !Path::new(&image_path).exists() {
        eprintln!("Image file not found at: {image_path}");
        exit(1);
    }

    let gray = detect::load_gray(&image_path)?;
    let mut rgb = detect::load_rgb(&image_path)?;

    let detector = SeetaFaceDetector::from_model_path(&model_path, FaceCascadeParams::default())?;
    let features = detect::detect_face_features(&gray, detector, EyeSearchParams::default());
    println!("Found {} faces.", features.len());

    annotate::draw_face_features(&mut rgb, &features);

    std::fs::create_dir_all("./output")?;
    rgb.save("./output/detected_features.jpg")?;
    println!("Result saved as './output/detected_features.jpg'");
    Ok(())
}
