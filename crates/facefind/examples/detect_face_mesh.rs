//! Estimate landmark meshes for every detected face and draw their contours.

use std::path::Path;
use std::process::exit;

use facefind::annotate;
use facefind::cascade::{FaceCascadeParams, SeetaFaceDetector};
use facefind::detect;
use facefind::mesh::{MeshDetector, MeshParams, MeshPredictor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let image_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./data/brendan.jpeg".to_string());
    let face_model = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "./models/seeta_fd_frontal_v1.0.bin".to_string());
    let mesh_model = std::env::args()
        .nth(3)
        .unwrap_or_else(|| "./models/face_mesh.bin".to_string());

    if !Path::new(&image_path).exists() {
        eprintln!("Image file not found at: {image_path}");
        exit(1);
    }

    let gray = detect::load_gray(&image_path)?;
    let mut rgb = detect::load_rgb(&image_path)?;

    let detector = SeetaFaceDetector::from_model_path(&face_model, FaceCascadeParams::default())?;
    let faces = detect::detect_faces(&gray, &detector);

    let predictor = MeshPredictor::load(&mesh_model)?;
    let mesh_detector = MeshDetector::new(predictor, MeshParams::default());
    let meshes = detect::detect_face_mesh(&gray, &mesh_detector, &faces);

    if meshes.is_empty() {
        println!("No faces found.");
    } else {
        println!("Found {} faces.", meshes.len());
    }

    annotate::draw_meshes(&mut rgb, &meshes);

    std::fs::create_dir_all("./output")?;
    rgb.save("./output/detected_contours.jpg")?;
    println!("Result saved as './output/detected_contours.jpg'");
    Ok(())
}
