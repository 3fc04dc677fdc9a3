use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use facefind::annotate;
use facefind::cascade::{EyeSearchParams, FaceCascadeParams, SeetaFaceDetector};
use facefind::detect::{self, DetectError};
use facefind::edge::{render_sample_face, EdgeDetectorParams, EdgeFaceDetector};
use facefind::mesh::{MeshDetector, MeshParams, MeshPredictor};

const DEFAULT_IMAGE: &str = "./data/sample_faces.jpeg";
const DEFAULT_FACE_MODEL: &str = "./models/seeta_fd_frontal_v1.0.bin";
const DEFAULT_MESH_MODEL: &str = "./models/face_mesh.bin";

#[derive(Parser)]
#[command(name = "facefind", about = "Face and facial-feature detection demos")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging.
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render the synthetic sample face and run the edge/contour detector.
    Edge {
        #[arg(long, default_value = "./output/detected_edges.jpg")]
        out: PathBuf,
    },
    /// Detect faces with the pretrained cascade and draw their boxes.
    Faces {
        #[arg(long, default_value = DEFAULT_IMAGE)]
        image: PathBuf,
        #[arg(long, default_value = DEFAULT_FACE_MODEL)]
        model: PathBuf,
        #[arg(long, default_value = "./output/detected_faces.jpg")]
        out: PathBuf,
    },
    /// Detect faces, then locate eyes within each face region.
    Features {
        #[arg(long, default_value = DEFAULT_IMAGE)]
        image: PathBuf,
        #[arg(long, default_value = DEFAULT_FACE_MODEL)]
        model: PathBuf,
        #[arg(long, default_value = "./output/detected_features.jpg")]
        out: PathBuf,
    },
    /// Estimate landmark meshes for detected faces and draw their contours.
    Mesh {
        #[arg(long, default_value = DEFAULT_IMAGE)]
        image: PathBuf,
        #[arg(long, default_value = DEFAULT_FACE_MODEL)]
        face_model: PathBuf,
        #[arg(long, default_value = DEFAULT_MESH_MODEL)]
        mesh_model: PathBuf,
        #[arg(long, default_value = "./output/detected_contours.jpg")]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = facefind::core::init_with_level(level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), DetectError> {
    match command {
        Command::Edge { out } => run_edge(&out),
        Command::Faces { image, model, out } => run_faces(&image, &model, &out),
        Command::Features { image, model, out } => run_features(&image, &model, &out),
        Command::Mesh {
            image,
            face_model,
            mesh_model,
            out,
        } => run_mesh(&image, &face_model, &mesh_model, &out),
    }
}

fn run_edge(out: &Path) -> Result<(), DetectError> {
    let canvas = render_sample_face();
    let gray = canvas.to_gray();

    let detector = EdgeFaceDetector::new(EdgeDetectorParams::default());
    let result = detector.detect(&gray.as_view());

    let mut img = annotate::canvas_to_image(canvas)
        .ok_or_else(|| DetectError::Io(std::io::Error::other("canvas buffer mismatch")))?;
    annotate::draw_face_boxes(&mut img, &result.faces, annotate::FEATURE_COLOR);
    save(&img, out)?;

    if result.found_face() {
        println!("Success: Face shape detected via edge analysis.");
    } else {
        println!("No face-like edges found.");
    }
    println!("Result saved as '{}'", out.display());
    Ok(())
}

fn run_faces(image: &Path, model: &Path, out: &Path) -> Result<(), DetectError> {
    let gray = detect::load_gray(image)?;
    let mut rgb = detect::load_rgb(image)?;

    let detector = SeetaFaceDetector::from_model_path(model, FaceCascadeParams::default())?;
    let faces = detect::detect_faces(&gray, &detector);
    println!("Found {} faces!", faces.len());

    annotate::draw_face_boxes(&mut rgb, &faces, annotate::FACE_COLOR);
    save(&rgb, out)?;
    println!("Result saved as '{}'", out.display());
    Ok(())
}

fn run_features(image: &Path, model: &Path, out: &Path) -> Result<(), DetectError> {
    let gray = detect::load_gray(image)?;
    let mut rgb = detect::load_rgb(image)?;

    let detector = SeetaFaceDetector::from_model_path(model, FaceCascadeParams::default())?;
    let features =
        detect::detect_face_features(&gray, detector, EyeSearchParams::default());
    println!("Found {} faces.", features.len());

    annotate::draw_face_features(&mut rgb, &features);
    save(&rgb, out)?;
    println!("Result saved as '{}'", out.display());
    Ok(())
}

fn run_mesh(
    image: &Path,
    face_model: &Path,
    mesh_model: &Path,
    out: &Path,
) -> Result<(), DetectError> {
    let gray = detect::load_gray(image)?;
    let mut rgb = detect::load_rgb(image)?;

    let face_detector =
        SeetaFaceDetector::from_model_path(face_model, FaceCascadeParams::default())?;
    let faces = detect::detect_faces(&gray, &face_detector);

    let predictor = MeshPredictor::load(mesh_model)?;
    let mesh_detector = MeshDetector::new(predictor, MeshParams::default());
    let meshes = detect::detect_face_mesh(&gray, &mesh_detector, &faces);

    if meshes.is_empty() {
        println!("No faces found.");
    } else {
        println!("Found {} faces.", meshes.len());
    }

    annotate::draw_meshes(&mut rgb, &meshes);
    save(&rgb, out)?;
    println!("Result saved as '{}'", out.display());
    Ok(())
}

fn save(img: &image::RgbImage, out: &Path) -> Result<(), DetectError> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    img.save(out)?;
    Ok(())
}
