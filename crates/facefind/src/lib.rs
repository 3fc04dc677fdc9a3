//! High-level facade crate for the `facefind-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying detector crates
//! - (feature-gated) end-to-end helpers that load images through the `image`
//!   crate and run a detector on them, plus annotation drawing
//!
//! ## Quickstart
//!
//! ```no_run
//! use facefind::detect;
//! use facefind::edge::EdgeDetectorParams;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = detect::load_gray("portrait.jpg")?;
//! let result = detect::detect_edge_faces(&img, EdgeDetectorParams::default());
//! println!("found: {}", result.found_face());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `facefind::core`: shared types (rectangles, detections, gray images, raster).
//! - `facefind::edge`: synthetic face rendering and the blur/Canny/contour detector.
//! - `facefind::cascade`: pretrained face cascade and the two-stage face+eye pass.
//! - `facefind::mesh`: landmark-mesh prediction and the 68-point topology.
//! - `facefind::detect` (feature `image`): end-to-end helpers from `image` buffers.
//! - `facefind::annotate` (feature `image`): draw detections onto an `image::RgbImage`.

pub use facefind_cascade as cascade;
pub use facefind_core as core;
pub use facefind_edge as edge;
pub use facefind_mesh as mesh;

pub use facefind_core::{DetectionKind, FaceDetection, PixelRect};

#[cfg(feature = "image")]
pub mod annotate;
#[cfg(feature = "image")]
pub mod detect;
