//! Cascade-style face detection.
//!
//! `SeetaFaceDetector` wraps the pretrained SeetaFace frontal-face model
//! (loaded through `rustface`) behind the `FaceDetector` trait. On top of it,
//! `FeatureDetector` runs the two-stage pass: detect faces, then locate eyes
//! inside each face region and map them back to image coordinates.

mod error;
mod eyes;
mod face;
mod features;
mod params;

pub use error::CascadeError;
pub use eyes::locate_eyes;
pub use face::{FaceDetector, SeetaFaceDetector};
pub use features::{FaceFeatures, FeatureDetector};
pub use params::{EyeSearchParams, FaceCascadeParams};
