//! End-to-end helpers over `image` crate buffers.

use std::path::{Path, PathBuf};

use image::ImageReader;

use crate::cascade::{
    CascadeError, EyeSearchParams, FaceDetector, FaceFeatures, FeatureDetector,
};
use crate::core::{FaceDetection, GrayImageView};
use crate::edge::{EdgeDetectionResult, EdgeDetectorParams, EdgeFaceDetector};
use crate::mesh::{FaceMesh, MeshDetector, MeshError};

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("input image not found: {path}")]
    ImageNotFound { path: PathBuf },

    #[error("invalid grayscale image buffer length (expected {expected} bytes, got {got})")]
    InvalidGrayBuffer { expected: usize, got: usize },

    #[error("invalid grayscale image dimensions (width={width}, height={height})")]
    InvalidGrayDimensions { width: u32, height: u32 },

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Cascade(#[from] CascadeError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

fn check_exists(path: &Path) -> Result<(), DetectError> {
    if path.exists() {
        Ok(())
    } else {
        Err(DetectError::ImageNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Load an image from disk as grayscale.
///
/// A missing file is reported as `DetectError::ImageNotFound` before any
/// decode is attempted.
pub fn load_gray(path: impl AsRef<Path>) -> Result<image::GrayImage, DetectError> {
    let path = path.as_ref();
    check_exists(path)?;
    Ok(ImageReader::open(path)?.decode()?.to_luma8())
}

/// Load an image from disk as RGB, for annotation overlays.
pub fn load_rgb(path: impl AsRef<Path>) -> Result<image::RgbImage, DetectError> {
    let path = path.as_ref();
    check_exists(path)?;
    Ok(ImageReader::open(path)?.decode()?.to_rgb8())
}

/// Convert an `image::GrayImage` into the lightweight core view type.
pub fn gray_view(img: &image::GrayImage) -> GrayImageView<'_> {
    GrayImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Build an `image::GrayImage` from a raw grayscale buffer.
pub fn gray_image_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<image::GrayImage, DetectError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    let Some((w, h)) = w.zip(h) else {
        return Err(DetectError::InvalidGrayDimensions { width, height });
    };
    let Some(expected) = w.checked_mul(h) else {
        return Err(DetectError::InvalidGrayDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(DetectError::InvalidGrayBuffer {
            expected,
            got: pixels.len(),
        });
    }
    image::GrayImage::from_raw(width, height, pixels.to_vec())
        .ok_or(DetectError::InvalidGrayDimensions { width, height })
}

/// Run the edge/contour detector end-to-end.
pub fn detect_edge_faces(
    img: &image::GrayImage,
    params: EdgeDetectorParams,
) -> EdgeDetectionResult {
    EdgeFaceDetector::new(params).detect(&gray_view(img))
}

/// Run a face detector over a grayscale image.
pub fn detect_faces<D: FaceDetector>(img: &image::GrayImage, detector: &D) -> Vec<FaceDetection> {
    detector.detect_faces(&gray_view(img))
}

/// Run the two-stage face+eye pass end-to-end.
pub fn detect_face_features<D: FaceDetector>(
    img: &image::GrayImage,
    face_detector: D,
    eye_params: EyeSearchParams,
) -> Vec<FaceFeatures> {
    FeatureDetector::new(face_detector, eye_params).detect(&gray_view(img))
}

/// Run the mesh predictor over already-detected face boxes.
pub fn detect_face_mesh(
    img: &image::GrayImage,
    detector: &MeshDetector,
    faces: &[FaceDetection],
) -> Vec<FaceMesh> {
    detector.detect(&gray_view(img), faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_image_from_slice_validates_length() {
        let err = gray_image_from_slice(4, 4, &[0u8; 15]).unwrap_err();
        assert!(matches!(
            err,
            DetectError::InvalidGrayBuffer {
                expected: 16,
                got: 15
            }
        ));
        assert!(gray_image_from_slice(4, 4, &[0u8; 16]).is_ok());
    }

    #[test]
    fn missing_image_is_a_typed_error() {
        let err = load_gray("/no/such/image.jpeg").unwrap_err();
        assert!(matches!(err, DetectError::ImageNotFound { .. }));
    }

    #[test]
    fn gray_view_matches_buffer() {
        let img = gray_image_from_slice(3, 2, &[1, 2, 3, 4, 5, 6]).unwrap();
        let view = gray_view(&img);
        assert_eq!(view.width, 3);
        assert_eq!(view.height, 2);
        assert_eq!(view.get(2, 1), 6);
    }

    #[test]
    fn edge_pipeline_runs_on_image_buffers() {
        let canvas = crate::edge::render_sample_face();
        let gray = canvas.to_gray();
        let img =
            gray_image_from_slice(300, 300, &gray.data).expect("sample face buffer");
        let result = detect_edge_faces(&img, EdgeDetectorParams::default());
        assert!(result.found_face());
    }
}
