use facefind_core::{DetectionKind, FaceDetection, GrayImage, GrayImageView};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::blur::gaussian_blur;
use crate::canny::canny;
use crate::contour::{find_external_contours, Contour};
use crate::params::EdgeDetectorParams;

/// Output of one edge-detection run.
#[derive(Clone, Debug)]
pub struct EdgeDetectionResult {
    /// Binary Canny edge map.
    pub edges: GrayImage,
    /// All traced outer contours, including the ones below the area cut.
    pub contours: Vec<Contour>,
    /// Contours promoted to face detections. Score is the enclosed area.
    pub faces: Vec<FaceDetection>,
}

impl EdgeDetectionResult {
    pub fn found_face(&self) -> bool {
        !self.faces.is_empty()
    }
}

/// Contour-area face detector over a Canny edge map.
pub struct EdgeFaceDetector {
    params: EdgeDetectorParams,
}

impl EdgeFaceDetector {
    pub fn new(params: EdgeDetectorParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &EdgeDetectorParams {
        &self.params
    }

    /// Blur, run Canny, trace contours, and keep every contour whose
    /// enclosed area clears `min_face_area`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, src), fields(width = src.width, height = src.height))
    )]
    pub fn detect(&self, src: &GrayImageView<'_>) -> EdgeDetectionResult {
        let blurred = gaussian_blur(src, self.params.blur_kernel_size, self.params.blur_sigma);
        let edges = canny(
            &blurred.as_view(),
            self.params.low_threshold,
            self.params.high_threshold,
        );
        let contours = find_external_contours(&edges.as_view());

        let faces: Vec<FaceDetection> = contours
            .iter()
            .filter(|c| c.area() > self.params.min_face_area)
            .map(|c| FaceDetection {
                kind: DetectionKind::EdgeContour,
                bbox: c.bounding_rect(),
                score: c.area(),
            })
            .collect();

        log::debug!(
            "edge detect: {} contours, {} above area {}",
            contours.len(),
            faces.len(),
            self.params.min_face_area
        );

        EdgeDetectionResult {
            edges,
            contours,
            faces,
        }
    }
}

impl Default for EdgeFaceDetector {
    fn default() -> Self {
        Self::new(EdgeDetectorParams::default())
    }
}
