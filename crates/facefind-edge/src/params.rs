use serde::{Deserialize, Serialize};

/// Parameters for the edge/contour face detector.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EdgeDetectorParams {
    /// Gaussian blur kernel side length (odd).
    pub blur_kernel_size: usize,
    /// Gaussian sigma; `<= 0` derives it from the kernel size.
    pub blur_sigma: f32,
    /// Canny lower hysteresis threshold.
    pub low_threshold: f32,
    /// Canny upper hysteresis threshold.
    pub high_threshold: f32,
    /// Minimal enclosed contour area (in pixels) to accept as a face.
    pub min_face_area: f32,
}

impl Default for EdgeDetectorParams {
    fn default() -> Self {
        Self {
            blur_kernel_size: 5,
            blur_sigma: 0.0,
            low_threshold: 50.0,
            high_threshold: 150.0,
            min_face_area: 1000.0,
        }
    }
}
