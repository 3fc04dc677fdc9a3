use serde::{Deserialize, Serialize};

/// Settings for the multi-scale face cascade.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FaceCascadeParams {
    /// Smallest face side to report, in pixels.
    pub min_face_size: u32,
    /// Classifier score cut; detections below it are dropped.
    pub score_threshold: f64,
    /// Image pyramid downscale step, in (0, 1).
    pub pyramid_scale_factor: f32,
    /// Sliding window stride in x and y.
    pub window_step: (u32, u32),
}

impl Default for FaceCascadeParams {
    fn default() -> Self {
        Self {
            min_face_size: 30,
            score_threshold: 2.0,
            pyramid_scale_factor: 0.8,
            window_step: (4, 4),
        }
    }
}

/// Settings for eye localization inside a face region.
///
/// Eyes are searched in a horizontal band of the face box and scored by how
/// much darker a centered pupil patch is than its surround.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EyeSearchParams {
    /// Top of the search band, as a fraction of the face height.
    pub band_top_frac: f32,
    /// Bottom of the search band, as a fraction of the face height.
    pub band_bottom_frac: f32,
    /// Eye window side, as a fraction of the face width.
    pub window_frac: f32,
    /// Scan stride, as a fraction of the face width.
    pub step_frac: f32,
    /// Minimal surround-minus-center intensity contrast to accept.
    pub min_contrast: f32,
    /// Keep at most this many eyes per face.
    pub max_eyes: usize,
    /// Suppress overlapping candidates above this IoU.
    pub max_overlap: f32,
}

impl Default for EyeSearchParams {
    fn default() -> Self {
        Self {
            band_top_frac: 0.18,
            band_bottom_frac: 0.55,
            window_frac: 0.25,
            step_frac: 0.04,
            min_contrast: 10.0,
            max_eyes: 2,
            max_overlap: 0.2,
        }
    }
}
