//! Edge-based face detection over synthetic or photographic images.
//!
//! The pipeline mirrors a classic contour heuristic: Gaussian blur, Canny
//! edge detection, outer-border contour tracing, and an area threshold that
//! promotes large closed contours to face detections.

mod blur;
mod canny;
mod contour;
mod detector;
mod params;
mod synthetic;

pub use blur::gaussian_blur;
pub use canny::canny;
pub use contour::{find_external_contours, Contour};
pub use detector::{EdgeDetectionResult, EdgeFaceDetector};
pub use params::EdgeDetectorParams;
pub use synthetic::render_sample_face;
