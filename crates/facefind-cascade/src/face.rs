use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use facefind_core::{DetectionKind, FaceDetection, GrayImageView, PixelRect};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::error::CascadeError;
use crate::params::FaceCascadeParams;

/// A face detector: grayscale view in, face boxes out.
///
/// Zero detections is a normal empty result, never an error.
pub trait FaceDetector {
    fn detect_faces(&self, src: &GrayImageView<'_>) -> Vec<FaceDetection>;
}

/// Multi-scale frontal-face detector backed by the pretrained SeetaFace
/// model, loaded through `rustface`.
pub struct SeetaFaceDetector {
    model: rustface::Model,
    params: FaceCascadeParams,
}

impl std::fmt::Debug for SeetaFaceDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeetaFaceDetector")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl SeetaFaceDetector {
    /// Load the model from a file path.
    ///
    /// A missing file is reported as `CascadeError::ModelNotFound` before any
    /// read is attempted.
    pub fn from_model_path(
        path: impl AsRef<Path>,
        params: FaceCascadeParams,
    ) -> Result<Self, CascadeError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CascadeError::ModelNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path)?;
        let model = rustface::read_model(BufReader::new(file))
            .map_err(|e| CascadeError::ModelLoad(e.to_string()))?;
        log::info!("loaded face model from {}", path.display());
        Ok(Self { model, params })
    }

    /// Load the model from an in-memory byte buffer (e.g. an embedded model).
    pub fn from_model_bytes(
        bytes: &[u8],
        params: FaceCascadeParams,
    ) -> Result<Self, CascadeError> {
        let model = rustface::read_model(std::io::Cursor::new(bytes))
            .map_err(|e| CascadeError::ModelLoad(e.to_string()))?;
        Ok(Self { model, params })
    }

    #[inline]
    pub fn params(&self) -> &FaceCascadeParams {
        &self.params
    }
}

impl FaceDetector for SeetaFaceDetector {
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, src), fields(width = src.width, height = src.height))
    )]
    fn detect_faces(&self, src: &GrayImageView<'_>) -> Vec<FaceDetection> {
        // The rustface detector is stateful per run, so build one per call
        // from the shared model.
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(self.params.min_face_size);
        if self.params.score_threshold > 0.0 {
            detector.set_score_thresh(self.params.score_threshold);
        }
        detector.set_pyramid_scale_factor(self.params.pyramid_scale_factor);
        detector.set_slide_window_step(self.params.window_step.0, self.params.window_step.1);

        let image = rustface::ImageData::new(src.data, src.width as u32, src.height as u32);
        let found = detector.detect(&image);
        log::debug!("cascade found {} faces", found.len());

        found
            .iter()
            .filter_map(|face| {
                let b = face.bbox();
                let rect = PixelRect::new(b.x(), b.y(), b.width(), b.height());
                // Detections near the border may stick out of the frame.
                rect.clip_to(src.width as u32, src.height as u32)
                    .map(|bbox| FaceDetection {
                        kind: DetectionKind::Cascade,
                        bbox,
                        score: face.score() as f32,
                    })
            })
            .collect()
    }
}
