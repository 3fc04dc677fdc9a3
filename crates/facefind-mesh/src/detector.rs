use facefind_core::{FaceDetection, GrayImageView, PixelRect};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::predictor::MeshPredictor;
use crate::shape::Shape;

/// Settings for the mesh pass.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MeshParams {
    /// Estimate landmarks for at most this many faces per image.
    pub max_faces: usize,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self { max_faces: 5 }
    }
}

/// Landmarks for one face, in image pixel coordinates.
#[derive(Clone, Debug)]
pub struct FaceMesh {
    pub bbox: PixelRect,
    pub landmarks: Shape,
}

impl FaceMesh {
    /// Landmarks normalized against the image size.
    pub fn normalized_landmarks(
        &self,
        img_width: u32,
        img_height: u32,
    ) -> Vec<nalgebra::Point2<f32>> {
        self.landmarks.normalized(img_width, img_height)
    }
}

/// Runs a landmark predictor over detected face boxes.
pub struct MeshDetector {
    predictor: MeshPredictor,
    params: MeshParams,
}

impl MeshDetector {
    pub fn new(predictor: MeshPredictor, params: MeshParams) -> Self {
        Self { predictor, params }
    }

    #[inline]
    pub fn predictor(&self) -> &MeshPredictor {
        &self.predictor
    }

    #[inline]
    pub fn params(&self) -> &MeshParams {
        &self.params
    }

    /// Predict a landmark set for each face box, up to `max_faces`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, src, faces), fields(faces = faces.len()))
    )]
    pub fn detect(&self, src: &GrayImageView<'_>, faces: &[FaceDetection]) -> Vec<FaceMesh> {
        if faces.len() > self.params.max_faces {
            log::debug!(
                "limiting mesh pass to {} of {} faces",
                self.params.max_faces,
                faces.len()
            );
        }
        faces
            .iter()
            .take(self.params.max_faces)
            .filter_map(|face| {
                let bbox = face.bbox.clip_to(src.width as u32, src.height as u32)?;
                let landmarks = self.predictor.predict(src, &bbox);
                Some(FaceMesh { bbox, landmarks })
            })
            .collect()
    }
}
