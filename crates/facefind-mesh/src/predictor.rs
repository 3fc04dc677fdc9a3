use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use facefind_core::{GrayImageView, PixelRect};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::align::{find_similarity_transform, SimilarityTransform};
use crate::error::MeshError;
use crate::shape::Shape;
use crate::tree::{SplitFeature, TreeEnsemble};

/// Cascaded shape predictor: a mean shape refined by a sequence of
/// regression-tree ensembles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeshPredictor {
    mean_shape: Shape,
    cascade: Vec<TreeEnsemble>,
    num_landmarks: usize,
}

impl MeshPredictor {
    /// Read a model from disk.
    ///
    /// A missing file is reported as `MeshError::ModelNotFound` before any
    /// read is attempted.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MeshError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MeshError::ModelNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path)?;
        let model: Self = bincode::deserialize_from(BufReader::new(file))?;
        model.validate()?;
        log::info!(
            "loaded mesh model from {} ({} landmarks, {} stages)",
            path.display(),
            model.num_landmarks,
            model.cascade.len()
        );
        Ok(model)
    }

    /// Write the model to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MeshError> {
        let file = File::create(path)?;
        bincode::serialize_into(BufWriter::new(file), self)?;
        Ok(())
    }

    #[inline]
    pub fn num_landmarks(&self) -> usize {
        self.num_landmarks
    }

    #[inline]
    pub fn num_stages(&self) -> usize {
        self.cascade.len()
    }

    fn validate(&self) -> Result<(), MeshError> {
        if self.mean_shape.is_empty() {
            return Err(MeshError::InvalidModel("empty mean shape".into()));
        }
        if self.mean_shape.num_landmarks() != self.num_landmarks {
            return Err(MeshError::InvalidModel(format!(
                "mean shape has {} landmarks, model declares {}",
                self.mean_shape.num_landmarks(),
                self.num_landmarks
            )));
        }
        for (i, ensemble) in self.cascade.iter().enumerate() {
            if ensemble.num_landmarks != self.num_landmarks {
                return Err(MeshError::InvalidModel(format!(
                    "cascade stage {i} predicts {} landmarks, model declares {}",
                    ensemble.num_landmarks, self.num_landmarks
                )));
            }
        }
        Ok(())
    }

    /// Predict landmark positions for one detected face box.
    ///
    /// Starts from the mean shape scaled into `face_rect` and lets every
    /// cascade stage nudge it; probe offsets are re-oriented each stage by
    /// the similarity transform between the initial and current shape.
    /// Output coordinates are image pixels.
    pub fn predict(&self, img: &GrayImageView<'_>, face_rect: &PixelRect) -> Shape {
        let initial = self.mean_shape.denormalized_into(face_rect);
        let mut current = initial.clone();

        for ensemble in &self.cascade {
            let tform = find_similarity_transform(&initial, &current);
            let delta = ensemble.predict(|feature| {
                probe_difference(img, feature, &current, face_rect, &tform)
            });

            // Deltas are normalized; scale to the face box.
            for (p, d) in current.points.iter_mut().zip(delta.points.iter()) {
                p.x += d.x * face_rect.width as f32;
                p.y += d.y * face_rect.height as f32;
            }
        }
        current
    }
}

/// Intensity difference between the two probe pixels of a split feature.
fn probe_difference(
    img: &GrayImageView<'_>,
    feature: &SplitFeature,
    shape: &Shape,
    face_rect: &PixelRect,
    tform: &SimilarityTransform,
) -> f32 {
    let probe = |anchor: u16, offset: [f32; 2]| -> f32 {
        let anchor = shape
            .points
            .get(anchor as usize)
            .copied()
            .unwrap_or_else(|| shape.centroid());
        let scaled = Vector2::new(
            offset[0] * face_rect.width as f32,
            offset[1] * face_rect.height as f32,
        );
        let rotated = tform.apply_vector(scaled);
        let x = (anchor.x + rotated.x).round() as i32;
        let y = (anchor.y + rotated.y).round() as i32;
        img.get(x, y) as f32
    };

    probe(feature.anchor_a, feature.offset_a) - probe(feature.anchor_b, feature.offset_b)
}

/// Builder for programmatic models (tests, tools, training pipelines).
#[derive(Default)]
pub struct MeshPredictorBuilder {
    mean_shape: Option<Shape>,
    cascade: Vec<TreeEnsemble>,
}

impl MeshPredictorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mean_shape(mut self, shape: Shape) -> Self {
        self.mean_shape = Some(shape);
        self
    }

    pub fn add_stage(mut self, ensemble: TreeEnsemble) -> Self {
        self.cascade.push(ensemble);
        self
    }

    pub fn build(self) -> Result<MeshPredictor, MeshError> {
        let mean_shape = self
            .mean_shape
            .ok_or_else(|| MeshError::InvalidModel("missing mean shape".into()))?;
        if self.cascade.is_empty() {
            return Err(MeshError::InvalidModel(
                "cascade needs at least one stage".into(),
            ));
        }
        let model = MeshPredictor {
            num_landmarks: mean_shape.num_landmarks(),
            mean_shape,
            cascade: self.cascade,
        };
        model.validate()?;
        Ok(model)
    }
}
