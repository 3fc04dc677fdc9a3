//! Face landmark mesh estimation.
//!
//! A pretrained cascade of regression-tree ensembles refines a mean face
//! shape inside a detected face box into a full landmark set ("One
//! Millisecond Face Alignment with an Ensemble of Regression Trees",
//! Kazemi & Sullivan, 2014). The `topology` module carries the fixed
//! 68-point connection lists used to draw the mesh contours.

mod align;
mod detector;
mod error;
mod mean;
mod predictor;
mod shape;
mod tree;

pub mod topology;

pub use align::{find_similarity_transform, SimilarityTransform};
pub use detector::{FaceMesh, MeshDetector, MeshParams};
pub use error::MeshError;
pub use mean::default_mean_shape;
pub use predictor::{MeshPredictor, MeshPredictorBuilder};
pub use shape::Shape;
pub use tree::{RegressionTree, SplitFeature, TreeEnsemble, TreeNode};
