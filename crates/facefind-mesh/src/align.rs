use nalgebra::{Point2, Vector2};

use crate::shape::Shape;

/// A 2D similarity transform (uniform scale plus rotation) between two
/// shapes, used to orient feature probe offsets to the current shape
/// estimate.
#[derive(Clone, Copy, Debug)]
pub struct SimilarityTransform {
    /// scale * cos(theta)
    pub a: f32,
    /// scale * sin(theta)
    pub b: f32,
}

impl SimilarityTransform {
    pub const IDENTITY: SimilarityTransform = SimilarityTransform { a: 1.0, b: 0.0 };

    /// Rotate and scale a direction vector (no translation).
    #[inline]
    pub fn apply_vector(&self, v: Vector2<f32>) -> Vector2<f32> {
        Vector2::new(self.a * v.x - self.b * v.y, self.b * v.x + self.a * v.y)
    }
}

/// Least-squares similarity transform mapping the centered points of `from`
/// onto the centered points of `to`.
///
/// Degenerate inputs (mismatched or empty shapes, a collapsed source) fall
/// back to the identity.
pub fn find_similarity_transform(from: &Shape, to: &Shape) -> SimilarityTransform {
    if from.points.len() != to.points.len() || from.points.is_empty() {
        return SimilarityTransform::IDENTITY;
    }

    let mf = from.centroid();
    let mt = to.centroid();

    let centered = |p: &Point2<f32>, m: &Point2<f32>| Vector2::new(p.x - m.x, p.y - m.y);

    let mut dot = 0f32;
    let mut cross = 0f32;
    let mut norm = 0f32;
    for (f, t) in from.points.iter().zip(to.points.iter()) {
        let cf = centered(f, &mf);
        let ct = centered(t, &mt);
        dot += cf.x * ct.x + cf.y * ct.y;
        cross += cf.x * ct.y - cf.y * ct.x;
        norm += cf.x * cf.x + cf.y * cf.y;
    }

    if norm <= f32::EPSILON {
        return SimilarityTransform::IDENTITY;
    }

    SimilarityTransform {
        a: dot / norm,
        b: cross / norm,
    }
}
