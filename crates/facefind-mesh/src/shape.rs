use facefind_core::PixelRect;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// An ordered set of landmark points.
///
/// Depending on context the coordinates are either normalized to [0, 1]
/// (model space) or in image pixels (prediction output).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub points: Vec<Point2<f32>>,
}

impl Shape {
    pub fn new(points: Vec<Point2<f32>>) -> Self {
        Self { points }
    }

    pub fn zeros(n: usize) -> Self {
        Self {
            points: vec![Point2::origin(); n],
        }
    }

    pub fn num_landmarks(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Accumulate another shape's deltas into this one.
    pub fn add_delta(&mut self, delta: &Shape) {
        debug_assert_eq!(self.points.len(), delta.points.len());
        for (p, d) in self.points.iter_mut().zip(delta.points.iter()) {
            p.x += d.x;
            p.y += d.y;
        }
    }

    /// Map normalized [0, 1] points into pixel coordinates inside `rect`.
    pub fn denormalized_into(&self, rect: &PixelRect) -> Shape {
        let points = self
            .points
            .iter()
            .map(|p| {
                Point2::new(
                    rect.x as f32 + p.x * rect.width as f32,
                    rect.y as f32 + p.y * rect.height as f32,
                )
            })
            .collect();
        Shape { points }
    }

    /// Pixel coordinates scaled into [0, 1] against an image size.
    pub fn normalized(&self, img_width: u32, img_height: u32) -> Vec<Point2<f32>> {
        let (w, h) = (img_width.max(1) as f32, img_height.max(1) as f32);
        self.points
            .iter()
            .map(|p| Point2::new(p.x / w, p.y / h))
            .collect()
    }

    /// Centroid of the point set; origin for an empty shape.
    pub fn centroid(&self) -> Point2<f32> {
        if self.points.is_empty() {
            return Point2::origin();
        }
        let n = self.points.len() as f32;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0f32, 0.0f32), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point2::new(sx / n, sy / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn delta_accumulates() {
        let mut shape = Shape::new(vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)]);
        let delta = Shape::new(vec![Point2::new(0.5, -0.5), Point2::new(-1.0, 1.0)]);
        shape.add_delta(&delta);
        assert_relative_eq!(shape.points[0].x, 1.5);
        assert_relative_eq!(shape.points[1].y, 5.0);
    }

    #[test]
    fn denormalize_maps_unit_square_to_rect() {
        let shape = Shape::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        let rect = PixelRect::new(10, 20, 100, 50);
        let mapped = shape.denormalized_into(&rect);
        assert_relative_eq!(mapped.points[0].x, 10.0);
        assert_relative_eq!(mapped.points[0].y, 20.0);
        assert_relative_eq!(mapped.points[1].x, 110.0);
        assert_relative_eq!(mapped.points[1].y, 70.0);
    }

    #[test]
    fn normalized_divides_by_image_size() {
        let shape = Shape::new(vec![Point2::new(50.0, 25.0)]);
        let norm = shape.normalized(100, 50);
        assert_relative_eq!(norm[0].x, 0.5);
        assert_relative_eq!(norm[0].y, 0.5);
    }

    #[test]
    fn centroid_of_square() {
        let shape = Shape::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ]);
        let c = shape.centroid();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
    }
}
