use nalgebra::Point2;

use crate::shape::Shape;

/// Built-in mean face: 68 landmarks in iBUG order, normalized [0, 1]
/// coordinates relative to a face bounding box.
///
/// Used as the cascade's initial estimate and by tools that need a plausible
/// face layout without a trained model.
pub fn default_mean_shape() -> Shape {
    const POINTS: [(f32, f32); 68] = [
        // Jaw outline (0-16)
        (0.10, 0.35),
        (0.11, 0.45),
        (0.12, 0.55),
        (0.14, 0.65),
        (0.18, 0.73),
        (0.24, 0.80),
        (0.32, 0.85),
        (0.41, 0.88),
        (0.50, 0.89),
        (0.59, 0.88),
        (0.68, 0.85),
        (0.76, 0.80),
        (0.82, 0.73),
        (0.86, 0.65),
        (0.88, 0.55),
        (0.89, 0.45),
        (0.90, 0.35),
        // Right eyebrow (17-21)
        (0.20, 0.26),
        (0.25, 0.22),
        (0.32, 0.21),
        (0.38, 0.23),
        (0.43, 0.27),
        // Left eyebrow (22-26)
        (0.57, 0.27),
        (0.62, 0.23),
        (0.68, 0.21),
        (0.75, 0.22),
        (0.80, 0.26),
        // Nose bridge (27-30)
        (0.50, 0.32),
        (0.50, 0.40),
        (0.50, 0.48),
        (0.50, 0.55),
        // Nose base (31-35)
        (0.40, 0.58),
        (0.45, 0.60),
        (0.50, 0.62),
        (0.55, 0.60),
        (0.60, 0.58),
        // Right eye (36-41)
        (0.24, 0.32),
        (0.28, 0.29),
        (0.34, 0.29),
        (0.38, 0.33),
        (0.34, 0.35),
        (0.28, 0.35),
        // Left eye (42-47)
        (0.62, 0.33),
        (0.66, 0.29),
        (0.72, 0.29),
        (0.76, 0.32),
        (0.72, 0.35),
        (0.66, 0.35),
        // Outer lip (48-59)
        (0.32, 0.72),
        (0.38, 0.68),
        (0.44, 0.66),
        (0.50, 0.67),
        (0.56, 0.66),
        (0.62, 0.68),
        (0.68, 0.72),
        (0.62, 0.78),
        (0.56, 0.80),
        (0.50, 0.81),
        (0.44, 0.80),
        (0.38, 0.78),
        // Inner lip (60-67)
        (0.36, 0.72),
        (0.44, 0.70),
        (0.50, 0.70),
        (0.56, 0.70),
        (0.64, 0.72),
        (0.56, 0.74),
        (0.50, 0.75),
        (0.44, 0.74),
    ];

    Shape::new(POINTS.iter().map(|&(x, y)| Point2::new(x, y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_shape_has_68_normalized_points() {
        let shape = default_mean_shape();
        assert_eq!(shape.num_landmarks(), 68);
        for p in &shape.points {
            assert!((0.0..=1.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((0.0..=1.0).contains(&p.y), "y out of range: {}", p.y);
        }
    }

    #[test]
    fn mean_shape_is_roughly_symmetric() {
        let shape = default_mean_shape();
        // Chin center and nose tip sit on the vertical midline.
        assert_eq!(shape.points[8].x, 0.50);
        assert_eq!(shape.points[33].x, 0.50);
        // Eye centers mirror each other.
        let right_eye_x =
            (36..42).map(|i| shape.points[i].x).sum::<f32>() / 6.0;
        let left_eye_x =
            (42..48).map(|i| shape.points[i].x).sum::<f32>() / 6.0;
        assert!((right_eye_x + left_eye_x - 1.0).abs() < 0.02);
    }
}
