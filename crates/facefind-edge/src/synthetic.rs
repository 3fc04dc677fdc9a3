use facefind_core::{Canvas, Rgb};

/// Render the synthetic sample face: a filled white oval with two dark eyes
/// and a mouth arc on a black 300x300 background.
pub fn render_sample_face() -> Canvas {
    let mut canvas = Canvas::filled(300, 300, Rgb::BLACK);

    // Face: filled white oval.
    canvas.fill_ellipse(150, 150, 100, 120, Rgb::WHITE);

    // Eyes: filled black discs.
    canvas.fill_disc(110, 130, 15, Rgb::BLACK);
    canvas.fill_disc(190, 130, 15, Rgb::BLACK);

    // Mouth: lower half-ellipse arc, stroke width 5.
    canvas.stroke_arc(150, 180, 40, 20, 0.0, 180.0, Rgb::BLACK, 5);

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_face_geometry() {
        let canvas = render_sample_face();
        assert_eq!(canvas.width(), 300);
        assert_eq!(canvas.height(), 300);

        // Face interior is white, eyes and background are dark.
        assert_eq!(canvas.get(150, 150), Some(Rgb::WHITE));
        assert_eq!(canvas.get(110, 130), Some(Rgb::BLACK));
        assert_eq!(canvas.get(190, 130), Some(Rgb::BLACK));
        assert_eq!(canvas.get(5, 5), Some(Rgb::BLACK));

        // Mouth arc bottom sits on the ellipse at (150, 200).
        assert_eq!(canvas.get(150, 200), Some(Rgb::BLACK));
    }
}
