//! Draw detection results onto `image::RgbImage` buffers.
//!
//! Colors follow the classic annotation scheme: blue face rectangles, green
//! eye rectangles and mesh lines.

use facefind_cascade::FaceFeatures;
use facefind_core::{Canvas, FaceDetection, Rgb};
use facefind_mesh::{topology, FaceMesh};

/// Face bounding boxes.
pub const FACE_COLOR: Rgb = Rgb([0, 0, 255]);
/// Eye boxes and mesh contour lines.
pub const FEATURE_COLOR: Rgb = Rgb([0, 255, 0]);

/// Rectangle stroke width used for all box annotations.
pub const BOX_THICKNESS: u32 = 2;

/// Run a drawing closure against the image through a core canvas.
fn with_canvas(img: &mut image::RgbImage, draw: impl FnOnce(&mut Canvas)) {
    let (w, h) = (img.width() as usize, img.height() as usize);
    // An RgbImage buffer is w*h*3 by construction, so this cannot fail.
    let Ok(mut canvas) = Canvas::from_raw(w, h, img.as_raw().clone()) else {
        return;
    };
    draw(&mut canvas);
    if let Some(back) = image::RgbImage::from_raw(w as u32, h as u32, canvas.into_raw()) {
        *img = back;
    }
}

/// Outline each detected face.
pub fn draw_face_boxes(img: &mut image::RgbImage, faces: &[FaceDetection], color: Rgb) {
    with_canvas(img, |canvas| {
        for face in faces {
            canvas.stroke_rect(face.bbox, color, BOX_THICKNESS);
        }
    });
}

/// Outline faces in blue and their eyes in green.
pub fn draw_face_features(img: &mut image::RgbImage, features: &[FaceFeatures]) {
    with_canvas(img, |canvas| {
        for f in features {
            canvas.stroke_rect(f.face.bbox, FACE_COLOR, BOX_THICKNESS);
            for eye in &f.eyes {
                canvas.stroke_rect(*eye, FEATURE_COLOR, BOX_THICKNESS);
            }
        }
    });
}

/// Draw the landmark contour lines of each mesh.
pub fn draw_meshes(img: &mut image::RgbImage, meshes: &[FaceMesh]) {
    let connections = topology::contour_connections();
    with_canvas(img, |canvas| {
        for mesh in meshes {
            for &(a, b) in &connections {
                let (Some(pa), Some(pb)) = (
                    mesh.landmarks.points.get(a as usize),
                    mesh.landmarks.points.get(b as usize),
                ) else {
                    continue;
                };
                canvas.draw_line(
                    pa.x.round() as i32,
                    pa.y.round() as i32,
                    pb.x.round() as i32,
                    pb.y.round() as i32,
                    FEATURE_COLOR,
                );
            }
        }
    });
}

/// Convert a core canvas into an `image` crate buffer for saving.
pub fn canvas_to_image(canvas: Canvas) -> Option<image::RgbImage> {
    let (w, h) = (canvas.width() as u32, canvas.height() as u32);
    image::RgbImage::from_raw(w, h, canvas.into_raw())
}
