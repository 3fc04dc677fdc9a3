use facefind_core::{FaceDetection, GrayImageView, PixelRect};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::eyes::locate_eyes;
use crate::face::FaceDetector;
use crate::params::EyeSearchParams;

/// One face with the eye boxes found inside it, all in image coordinates.
#[derive(Clone, Debug)]
pub struct FaceFeatures {
    pub face: FaceDetection,
    pub eyes: Vec<PixelRect>,
}

/// Two-stage detector: a face pass, then an eye pass restricted to each
/// face region.
///
/// Eye search runs on the cropped face region, so its results come back in
/// region coordinates; they are translated to image coordinates and clipped
/// to the parent face box before being returned. Every eye rectangle
/// therefore lies within its face rectangle.
pub struct FeatureDetector<D: FaceDetector> {
    faces: D,
    eye_params: EyeSearchParams,
}

impl<D: FaceDetector> FeatureDetector<D> {
    pub fn new(faces: D, eye_params: EyeSearchParams) -> Self {
        Self { faces, eye_params }
    }

    #[inline]
    pub fn eye_params(&self) -> &EyeSearchParams {
        &self.eye_params
    }

    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, src), fields(width = src.width, height = src.height))
    )]
    pub fn detect(&self, src: &GrayImageView<'_>) -> Vec<FaceFeatures> {
        let faces = self.faces.detect_faces(src);
        log::debug!("feature pass over {} faces", faces.len());

        let mut out = Vec::with_capacity(faces.len());
        for face in faces {
            let Some(face_rect) = face.bbox.clip_to(src.width as u32, src.height as u32)
            else {
                continue;
            };
            let Some(roi) = src.crop(face_rect) else {
                continue;
            };

            let eyes = locate_eyes(&roi.as_view(), &self.eye_params)
                .into_iter()
                .filter_map(|eye| {
                    eye.translate(face_rect.x, face_rect.y).intersect(&face_rect)
                })
                .collect();

            out.push(FaceFeatures {
                face: FaceDetection {
                    bbox: face_rect,
                    ..face
                },
                eyes,
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facefind_core::{DetectionKind, GrayImage};

    /// Stub face stage returning a fixed box list.
    struct FixedFaces(Vec<FaceDetection>);

    impl FaceDetector for FixedFaces {
        fn detect_faces(&self, _src: &GrayImageView<'_>) -> Vec<FaceDetection> {
            self.0.clone()
        }
    }

    fn face_at(x: i32, y: i32, w: u32, h: u32) -> FaceDetection {
        FaceDetection {
            kind: DetectionKind::Cascade,
            bbox: PixelRect::new(x, y, w, h),
            score: 4.0,
        }
    }

    /// 140x140 image with a bright face patch at (20, 20)..(120, 120) and
    /// two dark pupils inside its eye band.
    fn test_image() -> GrayImage {
        GrayImage::from_fn(140, 140, |x, y| {
            let in_face =
                (20..120).contains(&x) && (20..120).contains(&y);
            if !in_face {
                return 60;
            }
            let dark = |cx: f32, cy: f32| {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                (dx * dx + dy * dy).sqrt() < 8.0
            };
            // Pupils at face-relative (30, 35) and (70, 35).
            if dark(50.0, 55.0) || dark(90.0, 55.0) {
                20
            } else {
                220
            }
        })
    }

    #[test]
    fn eyes_are_remapped_inside_the_face_box() {
        let img = test_image();
        let detector = FeatureDetector::new(
            FixedFaces(vec![face_at(20, 20, 100, 100)]),
            EyeSearchParams::default(),
        );

        let results = detector.detect(&img.as_view());
        assert_eq!(results.len(), 1);

        let features = &results[0];
        assert_eq!(features.eyes.len(), 2);
        for eye in &features.eyes {
            assert!(
                features.face.bbox.contains_rect(eye),
                "eye {eye:?} escapes face {:?}",
                features.face.bbox
            );
        }

        // Image-coordinate pupil centers are covered.
        assert!(features.eyes[0].contains_point(50, 55));
        assert!(features.eyes[1].contains_point(90, 55));
    }

    #[test]
    fn face_box_is_clipped_to_the_image() {
        let img = test_image();
        let detector = FeatureDetector::new(
            FixedFaces(vec![face_at(100, 100, 80, 80)]),
            EyeSearchParams::default(),
        );

        let results = detector.detect(&img.as_view());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].face.bbox, PixelRect::new(100, 100, 40, 40));
    }

    #[test]
    fn face_outside_the_image_is_dropped() {
        let img = test_image();
        let detector = FeatureDetector::new(
            FixedFaces(vec![face_at(500, 500, 50, 50)]),
            EyeSearchParams::default(),
        );
        assert!(detector.detect(&img.as_view()).is_empty());
    }

    #[test]
    fn no_faces_means_no_features() {
        let img = test_image();
        let detector =
            FeatureDetector::new(FixedFaces(Vec::new()), EyeSearchParams::default());
        assert!(detector.detect(&img.as_view()).is_empty());
    }
}
