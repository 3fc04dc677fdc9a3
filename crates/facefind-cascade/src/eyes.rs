use facefind_core::{GrayImageView, IntegralImage, PixelRect};

use crate::params::EyeSearchParams;

#[derive(Clone, Copy, Debug)]
struct EyeCandidate {
    rect: PixelRect,
    contrast: f32,
}

/// Locate eye-like spots inside a face region.
///
/// Slides a window over the upper band of the region and scores each
/// position by how much darker the centered pupil patch is than the rest of
/// the window. Overlapping candidates are suppressed and at most
/// `max_eyes` survive, ordered left to right. Returned rectangles are
/// relative to the region origin.
pub fn locate_eyes(roi: &GrayImageView<'_>, params: &EyeSearchParams) -> Vec<PixelRect> {
    let (w, h) = (roi.width as i32, roi.height as i32);
    if w < 8 || h < 8 {
        return Vec::new();
    }

    let win = ((params.window_frac * w as f32).round() as i32).clamp(4, w);
    let step = ((params.step_frac * w as f32).round() as i32).max(1);

    let y0 = ((params.band_top_frac * h as f32).round() as i32).clamp(0, h - 1);
    let y1 = ((params.band_bottom_frac * h as f32).round() as i32).clamp(y0, h);
    if y1 - y0 < win {
        return Vec::new();
    }

    let table = IntegralImage::new(roi);

    // Centered pupil patch: half the window side.
    let inner = (win / 2).max(2);
    let inset = (win - inner) / 2;

    let mut candidates = Vec::new();
    let mut y = y0;
    while y + win <= y1 {
        let mut x = 0;
        while x + win <= w {
            let window = PixelRect::new(x, y, win as u32, win as u32);
            let pupil = PixelRect::new(x + inset, y + inset, inner as u32, inner as u32);

            let sum_window = table.sum_rect(window) as f32;
            let sum_pupil = table.sum_rect(pupil) as f32;
            let area_window = window.area() as f32;
            let area_pupil = pupil.area() as f32;

            let mean_pupil = sum_pupil / area_pupil;
            let mean_surround = (sum_window - sum_pupil) / (area_window - area_pupil);

            let contrast = mean_surround - mean_pupil;
            if contrast >= params.min_contrast {
                candidates.push(EyeCandidate {
                    rect: window,
                    contrast,
                });
            }
            x += step;
        }
        y += step;
    }

    // Greedy suppression: best contrast first, drop overlaps.
    candidates.sort_by(|a, b| b.contrast.total_cmp(&a.contrast));
    let mut kept: Vec<EyeCandidate> = Vec::new();
    for cand in candidates {
        if kept.len() >= params.max_eyes {
            break;
        }
        if kept
            .iter()
            .all(|k| k.rect.iou(&cand.rect) <= params.max_overlap)
        {
            kept.push(cand);
        }
    }

    kept.sort_by_key(|c| c.rect.x);
    kept.into_iter().map(|c| c.rect).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use facefind_core::GrayImage;

    /// Bright 100x100 face patch with two dark pupils in the eye band.
    fn synthetic_face_patch() -> GrayImage {
        GrayImage::from_fn(100, 100, |x, y| {
            let dark = |cx: f32, cy: f32| {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                (dx * dx + dy * dy).sqrt() < 8.0
            };
            if dark(30.0, 35.0) || dark(70.0, 35.0) {
                20
            } else {
                220
            }
        })
    }

    #[test]
    fn finds_two_eyes_left_to_right() {
        let patch = synthetic_face_patch();
        let eyes = locate_eyes(&patch.as_view(), &EyeSearchParams::default());
        assert_eq!(eyes.len(), 2);

        let (left, right) = (&eyes[0], &eyes[1]);
        assert!(left.x < right.x);

        // Each window covers its pupil center.
        assert!(left.contains_point(30, 35));
        assert!(right.contains_point(70, 35));
    }

    #[test]
    fn uniform_patch_has_no_eyes() {
        let patch = GrayImage::filled(80, 80, 200);
        let eyes = locate_eyes(&patch.as_view(), &EyeSearchParams::default());
        assert!(eyes.is_empty());
    }

    #[test]
    fn tiny_region_is_skipped() {
        let patch = GrayImage::filled(6, 6, 100);
        assert!(locate_eyes(&patch.as_view(), &EyeSearchParams::default()).is_empty());
    }
}
