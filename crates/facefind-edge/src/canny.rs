use facefind_core::{GrayImage, GrayImageView};

const EDGE: u8 = 255;
const WEAK: u8 = 1;

/// Canny edge detection: Sobel gradients, non-maximum suppression along the
/// gradient direction, double thresholding, and hysteresis from strong edges.
///
/// Returns a binary (0/255) edge map of the input dimensions.
pub fn canny(src: &GrayImageView<'_>, low_threshold: f32, high_threshold: f32) -> GrayImage {
    let (w, h) = (src.width, src.height);
    if w == 0 || h == 0 {
        return GrayImage {
            width: w,
            height: h,
            data: Vec::new(),
        };
    }

    let (gx, gy) = sobel_gradients(src);
    let magnitude: Vec<f32> = gx
        .iter()
        .zip(gy.iter())
        .map(|(&x, &y)| (x * x + y * y).sqrt())
        .collect();

    let (low, high) = if low_threshold <= high_threshold {
        (low_threshold, high_threshold)
    } else {
        (high_threshold, low_threshold)
    };

    // Non-maximum suppression, then classify weak/strong.
    let mut map = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            let m = magnitude[i];
            if m < low {
                continue;
            }
            let (dx, dy) = quantized_direction(gx[i], gy[i]);
            let ahead = mag_at(&magnitude, w, h, x as i32 + dx, y as i32 + dy);
            let behind = mag_at(&magnitude, w, h, x as i32 - dx, y as i32 - dy);
            if m < ahead || m < behind {
                continue;
            }
            map[i] = if m >= high { EDGE } else { WEAK };
        }
    }

    // Hysteresis: keep weak pixels 8-connected to a strong one.
    let mut stack: Vec<(i32, i32)> = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if map[y * w + x] == EDGE {
                stack.push((x as i32, y as i32));
            }
        }
    }
    while let Some((x, y)) = stack.pop() {
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                    continue;
                }
                let ni = ny as usize * w + nx as usize;
                if map[ni] == WEAK {
                    map[ni] = EDGE;
                    stack.push((nx, ny));
                }
            }
        }
    }
    for v in &mut map {
        if *v == WEAK {
            *v = 0;
        }
    }

    GrayImage {
        width: w,
        height: h,
        data: map,
    }
}

/// 3x3 Sobel derivatives over the whole image, with replicated borders.
fn sobel_gradients(src: &GrayImageView<'_>) -> (Vec<f32>, Vec<f32>) {
    let (w, h) = (src.width, src.height);
    let mut gx = vec![0f32; w * h];
    let mut gy = vec![0f32; w * h];

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let p = |dx: i32, dy: i32| {
                src.get(
                    (x + dx).clamp(0, w as i32 - 1),
                    (y + dy).clamp(0, h as i32 - 1),
                ) as f32
            };

            let sx = (p(1, -1) + 2.0 * p(1, 0) + p(1, 1))
                - (p(-1, -1) + 2.0 * p(-1, 0) + p(-1, 1));
            let sy = (p(-1, 1) + 2.0 * p(0, 1) + p(1, 1))
                - (p(-1, -1) + 2.0 * p(0, -1) + p(1, -1));

            let i = y as usize * w + x as usize;
            gx[i] = sx;
            gy[i] = sy;
        }
    }
    (gx, gy)
}

/// Quantize a gradient vector into one of four step directions
/// (horizontal, vertical, two diagonals).
fn quantized_direction(gx: f32, gy: f32) -> (i32, i32) {
    let angle = gy.atan2(gx).to_degrees();
    let angle = if angle < 0.0 { angle + 180.0 } else { angle };
    match angle {
        a if !(22.5..157.5).contains(&a) => (1, 0),
        a if a < 67.5 => (1, 1),
        a if a < 112.5 => (0, 1),
        _ => (-1, 1),
    }
}

#[inline]
fn mag_at(magnitude: &[f32], w: usize, h: usize, x: i32, y: i32) -> f32 {
    if x < 0 || y < 0 || x >= w as i32 || y >= h as i32 {
        return 0.0;
    }
    magnitude[y as usize * w + x as usize]
}
