use facefind_core::{GrayImage, GrayImageView};

/// Separable Gaussian blur.
///
/// `sigma <= 0` derives the value from the kernel size the same way OpenCV
/// does: `0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`.
pub fn gaussian_blur(src: &GrayImageView<'_>, kernel_size: usize, sigma: f32) -> GrayImage {
    let ksize = kernel_size.max(1) | 1; // force odd
    let radius = (ksize / 2) as i32;
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
    };

    let kernel = gaussian_kernel(ksize, sigma);

    // Horizontal pass into an f32 scratch buffer, then vertical pass.
    let (w, h) = (src.width, src.height);
    let mut horiz = vec![0f32; w * h];
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let mut acc = 0f32;
            for (k, weight) in kernel.iter().enumerate() {
                let sx = x + k as i32 - radius;
                acc += weight * src.get(sx.clamp(0, w as i32 - 1), y) as f32;
            }
            horiz[y as usize * w + x as usize] = acc;
        }
    }

    let mut data = vec![0u8; w * h];
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let mut acc = 0f32;
            for (k, weight) in kernel.iter().enumerate() {
                let sy = (y + k as i32 - radius).clamp(0, h as i32 - 1);
                acc += weight * horiz[sy as usize * w + x as usize];
            }
            data[y as usize * w + x as usize] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }

    GrayImage {
        width: w,
        height: h,
        data,
    }
}

fn gaussian_kernel(ksize: usize, sigma: f32) -> Vec<f32> {
    let radius = (ksize / 2) as i32;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|d| (-(d * d) as f32 / denom).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}
