use crate::error::CoreError;
use crate::rect::PixelRect;

/// Borrowed view over a row-major grayscale buffer.
#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

impl<'a> GrayImageView<'a> {
    /// Build a view, validating the buffer length.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, CoreError> {
        let expected = width
            .checked_mul(height)
            .ok_or(CoreError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(CoreError::InvalidBuffer {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Pixel intensity at `(x, y)`, 0 outside the image.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> u8 {
        get_gray(self, x, y)
    }

    /// Copy the pixels covered by `rect` (clipped to bounds) into an owned image.
    ///
    /// Returns `None` when the clipped rectangle is empty.
    pub fn crop(&self, rect: PixelRect) -> Option<GrayImage> {
        let clipped = rect.clip_to(self.width as u32, self.height as u32)?;
        let (x0, y0) = (clipped.x as usize, clipped.y as usize);
        let (w, h) = (clipped.width as usize, clipped.height as usize);

        let mut data = Vec::with_capacity(w * h);
        for row in y0..y0 + h {
            let start = row * self.width + x0;
            data.extend_from_slice(&self.data[start..start + w]);
        }
        Some(GrayImage {
            width: w,
            height: h,
            data,
        })
    }
}

/// Owned row-major grayscale image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Build an image from a raw buffer, validating its length.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, CoreError> {
        let expected = width
            .checked_mul(height)
            .ok_or(CoreError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(CoreError::InvalidBuffer {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Uniformly filled image.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Build an image by evaluating `f(x, y)` per pixel.
    pub fn from_fn<F: Fn(usize, usize) -> u8>(width: usize, height: usize, f: F) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn as_view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> u8 {
        get_gray(&self.as_view(), x, y)
    }

    #[inline]
    pub fn put(&mut self, x: usize, y: usize, value: u8) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = value;
        }
    }
}

#[inline]
fn get_gray(src: &GrayImageView<'_>, x: i32, y: i32) -> u8 {
    if x < 0 || y < 0 || x >= src.width as i32 || y >= src.height as i32 {
        return 0;
    }
    src.data[y as usize * src.width + x as usize]
}

/// Bilinear sample at a subpixel position.
#[inline]
pub fn sample_bilinear(src: &GrayImageView<'_>, x: f32, y: f32) -> f32 {
    let x0 = x.floor() as i32;
    let y0 = y.floor() as i32;
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = get_gray(src, x0, y0) as f32;
    let p10 = get_gray(src, x0 + 1, y0) as f32;
    let p01 = get_gray(src, x0, y0 + 1) as f32;
    let p11 = get_gray(src, x0 + 1, y0 + 1) as f32;

    let a = p00 + fx * (p10 - p00);
    let b = p01 + fx * (p11 - p01);
    a + fy * (b - a)
}

#[inline]
pub fn sample_bilinear_u8(src: &GrayImageView<'_>, x: f32, y: f32) -> u8 {
    sample_bilinear(src, x, y).clamp(0.0, 255.0) as u8
}
