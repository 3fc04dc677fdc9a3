use crate::image::GrayImageView;
use crate::rect::PixelRect;

/// Summed-area table over a grayscale view.
///
/// The table has one extra row and column of zeros so that rectangle sums
/// need no boundary branches.
#[derive(Clone, Debug)]
pub struct IntegralImage {
    width: usize,  // source width
    height: usize, // source height
    sums: Vec<u64>, // (width + 1) * (height + 1)
}

impl IntegralImage {
    pub fn new(src: &GrayImageView<'_>) -> Self {
        let w1 = src.width + 1;
        let h1 = src.height + 1;
        let mut sums = vec![0u64; w1 * h1];

        for y in 0..src.height {
            let mut row_sum = 0u64;
            for x in 0..src.width {
                row_sum += src.data[y * src.width + x] as u64;
                sums[(y + 1) * w1 + (x + 1)] = sums[y * w1 + (x + 1)] + row_sum;
            }
        }

        Self {
            width: src.width,
            height: src.height,
            sums,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sum of intensities inside `rect`, clipped to the source image.
    pub fn sum_rect(&self, rect: PixelRect) -> u64 {
        let Some(r) = rect.clip_to(self.width as u32, self.height as u32) else {
            return 0;
        };
        let w1 = self.width + 1;
        let (x0, y0) = (r.x as usize, r.y as usize);
        let (x1, y1) = (r.right() as usize, r.bottom() as usize);

        self.sums[y1 * w1 + x1] + self.sums[y0 * w1 + x0]
            - self.sums[y0 * w1 + x1]
            - self.sums[y1 * w1 + x0]
    }

    /// Mean intensity inside `rect`, 0.0 for an empty clip.
    pub fn mean_rect(&self, rect: PixelRect) -> f32 {
        let Some(r) = rect.clip_to(self.width as u32, self.height as u32) else {
            return 0.0;
        };
        let area = r.area();
        if area == 0 {
            return 0.0;
        }
        self.sum_rect(r) as f32 / area as f32
    }
}
