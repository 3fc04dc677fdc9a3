use crate::error::CoreError;
use crate::image::GrayImage;
use crate::rect::PixelRect;

/// An RGB color triple.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
    pub const RED: Rgb = Rgb([255, 0, 0]);
    pub const GREEN: Rgb = Rgb([0, 255, 0]);
    pub const BLUE: Rgb = Rgb([0, 0, 255]);
}

/// Owned RGB8 raster used for synthetic images and annotation overlays.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<u8>, // row-major RGB, len = w*h*3
}

impl Canvas {
    /// Canvas filled with a solid color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            data.extend_from_slice(&color.0);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap an existing RGB buffer, validating its length.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, CoreError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
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

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Consume the canvas, returning the raw RGB buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let i = (y as usize * self.width + x as usize) * 3;
        Some(Rgb([self.data[i], self.data[i + 1], self.data[i + 2]]))
    }

    /// Write one pixel; out-of-bounds writes are ignored.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 3;
        self.data[i..i + 3].copy_from_slice(&color.0);
    }

    /// Bresenham line segment.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Connected line segments through the given points.
    pub fn draw_polyline(&mut self, points: &[(i32, i32)], color: Rgb) {
        for pair in points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            self.draw_line(x0, y0, x1, y1, color);
        }
    }

    /// Rectangle outline with the given stroke thickness (grows inward).
    pub fn stroke_rect(&mut self, rect: PixelRect, color: Rgb, thickness: u32) {
        let t = thickness.min(rect.width / 2 + 1).min(rect.height / 2 + 1) as i32;
        for i in 0..t {
            let x0 = rect.x + i;
            let y0 = rect.y + i;
            let x1 = rect.right() - 1 - i;
            let y1 = rect.bottom() - 1 - i;
            if x1 < x0 || y1 < y0 {
                break;
            }
            for x in x0..=x1 {
                self.put(x, y0, color);
                self.put(x, y1, color);
            }
            for y in y0..=y1 {
                self.put(x0, y, color);
                self.put(x1, y, color);
            }
        }
    }

    /// Filled axis-aligned ellipse.
    pub fn fill_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgb) {
        if rx <= 0 || ry <= 0 {
            return;
        }
        let (rx2, ry2) = (rx as i64 * rx as i64, ry as i64 * ry as i64);
        for dy in -ry..=ry {
            for dx in -rx..=rx {
                // inside when dx^2/rx^2 + dy^2/ry^2 <= 1
                if (dx as i64 * dx as i64) * ry2 + (dy as i64 * dy as i64) * rx2 <= rx2 * ry2 {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Filled circle.
    pub fn fill_disc(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) {
        self.fill_ellipse(cx, cy, radius, radius, color);
    }

    /// Stroked elliptical arc from `start_deg` to `end_deg` (clockwise in
    /// raster coordinates, angles in degrees) with the given stroke width.
    pub fn stroke_arc(
        &mut self,
        cx: i32,
        cy: i32,
        rx: i32,
        ry: i32,
        start_deg: f32,
        end_deg: f32,
        color: Rgb,
        thickness: u32,
    ) {
        if rx <= 0 || ry <= 0 || end_deg <= start_deg {
            return;
        }
        let pen = (thickness as i32 / 2).max(0);
        // Fine enough stepping that consecutive stamps overlap on the
        // largest radius.
        let steps = ((end_deg - start_deg).abs() * 2.0).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let a = (start_deg + (end_deg - start_deg) * i as f32 / steps as f32).to_radians();
            let x = cx + (rx as f32 * a.cos()).round() as i32;
            let y = cy + (ry as f32 * a.sin()).round() as i32;
            if pen == 0 {
                self.put(x, y, color);
            } else {
                self.fill_disc(x, y, pen, color);
            }
        }
    }

    /// Convert to grayscale with BT.601 luma weights.
    pub fn to_gray(&self) -> GrayImage {
        let mut data = Vec::with_capacity(self.width * self.height);
        for px in self.data.chunks_exact(3) {
            let luma =
                0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
            data.push(luma.round().clamp(0.0, 255.0) as u8);
        }
        GrayImage {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_and_get() {
        let c = Canvas::filled(2, 2, Rgb::RED);
        assert_eq!(c.get(0, 0), Some(Rgb::RED));
        assert_eq!(c.get(2, 0), None);
    }

    #[test]
    fn from_raw_validates_length() {
        assert!(Canvas::from_raw(2, 2, vec![0; 11]).is_err());
        assert!(Canvas::from_raw(2, 2, vec![0; 12]).is_ok());
    }

    #[test]
    fn line_endpoints_are_painted() {
        let mut c = Canvas::filled(10, 10, Rgb::BLACK);
        c.draw_line(1, 1, 8, 5, Rgb::WHITE);
        assert_eq!(c.get(1, 1), Some(Rgb::WHITE));
        assert_eq!(c.get(8, 5), Some(Rgb::WHITE));
    }

    #[test]
    fn stroke_rect_paints_border_not_center() {
        let mut c = Canvas::filled(10, 10, Rgb::BLACK);
        c.stroke_rect(PixelRect::new(2, 2, 6, 6), Rgb::GREEN, 1);
        assert_eq!(c.get(2, 2), Some(Rgb::GREEN));
        assert_eq!(c.get(7, 7), Some(Rgb::GREEN));
        assert_eq!(c.get(4, 4), Some(Rgb::BLACK));
    }

    #[test]
    fn ellipse_fills_center_and_respects_extent() {
        let mut c = Canvas::filled(21, 21, Rgb::BLACK);
        c.fill_ellipse(10, 10, 6, 4, Rgb::WHITE);
        assert_eq!(c.get(10, 10), Some(Rgb::WHITE));
        assert_eq!(c.get(16, 10), Some(Rgb::WHITE));
        assert_eq!(c.get(10, 14), Some(Rgb::WHITE));
        assert_eq!(c.get(17, 10), Some(Rgb::BLACK));
        assert_eq!(c.get(10, 15), Some(Rgb::BLACK));
    }

    #[test]
    fn gray_conversion_uses_luma_weights() {
        let c = Canvas::filled(1, 1, Rgb([255, 0, 0]));
        let g = c.to_gray();
        assert_eq!(g.data[0], 76); // 0.299 * 255 rounded
    }
}
