use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle (top-left corner plus size).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// One past the bottom row.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.right() && y < self.bottom()
    }

    /// True when `other` lies entirely within `self`.
    pub fn contains_rect(&self, other: &PixelRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Intersection of two rectangles, `None` when disjoint or degenerate.
    pub fn intersect(&self, other: &PixelRect) -> Option<PixelRect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(PixelRect::new(x0, y0, (x1 - x0) as u32, (y1 - y0) as u32))
    }

    /// Rectangle moved by `(dx, dy)`.
    pub fn translate(&self, dx: i32, dy: i32) -> PixelRect {
        PixelRect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Clip to an image of the given size; `None` when nothing remains.
    pub fn clip_to(&self, img_width: u32, img_height: u32) -> Option<PixelRect> {
        self.intersect(&PixelRect::new(0, 0, img_width, img_height))
    }

    /// Intersection over union, 0.0 when disjoint.
    pub fn iou(&self, other: &PixelRect) -> f32 {
        let Some(inter) = self.intersect(other) else {
            return 0.0;
        };
        let inter_area = inter.area() as f32;
        let union = (self.area() + other.area()) as f32 - inter_area;
        if union <= 0.0 {
            0.0
        } else {
            inter_area / union
        }
    }
}

/// Which detector family produced a detection.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionKind {
    /// Contour of an edge map passed the area threshold.
    EdgeContour,
    /// Multi-scale pretrained cascade.
    Cascade,
    /// Landmark-mesh estimation.
    Mesh,
}

/// One detected face: a bounding box plus a detector-specific score.
///
/// For `EdgeContour` the score is the contour area in pixels; for `Cascade`
/// it is the classifier score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceDetection {
    pub kind: DetectionKind,
    pub bbox: PixelRect,
    pub score: f32,
}
