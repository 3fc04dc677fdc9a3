use facefind_core::{GrayImageView, PixelRect};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A traced boundary: the ordered pixel positions of one outer border.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<Point2<i32>>,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enclosed area by the shoelace formula.
    ///
    /// A closed boundary traced around a blob encloses the blob interior;
    /// an open curve traced out and back encloses next to nothing.
    pub fn area(&self) -> f32 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut acc = 0i64;
        for (a, b) in self
            .points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .take(self.points.len())
        {
            acc += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
        }
        acc.unsigned_abs() as f32 / 2.0
    }

    /// Tight axis-aligned bounding box.
    pub fn bounding_rect(&self) -> PixelRect {
        let mut min_x = i32::MAX;
        let mut min_y = i32::MAX;
        let mut max_x = i32::MIN;
        let mut max_y = i32::MIN;
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        if min_x > max_x {
            return PixelRect::new(0, 0, 0, 0);
        }
        PixelRect::new(
            min_x,
            min_y,
            (max_x - min_x + 1) as u32,
            (max_y - min_y + 1) as u32,
        )
    }
}

// Moore neighborhood in clockwise order starting from west.
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

/// Trace the outer borders of all foreground (non-zero) regions.
///
/// Scans row-major; the first unvisited foreground pixel of a component is
/// the top-left point of its outer border. The whole component is
/// flood-marked before tracing, so each component yields exactly one contour
/// and inner (hole) borders never start a trace of their own.
pub fn find_external_contours(map: &GrayImageView<'_>) -> Vec<Contour> {
    let (w, h) = (map.width as i32, map.height as i32);
    let mut visited = vec![false; map.width * map.height];
    let mut contours = Vec::new();

    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + x) as usize;
            if map.get(x, y) == 0 || visited[idx] {
                continue;
            }
            flood_mark(map, x, y, &mut visited);
            let contour = trace_border(map, x, y);
            if !contour.points.is_empty() {
                contours.push(contour);
            }
        }
    }
    contours
}

/// Mark every pixel 8-connected to `(x, y)` as visited.
///
/// The component containing `(x, y)` is entirely unvisited when this is
/// called, so `visited` doubles as the flood frontier guard.
fn flood_mark(map: &GrayImageView<'_>, x: i32, y: i32, visited: &mut [bool]) {
    let w = map.width as i32;
    let mut stack = vec![(x, y)];
    visited[(y * w + x) as usize] = true;
    while let Some((cx, cy)) = stack.pop() {
        for (dx, dy) in NEIGHBORS {
            let (nx, ny) = (cx + dx, cy + dy);
            if map.get(nx, ny) == 0 {
                continue;
            }
            let ni = (ny * w + nx) as usize;
            if !visited[ni] {
                visited[ni] = true;
                stack.push((nx, ny));
            }
        }
    }
}

/// Moore-neighbor border following with Jacob's stopping criterion.
///
/// The start pixel must be the top-left pixel of its component (west and
/// north neighbors background), which the row-major scan guarantees.
fn trace_border(map: &GrayImageView<'_>, start_x: i32, start_y: i32) -> Contour {
    let mut points = Vec::new();
    let start = (start_x, start_y);
    // Entered from the west background pixel.
    let mut backtrack = (start_x - 1, start_y);
    let mut current = start;
    let start_backtrack = backtrack;

    points.push(Point2::new(start_x, start_y));

    // Safety cap: a border cannot be longer than 4 pixels per cell.
    let max_steps = 4 * map.width * map.height;

    for _ in 0..max_steps {
        // Index of the backtrack cell in the neighborhood of `current`.
        let rel = (backtrack.0 - current.0, backtrack.1 - current.1);
        let from = NEIGHBORS.iter().position(|&d| d == rel).unwrap_or(0);

        let mut advanced = false;
        for step in 1..=NEIGHBORS.len() {
            let dir = NEIGHBORS[(from + step) % NEIGHBORS.len()];
            let next = (current.0 + dir.0, current.1 + dir.1);
            if map.get(next.0, next.1) != 0 {
                if next == start && backtrack == start_backtrack && points.len() > 1 {
                    return Contour { points };
                }
                points.push(Point2::new(next.0, next.1));
                current = next;
                advanced = true;
                break;
            }
            backtrack = next;
        }

        if !advanced {
            // Isolated pixel.
            return Contour { points };
        }
    }

    log::warn!("border trace at ({start_x}, {start_y}) hit the step cap");
    Contour { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facefind_core::GrayImage;

    fn view_contours(img: &GrayImage) -> Vec<Contour> {
        find_external_contours(&img.as_view())
    }

    #[test]
    fn empty_map_has_no_contours() {
        let img = GrayImage::filled(8, 8, 0);
        assert!(view_contours(&img).is_empty());
    }

    #[test]
    fn filled_square_traces_one_border() {
        let img = GrayImage::from_fn(12, 12, |x, y| {
            if (2..10).contains(&x) && (3..9).contains(&y) {
                255
            } else {
                0
            }
        });
        let contours = view_contours(&img);
        assert_eq!(contours.len(), 1);

        let rect = contours[0].bounding_rect();
        assert_eq!(rect, PixelRect::new(2, 3, 8, 6));

        // Border trace encloses (w-1)*(h-1) in shoelace terms.
        let area = contours[0].area();
        assert!((area - 35.0).abs() < 1e-3, "area = {area}");
    }

    #[test]
    fn two_separate_blobs_trace_separately() {
        let img = GrayImage::from_fn(20, 8, |x, y| {
            let left = (1..5).contains(&x) && (1..5).contains(&y);
            let right = (10..16).contains(&x) && (2..7).contains(&y);
            if left || right {
                255
            } else {
                0
            }
        });
        let contours = view_contours(&img);
        assert_eq!(contours.len(), 2);
    }

    #[test]
    fn single_pixel_contour() {
        let mut img = GrayImage::filled(5, 5, 0);
        img.put(2, 2, 255);
        let contours = view_contours(&img);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 1);
        assert_eq!(contours[0].area(), 0.0);
    }

    #[test]
    fn thin_ring_encloses_interior_area() {
        // 1px-wide circle of radius 10: the traced border should enclose
        // roughly pi * r^2.
        let (cx, cy, r) = (15i32, 15i32, 10f32);
        let img = GrayImage::from_fn(31, 31, |x, y| {
            let d = (((x as f32 - cx as f32).powi(2) + (y as f32 - cy as f32).powi(2)).sqrt()
                - r)
                .abs();
            if d < 0.6 {
                255
            } else {
                0
            }
        });
        let contours = view_contours(&img);
        assert_eq!(contours.len(), 1);
        let area = contours[0].area();
        let expected = std::f32::consts::PI * r * r;
        assert!(
            (area - expected).abs() / expected < 0.25,
            "area {area} vs expected {expected}"
        );
    }
}
