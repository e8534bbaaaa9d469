use tiny_skia::{Path, PathBuilder};

/// An axis aligned rectangle in integer canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}

/// A closed polygon made of integer points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<(i32, i32)>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, x: i32, y: i32) {
        self.points.push((x, y));
    }

    pub fn points(&self) -> &[(i32, i32)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Option<Rect> {
        let (&first, rest) = self.points.split_first()?;
        let (mut min, mut max) = (first, first);
        for &(x, y) in rest {
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
        Some(Rect::new(min.0, min.1, max.0 - min.0, max.1 - min.1))
    }

    /// Even-odd containment test, matching how the polygon is filled.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        crossings(&self.points, x, y) % 2 == 1
    }

    /// The closed outline, shifted by `offset` on both axes. `None` for
    /// polygons with fewer than two points.
    pub(crate) fn path(&self, offset: f32) -> Option<Path> {
        if self.points.len() < 2 {
            return None;
        }
        let (&(x0, y0), rest) = self.points.split_first()?;
        let mut pb = PathBuilder::with_capacity(self.points.len() + 1, self.points.len());
        pb.move_to(x0 as f32 + offset, y0 as f32 + offset);
        for &(x, y) in rest {
            pb.line_to(x as f32 + offset, y as f32 + offset);
        }
        pb.close();
        pb.finish()
    }
}

impl FromIterator<(i32, i32)> for Polygon {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

fn crossings(points: &[(i32, i32)], x: f64, y: f64) -> usize {
    let mut count = 0;
    for (i, &(x0, y0)) in points.iter().enumerate() {
        let (x1, y1) = points[(i + 1) % points.len()];
        let (x0, y0, x1, y1) = (x0 as f64, y0 as f64, x1 as f64, y1 as f64);
        if (y0 <= y) != (y1 <= y) {
            let cx = x0 + (y - y0) * (x1 - x0) / (y1 - y0);
            if cx > x {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn polygon_bounds_and_contains() {
        let poly: Polygon = [(0, 0), (10, 0), (10, 10), (0, 10)].into_iter().collect();
        assert_eq!(poly.bounds(), Some(Rect::new(0, 0, 10, 10)));
        assert!(poly.contains(5.0, 5.0));
        assert!(!poly.contains(15.0, 5.0));
        assert_eq!(Polygon::new().bounds(), None);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(2, 3, 4, 5);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 7));
        assert!(!r.contains(5, 8));
        assert!(Rect::new(0, 0, 0, 4).is_empty());
    }

    #[test]
    fn path_is_offset_and_needs_two_points() {
        let mut poly = Polygon::new();
        poly.add_point(1, 1);
        assert!(poly.path(0.0).is_none());
        poly.add_point(5, 3);
        let bounds = poly.path(0.5).unwrap().bounds();
        assert_eq!((bounds.left(), bounds.top()), (1.5, 1.5));
        assert_eq!((bounds.right(), bounds.bottom()), (5.5, 3.5));
    }
}
