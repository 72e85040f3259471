//! PointStore: the ordered coordinate list behind the pad.

use super::point::Point;

/// Ordered list of points. Insertion order is render order.
///
/// Indices are the only identity a point has. Any index-taking operation
/// re-checks the index against the current length, so a stale index from
/// an earlier frame is ignored instead of touching the wrong slot or
/// panicking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point at the tail. `x` and `y` must already be validated.
    pub fn append(&mut self, x: f64, y: f64, color: Option<&str>) -> usize {
        self.points.push(Point::new(x, y, color));
        self.points.len() - 1
    }

    /// Remove the point at `index`, shifting later points down by one.
    ///
    /// Returns the removed point, or `None` if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Point> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Move the point at `index`, keeping its color.
    ///
    /// Returns `false` without touching the list when `index` is out of range.
    pub fn replace_at(&mut self, index: usize, x: f64, y: f64) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                p.x = x;
                p.y = y;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
