mod clip;
mod transform;

pub use clip::sutherland_hodgman;
pub use transform::rotate_point;

use serde::{Deserialize, Serialize};

/// A point in canvas coordinate space.
///
/// Coordinates are plain integers and may be negative or past the canvas
/// edge while a shape is being transformed; only pixel writes are
/// bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A polygon defined by vertices in clockwise order, implicitly closed
/// (the last vertex connects back to the first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A polygon needs at least 3 vertices to enclose any area.
    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Iterate edges as vertex pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Vertical extent (min_y, max_y), or None for an empty polygon.
    pub fn y_bounds(&self) -> Option<(i32, i32)> {
        let first = self.vertices.first()?;
        let mut min_y = first.y;
        let mut max_y = first.y;
        for v in &self.vertices {
            min_y = min_y.min(v.y);
            max_y = max_y.max(v.y);
        }
        Some((min_y, max_y))
    }

    /// New polygon with every vertex shifted by `offset`. Non-destructive.
    pub fn translated(&self, offset: Point) -> Polygon {
        Polygon {
            vertices: self
                .vertices
                .iter()
                .map(|v| Point::new(v.x + offset.x, v.y + offset.y))
                .collect(),
        }
    }

    /// Clockwise rectangle, the usual clip region for the canvas bounds.
    pub fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Polygon {
        Polygon::from_vertices(vec![
            Point::new(x0, y0),
            Point::new(x0, y1),
            Point::new(x1, y1),
            Point::new(x1, y0),
        ])
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new()
    }
}
