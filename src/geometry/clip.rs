//! Sutherland-Hodgman polygon clipping.
//!
//! Clips a subject polygon against each directed edge of a convex clip
//! region in turn. With clockwise winding a point is inside a clip edge
//! when its signed cross product against the edge is negative.

use super::{Point, Polygon};

/// Signed side of `p` relative to the directed edge p0 -> p1.
/// Negative means inside for clockwise clip regions.
#[inline]
fn side(p0: Point, p1: Point, p: Point) -> i64 {
    let ex = (p1.x - p0.x) as i64;
    let ey = (p1.y - p0.y) as i64;
    ex * (p.y - p0.y) as i64 - ey * (p.x - p0.x) as i64
}

/// Intersection of the infinite lines through (p0, p1) and (p2, p3).
///
/// Standard cross-ratio form in integer arithmetic. Returns None when the
/// lines are parallel; the inside/outside case split makes that unreachable
/// for edges that actually cross the clip line, but the guard keeps the
/// division well-defined.
fn line_intersection(p0: Point, p1: Point, p2: Point, p3: Point) -> Option<Point> {
    let a = p0.x as i64 * p1.y as i64 - p0.y as i64 * p1.x as i64;
    let b = p2.x as i64 * p3.y as i64 - p2.y as i64 * p3.x as i64;
    let dx0 = (p0.x - p1.x) as i64;
    let dy0 = (p0.y - p1.y) as i64;
    let dx1 = (p2.x - p3.x) as i64;
    let dy1 = (p2.y - p3.y) as i64;

    let den = dx0 * dy1 - dy0 * dx1;
    if den == 0 {
        return None;
    }

    let x = (a * dx1 - dx0 * b) / den;
    let y = (a * dy1 - dy0 * b) / den;
    Some(Point::new(x as i32, y as i32))
}

/// One clipping pass against the single clip edge p0 -> p1.
/// Replaces the subject's vertex list with the clipped result.
fn clip_edge(subject: &mut Polygon, p0: Point, p1: Point) {
    let verts = &subject.vertices;
    let n = verts.len();
    let mut out = Vec::with_capacity(n + 1);

    for i in 0..n {
        let pi = verts[i];
        let pk = verts[(i + 1) % n];

        let i_inside = side(p0, p1, pi) < 0;
        let k_inside = side(p0, p1, pk) < 0;

        if i_inside && k_inside {
            // Both inside: keep the second point
            out.push(pk);
        } else if !i_inside && k_inside {
            // Entering: emit the crossing, then the second point
            if let Some(p) = line_intersection(p0, p1, pi, pk) {
                out.push(p);
            }
            out.push(pk);
        } else if i_inside && !k_inside {
            // Leaving: emit only the crossing
            if let Some(p) = line_intersection(p0, p1, pi, pk) {
                out.push(p);
            }
        }
        // Both outside: emit nothing
    }

    subject.vertices = out;
}

/// Clip `subject` against every edge of the convex clockwise `clipper`,
/// replacing its vertex list in place. The result may be empty when the
/// polygons do not overlap.
pub fn sutherland_hodgman(subject: &mut Polygon, clipper: &Polygon) {
    let n = clipper.vertices.len();
    for i in 0..n {
        let p0 = clipper.vertices[i];
        let p1 = clipper.vertices[(i + 1) % n];
        clip_edge(subject, p0, p1);
    }
}
