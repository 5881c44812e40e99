//! Region filling: flood fill and scan-line polygon fill.

use super::draw_line;
use crate::display::{Color, PixelBuffer};
use crate::geometry::{Point, Polygon};

/// Flood fill the 4-connected region around `seed` with `color`.
///
/// Spreads until it reaches pixels that already carry the fill color, so
/// the enclosing outline must be drawn in the same color beforehand.
/// Propagation never enters row or column zero and stops at the canvas
/// extents, matching the outline-bounded use case.
///
/// Uses an explicit work stack instead of recursion; a large region would
/// otherwise exhaust the call stack.
pub fn flood_fill(buffer: &mut PixelBuffer, seed: Point, color: Color) {
    let w = buffer.width() as i32;
    let h = buffer.height() as i32;

    let mut pending = vec![seed];

    while let Some(p) = pending.pop() {
        if p.x <= 0 || p.x >= w || p.y <= 0 || p.y >= h {
            continue;
        }
        if buffer.get_pixel(p.x, p.y) == Some(color) {
            continue;
        }

        buffer.set_pixel(p.x, p.y, color);

        pending.push(Point::new(p.x, p.y - 1));
        pending.push(Point::new(p.x, p.y + 1));
        pending.push(Point::new(p.x - 1, p.y));
        pending.push(Point::new(p.x + 1, p.y));
    }
}

/// Fill a polygon with the scan-line algorithm.
///
/// For each row strictly between the polygon's vertical extremes, collect
/// the x-intersection of every non-horizontal edge whose y-span straddles
/// the row, sort them, drop exact duplicates, and connect consecutive
/// pairs with horizontal line segments (even-odd rule). An odd leftover
/// intersection is dropped.
pub fn scanline_fill(buffer: &mut PixelBuffer, polygon: &Polygon, color: Color) {
    if !polygon.is_closed() {
        return;
    }
    let Some((min_y, max_y)) = polygon.y_bounds() else {
        return;
    };

    // Reused per row
    let mut intersections: Vec<i32> = Vec::with_capacity(polygon.vertices.len());

    for y in (min_y + 1)..max_y {
        intersections.clear();

        for (p1, p2) in polygon.edges() {
            let straddles = (y >= p1.y && y <= p2.y) || (y <= p1.y && y >= p2.y);
            if !straddles || p1.y == p2.y {
                continue;
            }

            let x = if p1.x == p2.x {
                // Vertical edge contributes its constant x
                p1.x
            } else {
                // x = (y - c) / m for the edge line y = m·x + c
                let m = f64::from(p2.y - p1.y) / f64::from(p2.x - p1.x);
                let c = f64::from(p2.y) - m * f64::from(p2.x);
                ((f64::from(y) - c) / m).round() as i32
            };

            intersections.push(x);
        }

        intersections.sort_unstable();
        intersections.dedup();

        for pair in intersections.chunks_exact(2) {
            draw_line(
                buffer,
                Point::new(pair[0], y),
                Point::new(pair[1], y),
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::draw_polygon;

    const WHITE: Color = 0xFFFFFFFF;

    fn lit_pixels(buffer: &PixelBuffer) -> Vec<(i32, i32)> {
        let mut lit = Vec::new();
        for y in 0..buffer.height() as i32 {
            for x in 0..buffer.width() as i32 {
                if buffer.get_pixel(x, y) != Some(0) {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_flood_fill_stays_inside_outline() {
        let mut buffer = PixelBuffer::with_size(20, 20);
        let rect = Polygon::rect(4, 4, 12, 12);
        draw_polygon(&mut buffer, &rect, WHITE);
        flood_fill(&mut buffer, Point::new(8, 8), WHITE);

        // Exactly the outline plus its interior is lit
        for y in 0..20 {
            for x in 0..20 {
                let inside = (4..=12).contains(&x) && (4..=12).contains(&y);
                let expected = if inside { Some(WHITE) } else { Some(0) };
                assert_eq!(buffer.get_pixel(x, y), expected, "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_flood_fill_seed_on_filled_pixel_is_a_no_op() {
        let mut buffer = PixelBuffer::with_size(20, 20);
        let rect = Polygon::rect(4, 4, 12, 12);
        draw_polygon(&mut buffer, &rect, WHITE);
        let before = lit_pixels(&buffer);
        flood_fill(&mut buffer, Point::new(4, 8), WHITE);
        assert_eq!(lit_pixels(&buffer), before);
    }

    #[test]
    fn test_flood_fill_excludes_canvas_edge_rows() {
        // No outline at all: the fill floods the strict interior and
        // leaves row/column zero and the outer edge untouched.
        let mut buffer = PixelBuffer::with_size(6, 6);
        flood_fill(&mut buffer, Point::new(3, 3), WHITE);
        for i in 0..6 {
            assert_eq!(buffer.get_pixel(i, 0), Some(0));
            assert_eq!(buffer.get_pixel(0, i), Some(0));
        }
        for y in 1..6 {
            for x in 1..6 {
                assert_eq!(buffer.get_pixel(x, y), Some(WHITE));
            }
        }
    }

    #[test]
    fn test_scanline_fills_rectangle_interior_rows() {
        let mut buffer = PixelBuffer::with_size(20, 20);
        let rect = Polygon::rect(4, 4, 12, 12);
        scanline_fill(&mut buffer, &rect, WHITE);

        // Rows strictly between the extremes carry full spans
        for y in 5..12 {
            for x in 4..=12 {
                assert_eq!(buffer.get_pixel(x, y), Some(WHITE), "at ({}, {})", x, y);
            }
        }
        // The extreme rows themselves are not drawn
        for x in 0..20 {
            assert_eq!(buffer.get_pixel(x, 4), Some(0));
            assert_eq!(buffer.get_pixel(x, 12), Some(0));
        }
    }

    #[test]
    fn test_scanline_and_flood_fill_agree() {
        // Outline + flood fill must light the same pixel set as
        // scan-line fill + outline, for the same convex polygon.
        let rect = Polygon::rect(3, 3, 14, 11);

        let mut flooded = PixelBuffer::with_size(20, 20);
        draw_polygon(&mut flooded, &rect, WHITE);
        flood_fill(&mut flooded, Point::new(8, 7), WHITE);

        let mut scanned = PixelBuffer::with_size(20, 20);
        scanline_fill(&mut scanned, &rect, WHITE);
        draw_polygon(&mut scanned, &rect, WHITE);

        assert_eq!(lit_pixels(&flooded), lit_pixels(&scanned));
    }

    #[test]
    fn test_scanline_triangle_respects_even_odd_pairing() {
        let mut buffer = PixelBuffer::with_size(20, 20);
        let triangle = Polygon::from_vertices(vec![
            Point::new(2, 2),
            Point::new(14, 2),
            Point::new(2, 14),
        ]);
        scanline_fill(&mut buffer, &triangle, WHITE);

        // Interior point is filled, a point past the hypotenuse is not
        assert_eq!(buffer.get_pixel(4, 5), Some(WHITE));
        assert_eq!(buffer.get_pixel(13, 13), Some(0));
    }

    #[test]
    fn test_scanline_ignores_degenerate_polygon() {
        let mut buffer = PixelBuffer::with_size(8, 8);
        let degenerate =
            Polygon::from_vertices(vec![Point::new(1, 1), Point::new(6, 6)]);
        scanline_fill(&mut buffer, &degenerate, WHITE);
        assert!(lit_pixels(&buffer).is_empty());
    }
}
