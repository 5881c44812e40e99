//! Bresenham line drawing on the pixel buffer.
//!
//! Integer error accumulation only, so a given pair of endpoints always
//! produces the same pixel path. Off-canvas pixels are dropped by the
//! buffer's bounds check; lines need no separate clipping step.

use crate::display::{Color, PixelBuffer};
use crate::geometry::{Point, Polygon};

/// Draw a line segment between two points, endpoints included.
///
/// Steep lines (|dy| > |dx|) are walked in swapped (y, x) space so the
/// main loop always steps the dominant axis by one, then coordinates are
/// un-swapped on write. Endpoints are order-normalized first, so the
/// emitted pixel set does not depend on argument order.
pub fn draw_line(buffer: &mut PixelBuffer, p0: Point, p1: Point, color: Color) {
    let steep = (p1.y - p0.y).abs() > (p1.x - p0.x).abs();

    let (mut x0, mut y0, mut x1, mut y1) = if steep {
        (p0.y, p0.x, p1.y, p1.x)
    } else {
        (p0.x, p0.y, p1.x, p1.y)
    };

    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let y_step = if y0 < y1 { 1 } else { -1 };

    let mut error = dx / 2;
    let mut y = y0;

    for x in x0..=x1 {
        if steep {
            buffer.set_pixel(y, x, color);
        } else {
            buffer.set_pixel(x, y, color);
        }

        error -= dy;
        if error < 0 {
            y += y_step;
            error += dx;
        }
    }
}

/// Draw a polygon outline, connecting the last vertex back to the first.
pub fn draw_polygon(buffer: &mut PixelBuffer, polygon: &Polygon, color: Color) {
    for (a, b) in polygon.edges() {
        draw_line(buffer, a, b, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = 0xFF0000FF;

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
    fn test_reference_bresenham_trace() {
        // dx=4, dy=2, error starts at dx/2=2: minor-axis steps land after
        // x=1 and x=3.
        let mut buffer = PixelBuffer::with_size(8, 8);
        draw_line(&mut buffer, Point::new(0, 0), Point::new(4, 2), RED);
        assert_eq!(
            lit_pixels(&buffer),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]
        );
    }

    #[test]
    fn test_pixel_set_symmetric_under_endpoint_swap() {
        let cases = [
            (Point::new(0, 0), Point::new(7, 3)),
            (Point::new(2, 7), Point::new(5, 0)),
            (Point::new(0, 0), Point::new(0, 6)),
            (Point::new(1, 1), Point::new(6, 6)),
        ];
        for (a, b) in cases {
            let mut forward = PixelBuffer::with_size(8, 8);
            let mut backward = PixelBuffer::with_size(8, 8);
            draw_line(&mut forward, a, b, RED);
            draw_line(&mut backward, b, a, RED);
            assert_eq!(
                lit_pixels(&forward),
                lit_pixels(&backward),
                "asymmetric line {:?} -> {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_endpoints_are_drawn() {
        let mut buffer = PixelBuffer::with_size(16, 16);
        draw_line(&mut buffer, Point::new(2, 3), Point::new(11, 9), RED);
        assert_eq!(buffer.get_pixel(2, 3), Some(RED));
        assert_eq!(buffer.get_pixel(11, 9), Some(RED));
    }

    #[test]
    fn test_vertical_and_horizontal_lines() {
        let mut buffer = PixelBuffer::with_size(8, 8);
        draw_line(&mut buffer, Point::new(3, 1), Point::new(3, 5), RED);
        for y in 1..=5 {
            assert_eq!(buffer.get_pixel(3, y), Some(RED));
        }

        let mut buffer = PixelBuffer::with_size(8, 8);
        draw_line(&mut buffer, Point::new(1, 4), Point::new(6, 4), RED);
        for x in 1..=6 {
            assert_eq!(buffer.get_pixel(x, 4), Some(RED));
        }
    }

    #[test]
    fn test_single_pixel_line() {
        let mut buffer = PixelBuffer::with_size(8, 8);
        draw_line(&mut buffer, Point::new(4, 4), Point::new(4, 4), RED);
        assert_eq!(lit_pixels(&buffer), vec![(4, 4)]);
    }

    #[test]
    fn test_off_canvas_line_is_clipped_pixel_by_pixel() {
        let mut buffer = PixelBuffer::with_size(8, 8);
        draw_line(&mut buffer, Point::new(-4, 2), Point::new(12, 2), RED);
        // Only the on-canvas portion of the row is written
        for x in 0..8 {
            assert_eq!(buffer.get_pixel(x, 2), Some(RED));
        }
        assert_eq!(lit_pixels(&buffer).len(), 8);
    }

    #[test]
    fn test_polygon_outline_closes() {
        let mut buffer = PixelBuffer::with_size(16, 16);
        let triangle = Polygon::from_vertices(vec![
            Point::new(2, 2),
            Point::new(12, 2),
            Point::new(2, 12),
        ]);
        draw_polygon(&mut buffer, &triangle, RED);
        // A pixel on the closing edge (2,12) -> (2,2)
        assert_eq!(buffer.get_pixel(2, 7), Some(RED));
    }
}
