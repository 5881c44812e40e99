//! Point rotation. Polygon translation lives on `Polygon` itself.

use super::Point;

/// Rotate a point about the origin by `radians`, truncating to integer
/// coordinates.
///
/// To rotate about an arbitrary center, translate the point so the center
/// sits at the origin, rotate, then translate back. That composition is
/// deliberately left to the caller.
pub fn rotate_point(p: Point, radians: f32) -> Point {
    let (sin, cos) = radians.sin_cos();
    let x = p.x as f32;
    let y = p.y as f32;
    Point::new((cos * x - sin * y) as i32, (sin * x + cos * y) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rotate_zero_angle_is_identity() {
        let p = Point::new(17, -4);
        assert_eq!(rotate_point(p, 0.0), p);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        // (10, 0) -> (0, 10) for a positive quarter turn, give or take
        // one unit of float truncation.
        let r = rotate_point(Point::new(10, 0), FRAC_PI_2);
        assert!(r.x.abs() <= 1, "x was {}", r.x);
        assert!((r.y - 10).abs() <= 1, "y was {}", r.y);
    }

    #[test]
    fn test_rotate_about_center_composition() {
        // The documented pattern: translate to origin, rotate, translate back.
        let center = Point::new(100, 100);
        let p = Point::new(110, 100);
        let local = Point::new(p.x - center.x, p.y - center.y);
        let rotated = rotate_point(local, FRAC_PI_2);
        let back = Point::new(rotated.x + center.x, rotated.y + center.y);
        assert!((back.x - 100).abs() <= 1);
        assert!((back.y - 110).abs() <= 1);
    }

    #[test]
    fn test_origin_is_fixed_point() {
        assert_eq!(rotate_point(Point::new(0, 0), 1.234), Point::new(0, 0));
    }
}
