//! Filled-ellipse rasterization via the implicit curve test.

use crate::display::{Color, PixelBuffer};
use crate::geometry::Point;

/// Fill the ellipse centered at `center` with half-axes `half_w` and
/// `half_h` (equal halves draw a circle).
///
/// Brute-force scan of the bounding box testing the integer inequality
/// `i²·h² + j²·w² <= h²·w²` for each candidate pixel. O(w·h) per call,
/// which is fine for a bounded canvas. Zero half-axes degenerate to a
/// single pixel.
pub fn fill_ellipse(buffer: &mut PixelBuffer, center: Point, half_w: i32, half_h: i32, color: Color) {
    let w2 = i64::from(half_w) * i64::from(half_w);
    let h2 = i64::from(half_h) * i64::from(half_h);

    for j in -half_h..=half_h {
        for i in -half_w..=half_w {
            let ii = i64::from(i) * i64::from(i);
            let jj = i64::from(j) * i64::from(j);
            if ii * h2 + jj * w2 <= h2 * w2 {
                buffer.set_pixel(center.x + i, center.y + j, color);
            }
        }
    }
}
