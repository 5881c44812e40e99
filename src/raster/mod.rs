mod ellipse;
mod fill;
mod line;

pub use ellipse::fill_ellipse;
pub use fill::{flood_fill, scanline_fill};
pub use line::{draw_line, draw_polygon};
