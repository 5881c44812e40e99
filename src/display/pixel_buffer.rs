use super::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Opaque 32-bit color. The channel layout belongs to the SDL texture
/// (RGBA8888); the raster core never looks inside.
pub type Color = u32;

/// Background color used by `clear()`.
pub const BACKGROUND: Color = 0x00000000;

/// Fixed-size canvas for software rasterization.
///
/// Row-major grid of opaque colors. All writes are bounds-checked and
/// out-of-range writes are silently dropped, so callers can rasterize
/// partially off-canvas shapes without a separate clipping step.
pub struct PixelBuffer {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a pixel buffer with the default resolution (640x480)
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a pixel buffer with custom resolution
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![BACKGROUND; (width * height) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Set a single pixel. Out-of-range coordinates are a no-op, not an
    /// error.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx] = color;
        }
    }

    /// Read a pixel, or None when out of range. Flood fill uses this to
    /// detect pixels that already carry the fill color.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.pixel_index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Reset every pixel to the background color
    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    /// Raw bytes for SDL texture upload
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: a Vec<u32> is contiguous, and viewing it as bytes only
        // shrinks the alignment requirement. Length is exact.
        unsafe {
            std::slice::from_raw_parts(
                self.pixels.as_ptr().cast::<u8>(),
                self.pixels.len() * std::mem::size_of::<Color>(),
            )
        }
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
