use image::{Rgb, RgbImage};

pub type Color = Rgb<u8>;

pub const WHITE: Color = Rgb([255, 255, 255]);

/// Square-or-rectangular RGB pixel buffer, origin top-left
///
/// Owned by a single render; pixels are written in place and the last write
/// wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with a single color
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, fill),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Read a pixel, `None` outside the canvas
    pub fn get(&self, x: i64, y: i64) -> Option<Color> {
        let (x, y) = self.index(x, y)?;
        Some(*self.pixels.get_pixel(x, y))
    }

    /// Write a pixel. Coordinates outside the canvas are ignored.
    pub fn set(&mut self, x: i64, y: i64, color: Color) {
        if let Some((x, y)) = self.index(x, y) {
            self.pixels.put_pixel(x, y, color);
        }
    }

    fn index(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.width() && y < self.height()).then_some((x, y))
    }

    /// Count pixels of exactly `color`
    pub fn count(&self, color: Color) -> usize {
        self.pixels.pixels().filter(|&&p| p == color).count()
    }

    /// Iterate `(x, y, color)` over every pixel, row by row
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        self.pixels.enumerate_pixels().map(|(x, y, &p)| (x, y, p))
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.pixels
    }

    /// Hand the buffer to an encoder
    pub fn into_image(self) -> RgbImage {
        self.pixels
    }
}
