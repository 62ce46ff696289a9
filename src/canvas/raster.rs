use image::RgbaImage;

use super::Canvas;
use crate::color::Color;
use crate::error::{PaintError, PaintResult};

/// Largest accepted canvas edge, in pixels.
pub const MAX_CANVAS_SIZE: u32 = 8192;

/// In-memory canvas backed by an RGBA image.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    image: RgbaImage,
    /// Bumped on every in-bounds write, so viewers can tell when to re-upload
    revision: u64,
}

impl RasterCanvas {
    /// Creates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> PaintResult<Self> {
        if width == 0 || height == 0 || width > MAX_CANVAS_SIZE || height > MAX_CANVAS_SIZE {
            return Err(PaintError::InvalidCanvasSize { width, height });
        }
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, background.into()),
            revision: 0,
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Canvas for RasterCanvas {
    fn width(&self) -> i32 {
        self.image.width() as i32
    }

    fn height(&self) -> i32 {
        self.image.height() as i32
    }

    fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.contains(x, y)
            .then(|| Color::from(*self.image.get_pixel(x as u32, y as u32)))
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.contains(x, y) {
            self.image.put_pixel(x as u32, y as u32, color.into());
            self.revision = self.revision.wrapping_add(1);
        }
    }
}
