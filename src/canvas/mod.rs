//! The pixel surface the editor draws on.
//!
//! [`Canvas`] is the small interface the tools, buttons and flood fill consume.
//! Implementors only provide pixel access; the shape routines have default
//! implementations built on [`Canvas::set_pixel`] that clip to the canvas, so
//! out-of-range coordinates are never an error anywhere in the drawing path.

pub mod font;
mod raster;
pub mod shapes;

pub use raster::{MAX_CANVAS_SIZE, RasterCanvas};

use crate::color::Color;

pub trait Canvas {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Color at `(x, y)`, or `None` when the coordinate is off the canvas.
    fn pixel(&self, x: i32, y: i32) -> Option<Color>;

    /// Writes one pixel. Off-canvas writes are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height()
    }

    /// One pixel wide line, both endpoints included.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        for (x, y) in shapes::line_points(x1, y1, x2, y2, self.width(), self.height()) {
            self.set_pixel(x, y, color);
        }
    }

    /// Line segment of the given width, without end caps.
    ///
    /// A pixel is covered when its projection falls on the segment and its
    /// distance to the segment is at most `width / 2`. Widths of one or less
    /// fall back to [`Canvas::draw_line`].
    fn draw_thick_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, width: i32) {
        if width <= 1 {
            self.draw_line(x1, y1, x2, y2, color);
            return;
        }
        if (x1, y1) == (x2, y2) {
            return;
        }

        let half = f64::from(width) / 2.0;
        let reach = width / 2 + width % 2;
        let Some((min_x, min_y, max_x, max_y)) = self.clip(
            x1.min(x2).saturating_sub(reach),
            y1.min(y2).saturating_sub(reach),
            x1.max(x2).saturating_add(reach),
            y1.max(y2).saturating_add(reach),
        ) else {
            return;
        };

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if shapes::segment_covers(x1, y1, x2, y2, half, x, y) {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Filled disc. A radius of zero paints the center pixel only.
    fn draw_disc(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if radius < 0 {
            return;
        }
        let Some((min_x, min_y, max_x, max_y)) = self.clip(
            cx.saturating_sub(radius),
            cy.saturating_sub(radius),
            cx.saturating_add(radius),
            cy.saturating_add(radius),
        ) else {
            return;
        };

        let limit = i64::from(radius) * i64::from(radius);
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = i64::from(x) - i64::from(cx);
                let dy = i64::from(y) - i64::from(cy);
                if dx * dx + dy * dy <= limit {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Filled rectangle covering `[x, x + width) × [y, y + height)`.
    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }
        let Some((min_x, min_y, max_x, max_y)) =
            self.clip(x, y, x.saturating_add(width - 1), y.saturating_add(height - 1))
        else {
            return;
        };

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Renders `text` with the built-in 5×7 font, top-left corner at `(x, y)`.
    ///
    /// Each font pixel becomes a `scale × scale` block. Characters without a
    /// glyph leave a blank cell.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, scale: i32, color: Color) {
        if scale <= 0 {
            return;
        }
        let mut origin_x = x;
        for ch in text.chars() {
            if let Some(rows) = font::glyph(ch) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..font::GLYPH_WIDTH {
                        if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) != 0 {
                            self.draw_rectangle(
                                origin_x.saturating_add(col.saturating_mul(scale)),
                                y.saturating_add((row as i32).saturating_mul(scale)),
                                scale,
                                scale,
                                color,
                            );
                        }
                    }
                }
            }
            origin_x = origin_x.saturating_add(font::GLYPH_ADVANCE.saturating_mul(scale));
        }
    }

    /// Intersects an inclusive box with the canvas, `None` when they are disjoint.
    #[doc(hidden)]
    fn clip(&self, min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<(i32, i32, i32, i32)> {
        let min_x = min_x.max(0);
        let min_y = min_y.max(0);
        let max_x = max_x.min(self.width() - 1);
        let max_y = max_y.min(self.height() - 1);
        (min_x <= max_x && min_y <= max_y).then_some((min_x, min_y, max_x, max_y))
    }
}
