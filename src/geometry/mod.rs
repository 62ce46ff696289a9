pub mod hit_testing;

use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle covering `[x, x + width) × [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True when the two rectangles share at least one pixel.
    pub const fn intersects(&self, other: &PixelRect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// The rectangle shrunk by `margin` on every side, `None` if nothing is left.
    pub const fn inset(&self, margin: i32) -> Option<PixelRect> {
        let shrink = margin.saturating_mul(2);
        let inner = PixelRect::new(
            self.x.saturating_add(margin),
            self.y.saturating_add(margin),
            self.width.saturating_sub(shrink),
            self.height.saturating_sub(shrink),
        );
        if inner.is_empty() { None } else { Some(inner) }
    }
}
