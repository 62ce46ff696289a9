use image::Rgba;
use serde::{Deserialize, Serialize};

/// An opaque RGB color. Equality is exact per channel.
///
/// Serialized as a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn r(self) -> u8 {
        self.r
    }

    pub const fn g(self) -> u8 {
        self.g
    }

    pub const fn b(self) -> u8 {
        self.b
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

// Alpha is dropped: the canvas is always opaque.
impl From<Rgba<u8>> for Color {
    fn from(Rgba([r, g, b, _]): Rgba<u8>) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, u8::MAX])
    }
}

impl From<Color> for egui::Color32 {
    fn from(color: Color) -> Self {
        egui::Color32::from_rgb(color.r, color.g, color.b)
    }
}
