use super::button::{ButtonBase, ButtonResponse};
use super::{ButtonListener, Clickable};
use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::PixelRect;
use crate::input::PointerEvent;

/// Margin between the button edge and its color swatch.
const SWATCH_INSET: i32 = 4;

/// Palette button: selects a fixed color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorButton {
    base: ButtonBase,
    color: Color,
}

impl ColorButton {
    pub const fn new(rect: PixelRect, color: Color) -> Self {
        Self {
            base: ButtonBase::new(rect),
            color,
        }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    /// Area painted with the button's color, if the button is big enough.
    pub const fn swatch_rect(&self) -> Option<PixelRect> {
        self.base.rect().inset(SWATCH_INSET)
    }
}

impl Clickable for ColorButton {
    fn rect(&self) -> PixelRect {
        self.base.rect()
    }

    fn is_pressed(&self) -> bool {
        self.base.is_pressed()
    }

    fn handle_event(&mut self, event: &PointerEvent, listener: &mut dyn ButtonListener) -> bool {
        let response = self.base.track(event);
        if response == ButtonResponse::Clicked {
            listener.on_color_selected(self.color, self);
        }
        response.is_handled()
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.base.draw(canvas);
        if let Some(PixelRect { x, y, width, height }) = self.swatch_rect() {
            canvas.draw_rectangle(x, y, width, height, self.color);
        }
    }
}
