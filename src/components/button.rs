use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::PixelRect;
use crate::input::{PointerAction, PointerEvent};

/// Fill of a button while it is held down.
pub const PRESSED_COLOR: Color = Color::new(50, 50, 200);
/// Fill of a button at rest.
pub const IDLE_COLOR: Color = Color::new(150, 150, 150);

/// What a button made of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonResponse {
    /// Not for this button; offer it to the next one.
    Ignored,
    /// Taken by the button without completing a click.
    Consumed,
    /// Press and release both landed inside: fire the action.
    Clicked,
}

impl ButtonResponse {
    pub const fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Geometry plus the idle/pressed state shared by every button.
///
/// The pressed flag only bridges a press to the matching release. A release
/// outside the button, or a new press elsewhere, drops it without a click, so
/// pressing, dragging off and letting go never triggers the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonBase {
    rect: PixelRect,
    pressed: bool,
}

impl ButtonBase {
    pub const fn new(rect: PixelRect) -> Self {
        Self { rect, pressed: false }
    }

    pub const fn rect(&self) -> PixelRect {
        self.rect
    }

    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Advances the press/release state machine.
    pub fn track(&mut self, event: &PointerEvent) -> ButtonResponse {
        let inside = self.rect.contains(event.x, event.y);
        match event.action {
            PointerAction::Moved => ButtonResponse::Ignored,
            PointerAction::Dragged if self.pressed => ButtonResponse::Consumed,
            PointerAction::Dragged => ButtonResponse::Ignored,
            PointerAction::Pressed => {
                self.pressed = inside;
                if inside {
                    ButtonResponse::Consumed
                } else {
                    ButtonResponse::Ignored
                }
            }
            PointerAction::Released => {
                let was_pressed = std::mem::replace(&mut self.pressed, false);
                if was_pressed && inside {
                    ButtonResponse::Clicked
                } else {
                    ButtonResponse::Ignored
                }
            }
        }
    }

    /// Fills the whole rectangle with the idle or pressed color.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let PixelRect { x, y, width, height } = self.rect;
        let fill = if self.pressed { PRESSED_COLOR } else { IDLE_COLOR };
        canvas.draw_rectangle(x, y, width, height, fill);
    }
}
