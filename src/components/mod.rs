mod button;
mod color_button;
mod tool_button;

pub use button::{ButtonBase, ButtonResponse, IDLE_COLOR, PRESSED_COLOR};
pub use color_button::ColorButton;
pub use tool_button::ToolButton;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::PixelRect;
use crate::input::PointerEvent;
use crate::tools::ToolKind;

/// Receives the actions fired by buttons.
pub trait ButtonListener {
    fn on_color_selected(&mut self, color: Color, source: &ColorButton);

    fn on_tool_selected(&mut self, tool: ToolKind, source: &ToolButton);
}

/// A rectangular on-canvas control turning press/release pairs into actions.
pub trait Clickable {
    fn rect(&self) -> PixelRect;

    fn is_pressed(&self) -> bool;

    /// Feeds one pointer event through the button's state machine.
    ///
    /// Returns `true` when the button took the event, in which case nothing
    /// else may see it. A completed click notifies `listener` before
    /// returning.
    fn handle_event(&mut self, event: &PointerEvent, listener: &mut dyn ButtonListener) -> bool;

    /// Paints the button. Never draws outside [`Clickable::rect`].
    fn draw(&self, canvas: &mut dyn Canvas);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Button {
    Color(ColorButton),
    Tool(ToolButton),
}

impl Clickable for Button {
    fn rect(&self) -> PixelRect {
        match self {
            Self::Color(button) => button.rect(),
            Self::Tool(button) => button.rect(),
        }
    }

    fn is_pressed(&self) -> bool {
        match self {
            Self::Color(button) => button.is_pressed(),
            Self::Tool(button) => button.is_pressed(),
        }
    }

    fn handle_event(&mut self, event: &PointerEvent, listener: &mut dyn ButtonListener) -> bool {
        match self {
            Self::Color(button) => button.handle_event(event, listener),
            Self::Tool(button) => button.handle_event(event, listener),
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        match self {
            Self::Color(button) => button.draw(canvas),
            Self::Tool(button) => button.draw(canvas),
        }
    }
}

impl From<ColorButton> for Button {
    fn from(button: ColorButton) -> Self {
        Self::Color(button)
    }
}

impl From<ToolButton> for Button {
    fn from(button: ToolButton) -> Self {
        Self::Tool(button)
    }
}
