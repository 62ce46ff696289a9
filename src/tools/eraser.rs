use super::brush::BrushTool;
use super::state::PathState;
use super::{StrokeTool, Tool, ToolKind};
use crate::canvas::Canvas;
use crate::color::Color;

/// A brush that always paints the background color.
///
/// Color selection does not reach the eraser: [`Tool::set_color`] is ignored
/// and [`Tool::color`] always reports the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EraserTool {
    brush: BrushTool,
    background: Color,
}

impl Default for EraserTool {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl EraserTool {
    pub fn new(background: Color) -> Self {
        Self {
            brush: BrushTool::new(background),
            background,
        }
    }

    pub fn width(&self) -> i32 {
        self.brush.width()
    }

    pub fn set_width(&mut self, width: i32) {
        self.brush.set_width(width);
    }
}

impl StrokeTool for EraserTool {
    fn begin_stroke(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas) {
        self.brush.begin_stroke(x, y, canvas);
    }

    fn continue_stroke(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas) {
        self.brush.continue_stroke(x, y, canvas);
    }

    fn end_stroke(&mut self) {
        self.brush.end_stroke();
    }

    fn path(&self) -> PathState {
        self.brush.path()
    }
}

impl Tool for EraserTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Eraser
    }

    fn color(&self) -> Color {
        self.background
    }

    fn set_color(&mut self, color: Color) {
        log::trace!("Eraser ignores color {color:?}");
    }

    fn on_pointer_down(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas) {
        self.begin_stroke(x, y, canvas);
    }

    fn on_pointer_drag(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas) {
        self.continue_stroke(x, y, canvas);
    }

    fn on_pointer_up(&mut self, _x: i32, _y: i32, _canvas: &mut dyn Canvas) {
        self.end_stroke();
    }

    fn deactivate(&mut self) {
        self.end_stroke();
    }
}
