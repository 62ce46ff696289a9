use super::state::{ColorState, PathState};
use super::{StrokeTool, Tool, ToolKind};
use crate::canvas::Canvas;
use crate::color::Color;

/// Single-pixel freehand tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PencilTool {
    color: ColorState,
    path: PathState,
}

impl PencilTool {
    pub fn new(color: Color) -> Self {
        Self {
            color: ColorState::new(color),
            path: PathState::Idle,
        }
    }
}

impl StrokeTool for PencilTool {
    fn begin_stroke(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas) {
        canvas.set_pixel(x, y, self.color.get());
        self.path.begin(x, y);
    }

    fn continue_stroke(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas) {
        if let Some((last_x, last_y)) = self.path.advance(x, y) {
            canvas.draw_line(last_x, last_y, x, y, self.color.get());
        }
    }

    fn end_stroke(&mut self) {
        self.path.end();
    }

    fn path(&self) -> PathState {
        self.path
    }
}

impl Tool for PencilTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Pencil
    }

    fn color(&self) -> Color {
        self.color.get()
    }

    fn set_color(&mut self, color: Color) {
        self.color.set(color);
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
