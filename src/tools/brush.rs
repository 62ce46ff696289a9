use super::state::{ColorState, PathState};
use super::{StrokeTool, Tool, ToolKind};
use crate::canvas::Canvas;
use crate::color::Color;

pub const DEFAULT_BRUSH_WIDTH: i32 = 10;

/// Round brush of configurable width.
///
/// A stroke starts with a disc of radius `width / 2`; each drag segment is a
/// thick line plus another disc at the new point, which rounds the joints and
/// the end cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrushTool {
    color: ColorState,
    path: PathState,
    width: i32,
}

impl Default for BrushTool {
    fn default() -> Self {
        Self::new(Color::default())
    }
}

impl BrushTool {
    pub fn new(color: Color) -> Self {
        Self {
            color: ColorState::new(color),
            path: PathState::Idle,
            width: DEFAULT_BRUSH_WIDTH,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    /// Sets the stroke width; values below one are clamped to one.
    pub fn set_width(&mut self, width: i32) {
        if width < 1 {
            log::warn!("Brush width {width} clamped to 1");
        }
        self.width = width.max(1);
    }

    pub fn radius(&self) -> i32 {
        self.width / 2
    }
}

impl StrokeTool for BrushTool {
    fn begin_stroke(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas) {
        canvas.draw_disc(x, y, self.radius(), self.color.get());
        self.path.begin(x, y);
    }

    fn continue_stroke(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas) {
        let Some((last_x, last_y)) = self.path.advance(x, y) else {
            return;
        };
        let color = self.color.get();
        canvas.draw_thick_line(last_x, last_y, x, y, color, self.width);
        canvas.draw_disc(x, y, self.radius(), color);
    }

    fn end_stroke(&mut self) {
        self.path.end();
    }

    fn path(&self) -> PathState {
        self.path
    }
}

impl Tool for BrushTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Brush
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
