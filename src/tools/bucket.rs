use super::state::ColorState;
use super::{Tool, ToolKind};
use crate::canvas::Canvas;
use crate::color::Color;
use crate::fill::flood_fill;

/// Flood-fill tool. Acts on press only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketTool {
    color: ColorState,
}

impl BucketTool {
    pub fn new(color: Color) -> Self {
        Self {
            color: ColorState::new(color),
        }
    }

    /// Fills the region under `(x, y)`, returning the number of pixels changed.
    pub fn fill(&self, x: i32, y: i32, canvas: &mut dyn Canvas) -> usize {
        flood_fill(canvas, x, y, self.color.get())
    }
}

impl Tool for BucketTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Bucket
    }

    fn color(&self) -> Color {
        self.color.get()
    }

    fn set_color(&mut self, color: Color) {
        self.color.set(color);
    }

    fn on_pointer_down(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas) {
        self.fill(x, y, canvas);
    }

    fn on_pointer_drag(&mut self, _x: i32, _y: i32, _canvas: &mut dyn Canvas) {}

    fn on_pointer_up(&mut self, _x: i32, _y: i32, _canvas: &mut dyn Canvas) {}
}
