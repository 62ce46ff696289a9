use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::Color;

mod brush;
mod bucket;
mod eraser;
mod pencil;
pub mod state;

pub use brush::{BrushTool, DEFAULT_BRUSH_WIDTH};
pub use bucket::BucketTool;
pub use eraser::EraserTool;
pub use pencil::PencilTool;
pub use state::{ColorState, PathState};

/// Which tool the pointer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Pencil,
    Brush,
    Eraser,
    Bucket,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [Self::Pencil, Self::Brush, Self::Eraser, Self::Bucket];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::Bucket => "Bucket",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Pencil => 0,
            Self::Brush => 1,
            Self::Eraser => 2,
            Self::Bucket => 3,
        }
    }
}

/// Pointer-driven behaviour shared by every tool.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    fn name(&self) -> &'static str {
        self.kind().label()
    }

    /// The color this tool actually paints with.
    fn color(&self) -> Color;

    fn set_color(&mut self, color: Color);

    /// Handle pointer press on the canvas.
    fn on_pointer_down(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas);

    /// Handle pointer movement while the button is held.
    fn on_pointer_drag(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas);

    /// Handle pointer release. Never draws.
    fn on_pointer_up(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas);

    /// Called when another tool becomes active.
    fn deactivate(&mut self) {
        // default: do nothing
    }
}

/// Tools that turn a press followed by drags into a connected stroke.
pub trait StrokeTool {
    /// Paints the stroke's first mark at `(x, y)` and remembers the point.
    fn begin_stroke(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas);

    /// Extends the stroke from the remembered point to `(x, y)`.
    /// Does nothing when no stroke is in progress.
    fn continue_stroke(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas);

    fn end_stroke(&mut self);

    fn path(&self) -> PathState;
}

/// Closed set of tools, dispatched through [`Tool`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolType {
    Pencil(PencilTool),
    Brush(BrushTool),
    Eraser(EraserTool),
    Bucket(BucketTool),
}

impl Tool for ToolType {
    fn kind(&self) -> ToolKind {
        match self {
            Self::Pencil(tool) => tool.kind(),
            Self::Brush(tool) => tool.kind(),
            Self::Eraser(tool) => tool.kind(),
            Self::Bucket(tool) => tool.kind(),
        }
    }

    fn color(&self) -> Color {
        match self {
            Self::Pencil(tool) => tool.color(),
            Self::Brush(tool) => tool.color(),
            Self::Eraser(tool) => tool.color(),
            Self::Bucket(tool) => tool.color(),
        }
    }

    fn set_color(&mut self, color: Color) {
        match self {
            Self::Pencil(tool) => tool.set_color(color),
            Self::Brush(tool) => tool.set_color(color),
            Self::Eraser(tool) => tool.set_color(color),
            Self::Bucket(tool) => tool.set_color(color),
        }
    }

    fn on_pointer_down(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas) {
        match self {
            Self::Pencil(tool) => tool.on_pointer_down(x, y, canvas),
            Self::Brush(tool) => tool.on_pointer_down(x, y, canvas),
            Self::Eraser(tool) => tool.on_pointer_down(x, y, canvas),
            Self::Bucket(tool) => tool.on_pointer_down(x, y, canvas),
        }
    }

    fn on_pointer_drag(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas) {
        match self {
            Self::Pencil(tool) => tool.on_pointer_drag(x, y, canvas),
            Self::Brush(tool) => tool.on_pointer_drag(x, y, canvas),
            Self::Eraser(tool) => tool.on_pointer_drag(x, y, canvas),
            Self::Bucket(tool) => tool.on_pointer_drag(x, y, canvas),
        }
    }

    fn on_pointer_up(&mut self, x: i32, y: i32, canvas: &mut dyn Canvas) {
        match self {
            Self::Pencil(tool) => tool.on_pointer_up(x, y, canvas),
            Self::Brush(tool) => tool.on_pointer_up(x, y, canvas),
            Self::Eraser(tool) => tool.on_pointer_up(x, y, canvas),
            Self::Bucket(tool) => tool.on_pointer_up(x, y, canvas),
        }
    }

    fn deactivate(&mut self) {
        match self {
            Self::Pencil(tool) => tool.deactivate(),
            Self::Brush(tool) => tool.deactivate(),
            Self::Eraser(tool) => tool.deactivate(),
            Self::Bucket(tool) => tool.deactivate(),
        }
    }
}

// Helper methods for ToolType
impl ToolType {
    pub fn as_stroke_tool(&self) -> Option<&dyn StrokeTool> {
        match self {
            Self::Pencil(tool) => Some(tool),
            Self::Brush(tool) => Some(tool),
            Self::Eraser(tool) => Some(tool),
            Self::Bucket(_) => None,
        }
    }

    pub fn as_brush_mut(&mut self) -> Option<&mut BrushTool> {
        match self {
            Self::Brush(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn as_eraser_mut(&mut self) -> Option<&mut EraserTool> {
        match self {
            Self::Eraser(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn is_stroking(&self) -> bool {
        self.as_stroke_tool()
            .is_some_and(|tool| tool.path().is_stroking())
    }
}

/// One long-lived instance of every tool, indexed by [`ToolKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbox {
    tools: [ToolType; 4],
}

impl Default for Toolbox {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl Toolbox {
    /// Creates the four tools; the eraser paints `background`.
    pub fn new(background: Color) -> Self {
        Self {
            tools: [
                ToolType::Pencil(PencilTool::default()),
                ToolType::Brush(BrushTool::default()),
                ToolType::Eraser(EraserTool::new(background)),
                ToolType::Bucket(BucketTool::default()),
            ],
        }
    }

    pub fn tool(&self, kind: ToolKind) -> &ToolType {
        &self.tools[kind.index()]
    }

    pub fn tool_mut(&mut self, kind: ToolKind) -> &mut ToolType {
        &mut self.tools[kind.index()]
    }

    pub fn brush_mut(&mut self) -> Option<&mut BrushTool> {
        self.tool_mut(ToolKind::Brush).as_brush_mut()
    }

    pub fn eraser_mut(&mut self) -> Option<&mut EraserTool> {
        self.tool_mut(ToolKind::Eraser).as_eraser_mut()
    }

    /// Sets the color of every color-bearing tool. The eraser keeps painting
    /// the background.
    pub fn apply_color(&mut self, color: Color) {
        for tool in &mut self.tools {
            if tool.kind() != ToolKind::Eraser {
                tool.set_color(color);
            }
        }
    }
}
