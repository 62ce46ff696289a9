use super::button::{ButtonBase, ButtonResponse};
use super::{ButtonListener, Clickable};
use crate::canvas::{Canvas, font};
use crate::color::Color;
use crate::geometry::PixelRect;
use crate::input::PointerEvent;
use crate::tools::ToolKind;

const LABEL_MARGIN: i32 = 2;
const LABEL_COLOR: Color = Color::BLACK;

/// Toolbar button: selects a fixed tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolButton {
    base: ButtonBase,
    tool: ToolKind,
}

impl ToolButton {
    pub const fn new(rect: PixelRect, tool: ToolKind) -> Self {
        Self {
            base: ButtonBase::new(rect),
            tool,
        }
    }

    pub const fn tool(&self) -> ToolKind {
        self.tool
    }

    /// The label as drawn: the tool name, truncated to what fits, and its
    /// top-left position centered in the button.
    ///
    /// `None` when the button cannot hold a single glyph.
    pub fn label_layout(&self) -> Option<(String, i32, i32)> {
        let rect = self.base.rect();
        let room = rect.inset(LABEL_MARGIN)?;
        if room.height < font::GLYPH_HEIGHT || room.width < font::GLYPH_WIDTH {
            return None;
        }

        let max_chars = (room.width.saturating_add(1) / font::GLYPH_ADVANCE) as usize;
        let label: String = self.tool.label().chars().take(max_chars).collect();
        let (text_width, text_height) = font::text_size(&label, 1);
        Some((
            label,
            room.x.saturating_add((room.width - text_width) / 2),
            room.y.saturating_add((room.height - text_height) / 2),
        ))
    }
}

impl Clickable for ToolButton {
    fn rect(&self) -> PixelRect {
        self.base.rect()
    }

    fn is_pressed(&self) -> bool {
        self.base.is_pressed()
    }

    fn handle_event(&mut self, event: &PointerEvent, listener: &mut dyn ButtonListener) -> bool {
        let response = self.base.track(event);
        if response == ButtonResponse::Clicked {
            listener.on_tool_selected(self.tool, self);
        }
        response.is_handled()
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.base.draw(canvas);
        if let Some((label, x, y)) = self.label_layout() {
            canvas.draw_text(x, y, &label, 1, LABEL_COLOR);
        }
    }
}
