//! Editor-wide selection state.
//!
//! [`EditorContext`] holds the active tool kind, the active color and the tool
//! instances they apply to. It is owned by the controller and handed to the
//! buttons as their [`ButtonListener`], so button actions are the only way
//! (besides explicit initialization) the selection changes.

use crate::color::Color;
use crate::components::{ButtonListener, ColorButton, ToolButton};
use crate::tools::{Tool, ToolKind, ToolType, Toolbox};

/// The current (tool, color) pair applied to the next pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSelection {
    pub tool: ToolKind,
    pub color: Color,
}

impl Default for ActiveSelection {
    fn default() -> Self {
        Self {
            tool: ToolKind::Brush,
            color: Color::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditorContext {
    selection: ActiveSelection,
    tools: Toolbox,
}

impl EditorContext {
    pub fn new(tools: Toolbox) -> Self {
        let mut context = Self {
            selection: ActiveSelection::default(),
            tools,
        };
        context.tools.apply_color(context.selection.color);
        context
    }

    pub fn selection(&self) -> ActiveSelection {
        self.selection
    }

    pub fn tools(&self) -> &Toolbox {
        &self.tools
    }

    pub fn active_tool(&self) -> &ToolType {
        self.tools.tool(self.selection.tool)
    }

    pub fn active_tool_mut(&mut self) -> &mut ToolType {
        self.tools.tool_mut(self.selection.tool)
    }

    pub(crate) fn set_active_tool(&mut self, tool: ToolKind) {
        if tool != self.selection.tool {
            self.active_tool_mut().deactivate();
        }
        self.selection.tool = tool;
        log::info!("Active tool: {}", tool.label());
    }

    /// Sets the active color and hands it to every tool except the eraser.
    pub(crate) fn set_active_color(&mut self, color: Color) {
        self.selection.color = color;
        self.tools.apply_color(color);
        log::info!("Active color: {:?}", <[u8; 3]>::from(color));
    }
}

impl ButtonListener for EditorContext {
    fn on_color_selected(&mut self, color: Color, source: &ColorButton) {
        log::debug!("Color button at {:?} clicked", source.swatch_rect());
        self.set_active_color(color);
    }

    fn on_tool_selected(&mut self, tool: ToolKind, _source: &ToolButton) {
        self.set_active_tool(tool);
    }
}
