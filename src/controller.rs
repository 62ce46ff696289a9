use crate::canvas::{Canvas, RasterCanvas};
use crate::color::Color;
use crate::components::{Button, Clickable};
use crate::config::PaintConfig;
use crate::error::{PaintError, PaintResult};
use crate::geometry::hit_testing;
use crate::input::{PointerAction, PointerEvent};
use crate::state::{ActiveSelection, EditorContext};
use crate::tools::{Tool, ToolKind, Toolbox};

/// Owns the canvas, the tools and the buttons, and routes pointer events
/// between them.
///
/// Each event is handled to completion: buttons get the first look, in
/// order, and the first one that takes the event ends the scan. Otherwise the
/// active tool gets it. Either way every button is redrawn afterwards so tool
/// output never covers the button chrome.
#[derive(Debug)]
pub struct InteractionController<C: Canvas = RasterCanvas> {
    canvas: C,
    buttons: Vec<Button>,
    context: EditorContext,
}

impl<C: Canvas> InteractionController<C> {
    /// Validates the button layout against the canvas and assembles the editor.
    pub fn new(canvas: C, buttons: Vec<Button>, tools: Toolbox) -> PaintResult<Self> {
        if canvas.width() <= 0 || canvas.height() <= 0 {
            return Err(PaintError::InvalidCanvasSize {
                width: canvas.width().max(0) as u32,
                height: canvas.height().max(0) as u32,
            });
        }
        let rects: Vec<_> = buttons.iter().map(Clickable::rect).collect();
        hit_testing::validate_layout(&rects)?;

        log::debug!(
            "Controller ready: {}x{} canvas, {} buttons",
            canvas.width(),
            canvas.height(),
            buttons.len()
        );
        Ok(Self {
            canvas,
            buttons,
            context: EditorContext::new(tools),
        })
    }

    /// Sets the starting selection and paints the buttons for the first time.
    pub fn initialize(&mut self, tool: ToolKind, color: Color) {
        self.context.set_active_tool(tool);
        self.context.set_active_color(color);
        self.redraw_buttons();
    }

    /// The single entry point for pointer input.
    pub fn on_pointer_event(&mut self, event: PointerEvent) {
        if self.dispatch_to_buttons(&event) {
            log::trace!("{event:?} taken by a button");
        } else {
            self.dispatch_to_tool(&event);
        }
        self.redraw_buttons();
    }

    fn dispatch_to_buttons(&mut self, event: &PointerEvent) -> bool {
        for button in &mut self.buttons {
            if button.handle_event(event, &mut self.context) {
                return true;
            }
        }
        false
    }

    fn dispatch_to_tool(&mut self, event: &PointerEvent) {
        let PointerEvent { x, y, action } = *event;
        let tool = self.context.active_tool_mut();
        let canvas: &mut dyn Canvas = &mut self.canvas;
        match action {
            PointerAction::Pressed => {
                log::debug!("{} down at ({x}, {y})", tool.name());
                tool.on_pointer_down(x, y, canvas);
            }
            PointerAction::Dragged => tool.on_pointer_drag(x, y, canvas),
            PointerAction::Released => tool.on_pointer_up(x, y, canvas),
            PointerAction::Moved => {}
        }
    }

    /// Paints every button over the canvas, in hit-test order.
    pub fn redraw_buttons(&mut self) {
        for button in &self.buttons {
            button.draw(&mut self.canvas);
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn selection(&self) -> ActiveSelection {
        self.context.selection()
    }

    pub fn context(&self) -> &EditorContext {
        &self.context
    }
}

impl InteractionController<RasterCanvas> {
    /// Builds a ready-to-use editor: blank canvas, configured tools and buttons,
    /// initial selection applied and buttons drawn.
    pub fn from_config(config: &PaintConfig) -> PaintResult<Self> {
        let canvas = RasterCanvas::new(config.canvas_width, config.canvas_height, config.background)?;
        let buttons = config.buttons.iter().map(|spec| spec.build()).collect();

        let mut tools = Toolbox::new(config.background);
        if let Some(brush) = tools.brush_mut() {
            brush.set_width(config.brush_width);
        }
        if let Some(eraser) = tools.eraser_mut() {
            eraser.set_width(config.eraser_width);
        }

        let mut controller = Self::new(canvas, buttons, tools)?;
        controller.initialize(config.initial_tool, config.initial_color);
        Ok(controller)
    }
}
