use egui::{Context, Pos2, Rect};

/// Kind of pointer event delivered to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Primary button went down
    Pressed,
    /// Pointer moved with the primary button held
    Dragged,
    /// Primary button went up
    Released,
    /// Pointer moved with no button held
    Moved,
}

/// A pointer event in canvas pixel coordinates.
///
/// Coordinates may lie outside the canvas (a drag that leaves the widget
/// keeps reporting positions); consumers treat those as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    pub action: PointerAction,
}

impl PointerEvent {
    pub const fn new(x: i32, y: i32, action: PointerAction) -> Self {
        Self { x, y, action }
    }

    pub const fn pressed(x: i32, y: i32) -> Self {
        Self::new(x, y, PointerAction::Pressed)
    }

    pub const fn dragged(x: i32, y: i32) -> Self {
        Self::new(x, y, PointerAction::Dragged)
    }

    pub const fn released(x: i32, y: i32) -> Self {
        Self::new(x, y, PointerAction::Released)
    }

    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(x, y, PointerAction::Moved)
    }
}

/// Converts raw egui pointer input into [`PointerEvent`]s for the canvas widget.
///
/// Only the primary button drives the editor. A press that starts outside the
/// canvas widget is not forwarded, and neither is the drag/release that
/// follows it.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pixel: Option<(i32, i32)>,
    pointer_down: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press inside the canvas is being tracked
    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Reads this frame's pointer state from egui. `canvas_rect` is where the
    /// canvas is displayed, one point per pixel.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<PointerEvent> {
        let (pos, pressed, released) = ctx.input(|input| {
            (
                input.pointer.latest_pos(),
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
            )
        });
        self.translate(pos, pressed, released, canvas_rect)
    }

    /// Frame-to-event translation, separated from egui for testing.
    pub fn translate(
        &mut self,
        pos: Option<Pos2>,
        pressed: bool,
        released: bool,
        canvas_rect: Rect,
    ) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let Some(pos) = pos else {
            return events;
        };
        let (x, y) = to_pixel(pos, canvas_rect);
        let moved = self.last_pixel != Some((x, y));

        if pressed && !self.pointer_down && canvas_rect.contains(pos) {
            self.pointer_down = true;
            events.push(PointerEvent::pressed(x, y));
        } else if moved {
            events.push(if self.pointer_down {
                PointerEvent::dragged(x, y)
            } else {
                PointerEvent::moved(x, y)
            });
        }

        if released && self.pointer_down {
            self.pointer_down = false;
            events.push(PointerEvent::released(x, y));
        }

        self.last_pixel = Some((x, y));
        events
    }
}

/// Maps a screen position to the pixel under it.
pub fn to_pixel(pos: Pos2, canvas_rect: Rect) -> (i32, i32) {
    (
        (pos.x - canvas_rect.min.x).floor() as i32,
        (pos.y - canvas_rect.min.y).floor() as i32,
    )
}
