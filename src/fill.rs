use std::collections::VecDeque;

use crate::canvas::Canvas;
use crate::color::Color;

/// Recolors the 4-connected region of uniform color containing `(x, y)`.
///
/// Traversal uses an explicit FIFO frontier rather than recursion, so region
/// size is bounded by memory, not stack depth. Neighbours are bounds-checked
/// before they are read and only queued when they still hold the start color;
/// every dequeued pixel is re-read before it is painted, so a pixel queued
/// twice is painted once.
///
/// Returns the number of pixels recolored. Nothing is written when `(x, y)`
/// is off the canvas or already has `fill`.
pub fn flood_fill<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, fill: Color) -> usize {
    if !canvas.contains(x, y) {
        log::trace!("Fill at ({x}, {y}) is off the canvas");
        return 0;
    }
    let Some(start) = canvas.pixel(x, y) else {
        return 0;
    };
    if start == fill {
        return 0;
    }

    let mut frontier = VecDeque::new();
    frontier.push_back((x, y));
    let mut filled = 0;

    while let Some((px, py)) = frontier.pop_front() {
        if canvas.pixel(px, py) != Some(start) {
            continue;
        }
        canvas.set_pixel(px, py, fill);
        filled += 1;

        for (nx, ny) in [(px - 1, py), (px + 1, py), (px, py - 1), (px, py + 1)] {
            if canvas.contains(nx, ny) && canvas.pixel(nx, ny) == Some(start) {
                frontier.push_back((nx, ny));
            }
        }
    }

    log::debug!("Filled {filled} pixels from ({x}, {y})");
    filled
}
