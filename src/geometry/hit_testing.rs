use super::PixelRect;
use crate::error::{PaintError, PaintResult};

/// First pair of intersecting rectangles, by index, if any.
pub fn find_overlap(rects: &[PixelRect]) -> Option<(usize, usize)> {
    rects.iter().enumerate().find_map(|(i, rect)| {
        rects[i + 1..]
            .iter()
            .position(|other| rect.intersects(other))
            .map(|offset| (i, i + 1 + offset))
    })
}

/// Checks a button layout: every rectangle non-empty, no two intersecting.
///
/// Hit testing walks buttons in order and stops at the first one that takes
/// the event, so an overlap would make the later button unreachable.
pub fn validate_layout(rects: &[PixelRect]) -> PaintResult<()> {
    if let Some(index) = rects.iter().position(PixelRect::is_empty) {
        return Err(PaintError::InvalidButtonGeometry { index });
    }
    if let Some((first, second)) = find_overlap(rects) {
        log::warn!(
            "Button layout rejected: {:?} overlaps {:?}",
            rects[first],
            rects[second]
        );
        return Err(PaintError::OverlappingButtons { first, second });
    }
    Ok(())
}
