use crate::color::Color;

/// The drawing color a tool paints with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorState {
    color: Color,
}

impl ColorState {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    pub const fn get(&self) -> Color {
        self.color
    }

    pub fn set(&mut self, color: Color) {
        self.color = color;
    }
}

/// Continuity state of a press/drag stroke.
///
/// `Idle` means no stroke is in progress: a drag arriving without a prior
/// press has no segment to continue from and draws nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathState {
    #[default]
    Idle,
    Stroking { last_x: i32, last_y: i32 },
}

impl PathState {
    pub fn begin(&mut self, x: i32, y: i32) {
        *self = Self::Stroking { last_x: x, last_y: y };
    }

    /// Moves the stroke to `(x, y)` and returns the previous point, or `None`
    /// (leaving the state untouched) when no stroke is in progress.
    pub fn advance(&mut self, x: i32, y: i32) -> Option<(i32, i32)> {
        let previous = self.last_point()?;
        *self = Self::Stroking { last_x: x, last_y: y };
        Some(previous)
    }

    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    pub const fn last_point(&self) -> Option<(i32, i32)> {
        match *self {
            Self::Idle => None,
            Self::Stroking { last_x, last_y } => Some((last_x, last_y)),
        }
    }

    pub const fn is_stroking(&self) -> bool {
        matches!(self, Self::Stroking { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_without_begin_is_noop() {
        let mut path = PathState::default();
        assert_eq!(path.advance(3, 4), None);
        assert_eq!(path, PathState::Idle);
    }

    #[test]
    fn test_advance_tracks_last_point() {
        let mut path = PathState::default();
        path.begin(1, 2);
        assert_eq!(path.advance(3, 4), Some((1, 2)));
        assert_eq!(path.advance(5, 6), Some((3, 4)));
        assert_eq!(path.last_point(), Some((5, 6)));

        path.end();
        assert!(!path.is_stroking());
        assert_eq!(path.advance(7, 8), None);
    }
}
