use thiserror::Error;

/// Errors raised while setting up the editor.
///
/// Pointer event handling itself never fails: out-of-range coordinates and
/// stray events degrade to no-ops. Everything here is a configuration problem
/// caught before the first event is processed.
#[derive(Debug, Error)]
pub enum PaintError {
    /// Two button rectangles intersect, so hit testing would be ambiguous
    #[error("button {first} overlaps button {second}")]
    OverlappingButtons { first: usize, second: usize },

    /// A button has zero or negative width/height
    #[error("button {index} has an empty rectangle")]
    InvalidButtonGeometry { index: usize },

    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("failed to read config: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for editor setup
pub type PaintResult<T> = Result<T, PaintError>;
