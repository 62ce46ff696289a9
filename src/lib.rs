#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod input;
pub mod state;
pub mod texture;
pub mod tools;

pub use app::PaintApp;
pub use canvas::{Canvas, RasterCanvas};
pub use color::Color;
pub use components::{Button, ButtonListener, Clickable, ColorButton, ToolButton};
pub use config::{ButtonSpec, CONFIG_ENV, PaintConfig};
pub use controller::InteractionController;
pub use error::{PaintError, PaintResult};
pub use geometry::PixelRect;
pub use input::{InputHandler, PointerAction, PointerEvent};
pub use state::{ActiveSelection, EditorContext};
pub use texture::CanvasTexture;
pub use tools::{Tool, ToolKind, ToolType, Toolbox};
