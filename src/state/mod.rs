pub mod context;

pub use context::{ActiveSelection, EditorContext};
