use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::color::Color;
use crate::components::{Button, ColorButton, ToolButton};
use crate::error::PaintResult;
use crate::geometry::PixelRect;
use crate::tools::ToolKind;

/// Environment variable naming a JSON config file for the binary
pub const CONFIG_ENV: &str = "PIXEL_PAINT_CONFIG";

/// Startup configuration of the editor.
///
/// Every field is optional in the JSON file; missing ones take the defaults
/// below. Layout problems (overlapping buttons, empty canvas) are reported when
/// the controller is built from the config, not while parsing.
///
/// ```json
/// {
///   "canvas_width": 640,
///   "brush_width": 12,
///   "initial_tool": "pencil",
///   "buttons": [
///     { "kind": "color", "rect": { "x": 10, "y": 10, "width": 30, "height": 30 }, "color": [255, 0, 0] },
///     { "kind": "tool", "rect": { "x": 10, "y": 60, "width": 70, "height": 50 }, "tool": "bucket" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Initial canvas fill, also the color the eraser paints
    pub background: Color,
    pub brush_width: i32,
    pub eraser_width: i32,
    pub initial_tool: ToolKind,
    pub initial_color: Color,
    /// Buttons in hit-test and draw order
    pub buttons: Vec<ButtonSpec>,
}

/// Declarative description of one button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ButtonSpec {
    Color { rect: PixelRect, color: Color },
    Tool { rect: PixelRect, tool: ToolKind },
}

impl ButtonSpec {
    pub fn build(&self) -> Button {
        match *self {
            Self::Color { rect, color } => ColorButton::new(rect, color).into(),
            Self::Tool { rect, tool } => ToolButton::new(rect, tool).into(),
        }
    }
}

pub const RED: Color = Color::new(255, 0, 0);
pub const PURPLE: Color = Color::new(155, 118, 204);
pub const GREEN: Color = Color::new(50, 250, 10);
pub const BLUE: Color = Color::new(40, 20, 230);
pub const TEAL: Color = Color::new(20, 225, 250);

impl Default for PaintConfig {
    fn default() -> Self {
        let palette = [RED, PURPLE, GREEN, BLUE, TEAL];
        let tools = [ToolKind::Pencil, ToolKind::Brush, ToolKind::Bucket, ToolKind::Eraser];

        let color_buttons = palette.into_iter().zip(0..).map(|(color, i)| ButtonSpec::Color {
            rect: PixelRect::new(10 + 50 * i, 10, 30, 30),
            color,
        });
        let tool_buttons = tools.into_iter().zip(0..).map(|(tool, i)| ButtonSpec::Tool {
            rect: PixelRect::new(10 + 90 * i, 100, 70, 50),
            tool,
        });

        Self {
            canvas_width: 500,
            canvas_height: 500,
            background: Color::WHITE,
            brush_width: 20,
            eraser_width: 20,
            initial_tool: ToolKind::Brush,
            initial_color: TEAL,
            buttons: color_buttons.chain(tool_buttons).collect(),
        }
    }
}

impl PaintConfig {
    pub fn from_json(json: &str) -> PaintResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> PaintResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path`, falling back to the defaults when it cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            log::warn!("Using default config, {}: {}", path.display(), err);
            Self::default()
        })
    }

    pub fn to_json(&self) -> PaintResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaintError;
    use crate::geometry::hit_testing;

    #[test]
    fn test_default_layout_is_valid() {
        let config = PaintConfig::default();
        assert_eq!(config.buttons.len(), 9);

        let rects: Vec<PixelRect> = config
            .buttons
            .iter()
            .map(|spec| match spec {
                ButtonSpec::Color { rect, .. } | ButtonSpec::Tool { rect, .. } => *rect,
            })
            .collect();
        assert!(hit_testing::validate_layout(&rects).is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PaintConfig::from_json(r#"{ "canvas_width": 64, "initial_tool": "bucket" }"#).unwrap();
        assert_eq!(config.canvas_width, 64);
        assert_eq!(config.initial_tool, ToolKind::Bucket);
        assert_eq!(config.canvas_height, 500);
        assert_eq!(config.buttons, PaintConfig::default().buttons);
    }

    #[test]
    fn test_button_specs_parse() {
        let json = r#"{
            "buttons": [
                { "kind": "color", "rect": { "x": 0, "y": 0, "width": 20, "height": 20 }, "color": [200, 0, 0] },
                { "kind": "tool", "rect": { "x": 20, "y": 0, "width": 40, "height": 20 }, "tool": "eraser" }
            ]
        }"#;
        let config = PaintConfig::from_json(json).unwrap();
        assert_eq!(
            config.buttons,
            vec![
                ButtonSpec::Color { rect: PixelRect::new(0, 0, 20, 20), color: Color::new(200, 0, 0) },
                ButtonSpec::Tool { rect: PixelRect::new(20, 0, 40, 20), tool: ToolKind::Eraser },
            ]
        );
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = PaintConfig::default();
        let parsed = PaintConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            PaintConfig::from_json("{ not json"),
            Err(PaintError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = PaintConfig::load_or_default(Path::new("/nonexistent/pixel_paint.json"));
        assert_eq!(config, PaintConfig::default());
    }
}
