//! Tool state: which tool is active and the style new shapes get.

use crate::config::BoardConfig;
use crate::shapes::{ColorError, ShapeColor, ShapeStyle};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tool selection errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("unknown tool: {0:?}")]
    UnknownTool(String),
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorError),
}

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Pen,
    Line,
    Rectangle,
    Circle,
    Text,
    Eraser,
}

impl ToolKind {
    /// All tools in selector order.
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Pen,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Text,
        ToolKind::Eraser,
    ];

    /// Name used by the tool selector.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pen => "pen",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
            ToolKind::Text => "text",
            ToolKind::Eraser => "eraser",
        }
    }

    /// Whether pointer-down with this tool creates a shape.
    pub fn creates_shapes(self) -> bool {
        !matches!(self, ToolKind::Eraser)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

/// Current tool, color and stroke size.
///
/// Read on every pointer-down; changes only affect shapes created later.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    tool: ToolKind,
    color: ShapeColor,
    stroke_size: u32,
    max_stroke_size: u32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self {
            tool: ToolKind::default(),
            color: config.default_color,
            stroke_size: config.clamp_stroke_size(config.default_stroke_size),
            max_stroke_size: config.max_stroke_size.max(1),
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn color(&self) -> ShapeColor {
        self.color
    }

    pub fn stroke_size(&self) -> u32 {
        self.stroke_size
    }

    pub(crate) fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    /// Set the color from the color control's `#rrggbb` value.
    pub fn set_color_hex(&mut self, value: &str) -> Result<(), ToolError> {
        self.color = ShapeColor::from_hex(value)?;
        Ok(())
    }

    /// Set the stroke size, clamped to `[1, max]`. Returns the stored value.
    pub fn set_stroke_size(&mut self, size: u32) -> u32 {
        self.stroke_size = size.clamp(1, self.max_stroke_size);
        self.stroke_size
    }

    /// Style for a shape created now.
    pub fn style(&self) -> ShapeStyle {
        ShapeStyle::new(self.color, self.stroke_size)
    }
}
