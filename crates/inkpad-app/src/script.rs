//! Replay script format.

use crate::error::AppError;
use inkpad_core::input::{PointerEventKind, PointerType};
use inkpad_core::tools::ToolKind;
use kurbo::Point;
use serde::Deserialize;
use std::path::Path;

/// Raw pointer input in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointerInput {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub pointer: PointerType,
}

impl PointerInput {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Tool(ToolKind),
    Color(String),
    Size(u32),
    Down(PointerInput),
    Move(PointerInput),
    Up(PointerInput),
    Leave(PointerInput),
}

impl Step {
    /// Pointer phase and input for pointer steps.
    pub fn pointer(&self) -> Option<(PointerEventKind, PointerInput)> {
        match self {
            Step::Down(input) => Some((PointerEventKind::Down, *input)),
            Step::Move(input) => Some((PointerEventKind::Move, *input)),
            Step::Up(input) => Some((PointerEventKind::Up, *input)),
            Step::Leave(input) => Some((PointerEventKind::Leave, *input)),
            Step::Tool(_) | Step::Color(_) | Step::Size(_) => None,
        }
    }
}

/// Parse a script from its JSON text.
pub fn parse(json: &str) -> Result<Vec<Step>, AppError> {
    serde_json::from_str(json).map_err(AppError::Script)
}

/// Read and parse a script file.
pub fn load(path: &Path) -> Result<Vec<Step>, AppError> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let steps = parse(
            r##"[
                {"tool": "circle"},
                {"color": "#ff0000"},
                {"size": 8},
                {"down": {"x": 1, "y": 2}},
                {"move": {"x": 4, "y": 6, "pointer": "pen"}},
                {"up": {"x": 4, "y": 6}}
            ]"##,
        )
        .unwrap();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0], Step::Tool(ToolKind::Circle));
        assert_eq!(steps[1], Step::Color("#ff0000".into()));
        let (kind, input) = steps[4].pointer().unwrap();
        assert_eq!(kind, PointerEventKind::Move);
        assert_eq!(input.pointer, PointerType::Pen);
        assert_eq!(steps[3].pointer().unwrap().1.pointer, PointerType::Mouse);
        assert!(steps[2].pointer().is_none());
    }

    #[test]
    fn test_unknown_tool_rejected() {
        assert!(matches!(parse(r#"[{"tool": "lasso"}]"#), Err(AppError::Script(_))));
    }
}
