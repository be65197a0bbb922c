//! Board configuration.

use crate::shapes::ShapeColor;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Static settings of a drawing board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Upper bound of the stroke size control.
    pub max_stroke_size: u32,
    /// Stroke size selected at startup.
    pub default_stroke_size: u32,
    /// Color selected at startup.
    pub default_color: ShapeColor,
    /// Content of every new text label.
    pub text_placeholder: String,
    /// Radius of the eraser cursor indicator in pixels.
    pub eraser_radius: f64,
    /// End a gesture when the pointer leaves the canvas.
    pub bounds_checking: bool,
    /// Extra slack in pixels around shapes when the eraser picks a target.
    pub hit_tolerance: f64,
    pub canvas_width: Option<f64>,
    pub canvas_height: Option<f64>,
    /// Top-left corner of the canvas in viewport coordinates.
    pub canvas_x: f64,
    pub canvas_y: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_stroke_size: 100,
            default_stroke_size: 5,
            default_color: ShapeColor::black(),
            text_placeholder: "Sample".to_string(),
            eraser_radius: 10.0,
            bounds_checking: true,
            hit_tolerance: 0.0,
            canvas_width: None,
            canvas_height: None,
            canvas_x: 0.0,
            canvas_y: 0.0,
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded board config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_stroke_size == 0 {
            return Err(ConfigError::Invalid("max_stroke_size must be at least 1".into()));
        }
        if self.eraser_radius <= 0.0 {
            return Err(ConfigError::Invalid("eraser_radius must be positive".into()));
        }
        if self.hit_tolerance.is_nan() || self.hit_tolerance < 0.0 {
            return Err(ConfigError::Invalid("hit_tolerance must not be negative".into()));
        }
        let sizes = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ];
        for (name, value) in sizes {
            if value.is_some_and(|v| v <= 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive")));
            }
        }
        for (name, value) in [("canvas_x", self.canvas_x), ("canvas_y", self.canvas_y)] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }
        Ok(())
    }

    /// Canvas size when both dimensions are configured.
    pub fn canvas_size(&self) -> Option<Size> {
        Some(Size::new(self.canvas_width?, self.canvas_height?))
    }

    /// Position of the canvas within the viewport.
    pub fn canvas_origin(&self) -> Point {
        Point::new(self.canvas_x, self.canvas_y)
    }

    /// Clamp a stroke size to `[1, max_stroke_size]`.
    pub fn clamp_stroke_size(&self, size: u32) -> u32 {
        size.clamp(1, self.max_stroke_size.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.max_stroke_size, 100);
        assert_eq!(config.default_stroke_size, 5);
        assert_eq!(config.text_placeholder, "Sample");
        assert!(config.bounds_checking);
        assert!(config.canvas_size().is_none());
        assert_eq!(config.canvas_origin(), Point::ZERO);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BoardConfig::from_json(
            r#"{ "max_stroke_size": 50, "canvas_width": 800, "canvas_height": 600 }"#,
        )
        .unwrap();
        assert_eq!(config.max_stroke_size, 50);
        assert_eq!(config.default_stroke_size, 5);
        assert_eq!(config.canvas_size(), Some(Size::new(800.0, 600.0)));
    }

    #[test]
    fn test_canvas_offset() {
        let config = BoardConfig::from_json(r#"{ "canvas_x": 20, "canvas_y": 100 }"#).unwrap();
        assert_eq!(config.canvas_origin(), Point::new(20.0, 100.0));
    }

    #[test]
    fn test_clamp() {
        let config = BoardConfig {
            max_stroke_size: 50,
            ..Default::default()
        };
        assert_eq!(config.clamp_stroke_size(0), 1);
        assert_eq!(config.clamp_stroke_size(20), 20);
        assert_eq!(config.clamp_stroke_size(500), 50);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(
            BoardConfig::from_json(r#"{ "max_stroke_size": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BoardConfig::from_json(r#"{ "canvas_width": -1 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BoardConfig::from_json(r#"{ "hit_tolerance": -2 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BoardConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "eraser_radius": 16.0 }}"#).unwrap();
        let config = BoardConfig::load(file.path()).unwrap();
        assert!((config.eraser_radius - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            BoardConfig::load(dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
