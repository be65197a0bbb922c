//! Inkpad Core Library
//!
//! Platform-agnostic shape model and the pointer interaction state machine
//! of the Inkpad drawing board.

pub mod config;
pub mod controller;
pub mod eraser;
pub mod input;
pub mod session;
pub mod shapes;
pub mod store;
pub mod tools;

pub use config::{BoardConfig, ConfigError};
pub use controller::{Controller, EventOutcome, TOUCH_BLOCKED_STATUS};
pub use eraser::{EraserCursor, Subscription};
pub use input::{PointerEvent, PointerEventKind, PointerType};
pub use session::{Gesture, Session};
pub use shapes::{Collection, Shape, ShapeColor, ShapeId, ShapeStyle};
pub use store::{ShapeRef, ShapeStore, StoreError};
pub use tools::{ToolError, ToolKind, ToolState};
