//! Interaction controller: turns pointer events into shape store changes.

use crate::config::BoardConfig;
use crate::input::{PointerEvent, PointerEventKind};
use crate::session::{Gesture, Session};
use crate::shapes::{Circle, Freehand, Line, Rectangle, Shape, ShapeId, Text};
use crate::store::ShapeStore;
use crate::tools::{ToolKind, ToolState};
use kurbo::{Point, Size};

/// Status shown when a touch pointer tries to draw.
pub const TOUCH_BLOCKED_STATUS: &str = "Touch drawing is not supported";

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing changed.
    Ignored,
    /// The shape store changed; the board needs a redraw.
    Changed,
    /// The active gesture ended without changing the store.
    Ended,
    /// Touch input was refused and the status message was set.
    TouchBlocked,
}

impl EventOutcome {
    pub fn needs_redraw(self) -> bool {
        self == EventOutcome::Changed
    }
}

/// Owns the shape store, the tool state and the gesture in progress.
///
/// Events are handled one at a time and run to completion.
#[derive(Debug, Clone)]
pub struct Controller {
    store: ShapeStore,
    tools: ToolState,
    gesture: Gesture,
    canvas_size: Option<Size>,
    bounds_checking: bool,
    text_placeholder: String,
    status: Option<String>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::from_config(&BoardConfig::default())
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self {
            store: ShapeStore::new(),
            tools: ToolState::from_config(config),
            gesture: Gesture::Idle,
            canvas_size: config.canvas_size(),
            bounds_checking: config.bounds_checking,
            text_placeholder: config.text_placeholder.clone(),
            status: None,
        }
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    /// Color and stroke size controls.
    pub fn tools_mut(&mut self) -> &mut ToolState {
        &mut self.tools
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Status line written by refused input.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Current pixel size of the canvas, used for bounds checking.
    pub fn set_canvas_size(&mut self, size: Size) {
        self.canvas_size = Some(size);
    }

    /// Select a tool.
    ///
    /// Switching mid-gesture is unsupported; the gesture is dropped.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.gesture.is_active() {
            log::debug!("Tool changed to {tool} during a gesture, ending it");
            self.gesture = Gesture::Idle;
        }
        self.tools.set_tool(tool);
    }

    /// Handle one pointer event.
    pub fn handle(&mut self, event: &PointerEvent) -> EventOutcome {
        match event.kind {
            PointerEventKind::Down => self.pointer_down(event),
            PointerEventKind::Move => self.pointer_move(event),
            PointerEventKind::Up | PointerEventKind::Leave => self.pointer_up(),
        }
    }

    fn block_touch(&mut self) -> EventOutcome {
        self.status = Some(TOUCH_BLOCKED_STATUS.to_string());
        EventOutcome::TouchBlocked
    }

    fn pointer_down(&mut self, event: &PointerEvent) -> EventOutcome {
        if event.is_touch() {
            return self.block_touch();
        }
        if self.gesture.is_active() {
            log::debug!("Pointer down while a gesture is active, starting over");
        }

        let tool = self.tools.tool();
        let position = event.position;
        let style = self.tools.style();
        let shape = match tool {
            ToolKind::Pen => Shape::Freehand(Freehand::start(position, style)),
            ToolKind::Line => Shape::Line(Line::start(position, style)),
            ToolKind::Rectangle => Shape::Rectangle(Rectangle::start(position, style)),
            ToolKind::Circle => Shape::Circle(Circle::start(position, style)),
            ToolKind::Text => {
                Shape::Text(Text::new(position, self.text_placeholder.clone(), style))
            }
            ToolKind::Eraser => {
                self.gesture = Gesture::Erasing;
                return self.erase(event.target);
            }
        };

        let slot = self.store.push(shape);
        log::debug!(
            "Started {tool} gesture at ({}, {}), shape {}",
            position.x,
            position.y,
            slot.id
        );
        self.gesture = Gesture::Drawing(Session { tool, shape: slot });
        EventOutcome::Changed
    }

    fn pointer_move(&mut self, event: &PointerEvent) -> EventOutcome {
        if event.is_touch() {
            return self.block_touch();
        }
        if !self.gesture.is_active() {
            return EventOutcome::Ignored;
        }
        if self.out_of_bounds(event.position) {
            log::debug!(
                "Pointer left the canvas at ({}, {}), ending gesture",
                event.position.x,
                event.position.y
            );
            self.gesture = Gesture::Idle;
            return EventOutcome::Ended;
        }

        match self.gesture {
            Gesture::Idle => EventOutcome::Ignored,
            Gesture::Erasing => self.erase(event.target),
            Gesture::Drawing(session) => self.grow(session, event.position),
        }
    }

    fn pointer_up(&mut self) -> EventOutcome {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => EventOutcome::Ignored,
            Gesture::Drawing(session) => {
                log::debug!("Finished {} gesture, shape {}", session.tool, session.shape.id);
                EventOutcome::Ended
            }
            Gesture::Erasing => EventOutcome::Ended,
        }
    }

    fn out_of_bounds(&self, position: Point) -> bool {
        if !self.bounds_checking {
            return false;
        }
        self.canvas_size.is_some_and(|size| {
            position.x < 0.0
                || position.x > size.width
                || position.y < 0.0
                || position.y > size.height
        })
    }

    /// Replace the session's shape with its next state for `position`.
    fn grow(&mut self, session: Session, position: Point) -> EventOutcome {
        let Some(current) = self.store.get(session.shape) else {
            log::warn!("In-progress shape {} is gone, ending gesture", session.shape.id);
            self.gesture = Gesture::Idle;
            return EventOutcome::Ended;
        };

        let next = match current {
            Shape::Freehand(stroke) => Shape::Freehand(stroke.with_point(position)),
            Shape::Line(line) => Shape::Line(line.with_end(position)),
            Shape::Rectangle(rect) => Shape::Rectangle(rect.with_corner(position)),
            Shape::Circle(circle) => Shape::Circle(circle.through(position)),
            Shape::Text(_) => return EventOutcome::Ignored,
        };
        if &next == current {
            return EventOutcome::Ignored;
        }

        match self.store.replace(session.shape, next) {
            Ok(slot) => {
                log::trace!("Grew shape {} to ({}, {})", slot.id, position.x, position.y);
                self.gesture = Gesture::Drawing(Session { shape: slot, ..session });
                EventOutcome::Changed
            }
            Err(err) => {
                log::warn!("Failed to update in-progress shape: {err}");
                self.gesture = Gesture::Idle;
                EventOutcome::Ended
            }
        }
    }

    fn erase(&mut self, target: Option<ShapeId>) -> EventOutcome {
        let Some(id) = target else {
            return EventOutcome::Ignored;
        };
        match self.store.remove(id) {
            Some(shape) => {
                log::debug!("Erased {:?} shape {id}", shape.collection());
                EventOutcome::Changed
            }
            None => EventOutcome::Ignored,
        }
    }
}
