//! Eraser cursor: a circle that follows the pointer while erasing.
//!
//! Purely visual. It tracks raw viewport coordinates, not canvas
//! coordinates, so on a canvas with a non-zero offset the indicator and
//! the erased position differ by that offset.

use crate::tools::ToolKind;
use kurbo::{Circle, Point};
use std::fmt;

/// A registered event listener, detached when dropped.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the callback that detaches the listener.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Detach now.
    pub fn cancel(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.release.is_some())
            .finish()
    }
}

/// Pointer follower shown while the eraser tool is selected.
#[derive(Debug)]
pub struct EraserCursor {
    radius: f64,
    position: Option<Point>,
    listener: Option<Subscription>,
}

impl EraserCursor {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            position: None,
            listener: None,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether the pointer-move listener is attached.
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// React to a tool change.
    ///
    /// Switching to the eraser attaches a listener obtained from `attach`;
    /// switching away releases it and hides the cursor.
    pub fn set_tool<F>(&mut self, tool: ToolKind, attach: F)
    where
        F: FnOnce() -> Subscription,
    {
        match (tool, self.listener.is_some()) {
            (ToolKind::Eraser, false) => {
                log::debug!("Attaching eraser cursor listener");
                self.listener = Some(attach());
            }
            (ToolKind::Eraser, true) => {}
            (_, _) => self.detach(),
        }
    }

    /// Release the listener and hide the cursor.
    pub fn detach(&mut self) {
        if let Some(listener) = self.listener.take() {
            log::debug!("Detaching eraser cursor listener");
            listener.cancel();
        }
        self.position = None;
    }

    /// Record a raw viewport pointer position. Ignored while detached.
    pub fn pointer_moved(&mut self, client_position: Point) {
        if self.is_attached() {
            self.position = Some(client_position);
        }
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Indicator circle centered on the last pointer position.
    pub fn indicator(&self) -> Option<Circle> {
        self.position.map(|center| Circle::new(center, self.radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_attach(live: &Rc<Cell<usize>>) -> Box<dyn FnOnce() -> Subscription> {
        let live = Rc::clone(live);
        Box::new(move || {
            live.set(live.get() + 1);
            Subscription::new(move || live.set(live.get() - 1))
        })
    }

    #[test]
    fn test_attach_only_for_eraser() {
        let live = Rc::new(Cell::new(0));
        let mut cursor = EraserCursor::new(10.0);
        cursor.set_tool(ToolKind::Pen, counting_attach(&live));
        assert_eq!(live.get(), 0);
        cursor.set_tool(ToolKind::Eraser, counting_attach(&live));
        assert_eq!(live.get(), 1);
        cursor.set_tool(ToolKind::Eraser, counting_attach(&live));
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn test_switching_away_releases() {
        let live = Rc::new(Cell::new(0));
        let mut cursor = EraserCursor::new(10.0);
        cursor.set_tool(ToolKind::Eraser, counting_attach(&live));
        cursor.pointer_moved(Point::new(30.0, 40.0));
        cursor.set_tool(ToolKind::Circle, counting_attach(&live));
        assert_eq!(live.get(), 0);
        assert!(cursor.indicator().is_none());
    }

    #[test]
    fn test_drop_releases() {
        let live = Rc::new(Cell::new(0));
        {
            let mut cursor = EraserCursor::new(10.0);
            cursor.set_tool(ToolKind::Eraser, counting_attach(&live));
            assert_eq!(live.get(), 1);
        }
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_follows_pointer_only_when_attached() {
        let live = Rc::new(Cell::new(0));
        let mut cursor = EraserCursor::new(12.0);
        cursor.pointer_moved(Point::new(1.0, 1.0));
        assert!(cursor.position().is_none());

        cursor.set_tool(ToolKind::Eraser, counting_attach(&live));
        cursor.pointer_moved(Point::new(30.0, 40.0));
        let indicator = cursor.indicator().unwrap();
        assert_eq!(indicator.center, Point::new(30.0, 40.0));
        assert!((indicator.radius - 12.0).abs() < f64::EPSILON);
    }
}
