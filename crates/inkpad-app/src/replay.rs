//! Drives the board from a sequence of user actions.

use crate::error::AppError;
use crate::script::Step;
use inkpad_core::{BoardConfig, Controller, EraserCursor, EventOutcome, ShapeStore};
use inkpad_render::{DisplayListRenderer, RenderContext, Renderer, Stage};
use kurbo::Size;

/// Canvas size used when the config does not set one.
pub const DEFAULT_CANVAS_SIZE: Size = Size::new(800.0, 600.0);

/// Counters collected while replaying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub steps: usize,
    pub redraws: usize,
    pub touch_blocked: usize,
}

/// The board with its collaborators: stage, renderer and eraser cursor.
pub struct Replayer {
    controller: Controller,
    stage: Stage,
    renderer: DisplayListRenderer,
    cursor: EraserCursor,
    report: ReplayReport,
}

impl Replayer {
    pub fn new(config: &BoardConfig) -> Self {
        let stage = Stage::new(config.canvas_size().unwrap_or(DEFAULT_CANVAS_SIZE))
            .with_origin(config.canvas_origin());
        let mut controller = Controller::from_config(config);
        controller.set_canvas_size(stage.size());
        let mut replayer = Self {
            controller,
            stage,
            renderer: DisplayListRenderer::new().with_hit_tolerance(config.hit_tolerance),
            cursor: EraserCursor::new(config.eraser_radius),
            report: ReplayReport::default(),
        };
        replayer.redraw();
        replayer
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn renderer(&self) -> &DisplayListRenderer {
        &self.renderer
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn cursor(&self) -> &EraserCursor {
        &self.cursor
    }

    pub fn report(&self) -> ReplayReport {
        self.report
    }

    pub fn store(&self) -> &ShapeStore {
        self.controller.store()
    }

    /// Apply every step in order.
    pub fn run(&mut self, steps: &[Step]) -> Result<ReplayReport, AppError> {
        for (index, step) in steps.iter().enumerate() {
            self.apply(step)
                .map_err(|source| AppError::Step { step: index, source })?;
        }
        log::info!(
            "Replayed {} steps: {} shapes, {} redraws",
            self.report.steps,
            self.store().len(),
            self.report.redraws
        );
        Ok(self.report)
    }

    /// Apply one step.
    pub fn apply(&mut self, step: &Step) -> Result<(), inkpad_core::ToolError> {
        self.report.steps += 1;
        match step {
            Step::Tool(tool) => {
                self.controller.set_tool(*tool);
                let stage = &self.stage;
                self.cursor.set_tool(*tool, || stage.listen_pointer_moves());
                self.redraw();
            }
            Step::Color(color) => self.controller.tools_mut().set_color_hex(color)?,
            Step::Size(size) => {
                let applied = self.controller.tools_mut().set_stroke_size(*size);
                if applied != *size {
                    log::warn!("Stroke size {size} clamped to {applied}");
                }
            }
            Step::Down(_) | Step::Move(_) | Step::Up(_) | Step::Leave(_) => self.pointer(step),
        }
        Ok(())
    }

    fn pointer(&mut self, step: &Step) {
        let Some((kind, input)) = step.pointer() else {
            return;
        };
        let client = input.position();
        let event = self.stage.resolve(kind, client, input.pointer, &self.renderer);

        let cursor_moved = self.cursor.is_attached() && self.cursor.position() != Some(client);
        self.cursor.pointer_moved(client);

        let outcome = self.controller.handle(&event);
        if outcome == EventOutcome::TouchBlocked {
            self.report.touch_blocked += 1;
            if let Some(status) = self.controller.status() {
                log::info!("{status}");
            }
        }
        if outcome.needs_redraw() || cursor_moved {
            self.redraw();
        }
    }

    fn redraw(&mut self) {
        let ctx = RenderContext::new(self.controller.store(), self.stage.size())
            .with_eraser_cursor(self.cursor.indicator());
        self.renderer.build_scene(&ctx);
        self.report.redraws += 1;
    }
}
