//! Scripted editing sessions.
//!
//! Builds a canvas from [`Config`] and replays a pointer drag against it,
//! recording every model change the drag produced.

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use shapekit_core::{Point, Size, Vector};
use shapekit_designer::{
    Canvas, DesignerResult, ModelChange, PointerEvent, PointerId, Shape, ShapeModel,
};
use shapekit_settings::Config;
use tracing::{debug, info};

/// Horizontal distance between consecutive template shapes.
const SHAPE_SPACING: f64 = 140.0;

/// Creates a canvas holding `count` random templates laid out in a row
/// centered on the canvas origin.
pub fn build_canvas<R: Rng + ?Sized>(
    config: &Config,
    rng: &mut R,
    count: usize,
) -> DesignerResult<Canvas> {
    let mut model = ShapeModel::new();
    for _ in 0..count {
        model.add_template_shape(Shape::random_template(rng))?;
    }

    let first_x = -SHAPE_SPACING * (count.saturating_sub(1)) as f64 / 2.0;
    for index in 0..count {
        model.set_origin(index, Point::new(first_x + SHAPE_SPACING * index as f64, 0.0))?;
    }

    for (index, shape) in model.shapes().iter().enumerate() {
        let icon_size = Size::new(config.icon.size, config.icon.size);
        let layout = shape.icon_layout(icon_size, config.icon.padding)?;
        debug!(
            "Shape {} '{}' at {:?}, icon scale {:.3}",
            index, shape.name, shape.origin, layout.scale
        );
    }

    let size = Size::new(config.canvas.width, config.canvas.height);
    Ok(Canvas::new(model, size)
        .with_hit_tolerance(config.interaction.hit_tolerance)
        .with_flattening_tolerance(config.interaction.flattening_tolerance))
}

/// A single-pointer drag in canvas-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct DragScript {
    pub pointer: PointerId,
    pub start: Point,
    /// Offsets of successive moves, each relative to the start.
    pub steps: Vec<Vector>,
    /// End with a cancel instead of a release.
    pub cancel: bool,
}

/// What happened while a [`DragScript`] ran.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionReport {
    pub began: bool,
    pub moves_handled: usize,
    pub finished: bool,
    /// Whether the selected shape covers the final pointer position.
    pub selection_under_pointer: bool,
    pub changes: Vec<ModelChange>,
}

impl DragScript {
    pub fn new(start: Point) -> Self {
        Self {
            pointer: PointerId(1),
            start,
            steps: Vec::new(),
            cancel: false,
        }
    }

    pub fn step(mut self, offset: Vector) -> Self {
        self.steps.push(offset);
        self
    }

    pub fn cancelled(mut self) -> Self {
        self.cancel = true;
        self
    }

    /// Replays the drag against `canvas`.
    pub fn run(&self, canvas: &mut Canvas, config: &Config) -> SessionReport {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let subscription = canvas
            .model_mut()
            .add_observer(move |change: &ModelChange| sink.borrow_mut().push(*change));

        let event_at = |canvas: &Canvas, local: Point| {
            PointerEvent::new(self.pointer, canvas.to_view(local))
        };

        let down = event_at(canvas, self.start);
        let mut report = SessionReport {
            began: canvas.pointer_began(&down),
            ..SessionReport::default()
        };
        info!("Drag from {:?} handled: {}", self.start, report.began);

        let mut last = self.start;
        for offset in &self.steps {
            last = self.start + *offset;
            let moved = event_at(canvas, last);
            if canvas.pointer_moved(&moved) {
                report.moves_handled += 1;
            }
        }

        let end = event_at(canvas, last);
        report.finished = if self.cancel {
            canvas.pointer_cancelled(&end)
        } else {
            canvas.pointer_ended(&end)
        };

        report.selection_under_pointer = canvas.model().selected_shape().is_some_and(|shape| {
            shape.contains_with_tolerance(last, config.interaction.flattening_tolerance)
        });

        canvas.model_mut().remove_observer(subscription);
        report.changes = log.borrow().clone();
        info!(
            "Drag finished: {} moves handled, {} model changes",
            report.moves_handled,
            report.changes.len()
        );
        report
    }
}
