//! Canvas hosting the shape model and the active pointer gesture.

mod types;

pub use types::{Highlight, PointerEvent, PointerId};

use std::cell::Cell;
use std::rc::Rc;

use shapekit_core::{Point, Size, SubscriptionId};
use tracing::{debug, trace};

use crate::interaction::{InteractionController, InteractionHost, Mode};
use crate::path::DEFAULT_FLATTENING_TOLERANCE;
use crate::shape_model::{ChangeKind, ChangePhase, ModelChange, ShapeModel};

/// Default distance within which a pointer grabs an anchor or handle.
pub const DEFAULT_HIT_TOLERANCE: f64 = 12.0;

/// Everything a gesture may touch, split from the controller slot so both can
/// be borrowed at once.
#[derive(Debug)]
struct CanvasState {
    model: ShapeModel,
    size: Size,
    hit_tolerance: f64,
    flattening_tolerance: f64,
    highlighted: Rc<Cell<Option<usize>>>,
    /// Raised by the model observer when shapes are inserted or removed.
    invalidated: Rc<Cell<bool>>,
}

impl InteractionHost for CanvasState {
    fn model(&self) -> &ShapeModel {
        &self.model
    }

    fn model_mut(&mut self) -> &mut ShapeModel {
        &mut self.model
    }

    fn highlighted_element_index(&self) -> Option<usize> {
        self.highlighted.get()
    }

    fn highlight_element(&mut self, index: Option<usize>) {
        self.highlighted.set(index);
    }

    fn to_local(&self, position: Point) -> Point {
        position - Point::new(self.size.width / 2.0, self.size.height / 2.0).to_vector()
    }

    fn hit_tolerance(&self) -> f64 {
        self.hit_tolerance
    }

    fn flattening_tolerance(&self) -> f64 {
        self.flattening_tolerance
    }
}

/// Drawing surface state: the model, the highlighted element of the selected
/// shape and at most one running gesture.
///
/// View coordinates have their origin at the top-left corner; the canvas
/// center is the origin of canvas-local space.
#[derive(Debug)]
pub struct Canvas {
    state: CanvasState,
    interaction: Option<InteractionController>,
    subscription: SubscriptionId,
}

impl Canvas {
    /// Creates a canvas and registers it as an observer of `model`.
    pub fn new(mut model: ShapeModel, size: Size) -> Self {
        let highlighted = Rc::new(Cell::new(None));
        let invalidated = Rc::new(Cell::new(false));

        let highlight_sink = highlighted.clone();
        let invalidated_sink = invalidated.clone();
        let subscription = model.add_observer(move |change: &ModelChange| {
            if change.phase != ChangePhase::Post {
                return;
            }
            match change.kind {
                ChangeKind::SelectionChanged { .. } => highlight_sink.set(None),
                ChangeKind::ShapeInserted(_) | ChangeKind::ShapeRemoved(_) => {
                    invalidated_sink.set(true)
                }
                ChangeKind::PathChanged(_)
                | ChangeKind::OriginChanged(_)
                | ChangeKind::NameChanged(_) => {}
            }
        });

        Self {
            state: CanvasState {
                model,
                size,
                hit_tolerance: DEFAULT_HIT_TOLERANCE,
                flattening_tolerance: DEFAULT_FLATTENING_TOLERANCE,
                highlighted,
                invalidated,
            },
            interaction: None,
            subscription,
        }
    }

    pub fn with_hit_tolerance(mut self, tolerance: f64) -> Self {
        self.state.hit_tolerance = tolerance;
        self
    }

    /// Sets the curve flattening tolerance used when picking shapes.
    pub fn with_flattening_tolerance(mut self, tolerance: f64) -> Self {
        self.state.flattening_tolerance = tolerance;
        self
    }

    pub fn model(&self) -> &ShapeModel {
        &self.state.model
    }

    /// Mutable access to the model. Inserting or removing shapes ends the
    /// running gesture.
    pub fn model_mut(&mut self) -> &mut ShapeModel {
        &mut self.state.model
    }

    /// Detaches the canvas observer and hands the model back.
    pub fn into_model(mut self) -> ShapeModel {
        self.state.model.remove_observer(self.subscription);
        self.state.model
    }

    pub fn size(&self) -> Size {
        self.state.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.state.size = size;
    }

    pub fn hit_tolerance(&self) -> f64 {
        self.state.hit_tolerance
    }

    pub fn flattening_tolerance(&self) -> f64 {
        self.state.flattening_tolerance
    }

    /// Center of the canvas in view coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.state.size.width / 2.0, self.state.size.height / 2.0)
    }

    /// Converts a view position into canvas-local coordinates.
    pub fn to_local(&self, position: Point) -> Point {
        self.state.to_local(position)
    }

    /// Converts a canvas-local position into view coordinates.
    pub fn to_view(&self, position: Point) -> Point {
        position + self.center().to_vector()
    }

    pub fn highlighted_element_index(&self) -> Option<usize> {
        self.state.highlighted.get()
    }

    pub fn highlight_element(&mut self, index: Option<usize>) {
        self.state.highlighted.set(index);
    }

    /// How the shape at `shape_index` should be drawn.
    pub fn highlight_for(&self, shape_index: usize) -> Highlight {
        if self.state.model.selected_shape_index() != Some(shape_index) {
            return Highlight::Default;
        }
        match self.state.highlighted.get() {
            Some(element_index) => Highlight::Editing { element_index },
            None => Highlight::Selected,
        }
    }

    pub fn is_interacting(&self) -> bool {
        self.interaction.is_some()
    }

    pub fn interaction_mode(&self) -> Option<&Mode> {
        self.interaction.as_ref().map(InteractionController::mode)
    }

    /// Drops the running gesture without touching the model.
    pub fn end_interaction(&mut self) {
        if self.interaction.take().is_some() {
            debug!("Interaction ended");
        }
    }

    /// Starts a gesture. Returns whether the event was handled.
    ///
    /// Ignored while another gesture runs or when more than one pointer is
    /// down.
    pub fn pointer_began(&mut self, event: &PointerEvent) -> bool {
        self.sync_interaction();
        if self.interaction.is_some() || event.touch_count != 1 {
            trace!(
                "Ignoring pointer down (active: {}, touches: {})",
                self.interaction.is_some(),
                event.touch_count
            );
            return false;
        }

        let mut controller = InteractionController::new(event);
        let handled = controller.process_began(event, &mut self.state);
        if handled {
            self.interaction = Some(controller);
        }
        handled
    }

    pub fn pointer_moved(&mut self, event: &PointerEvent) -> bool {
        self.sync_interaction();
        match self.interaction.as_mut() {
            Some(controller) => controller.process_moved(event, &mut self.state),
            None => false,
        }
    }

    pub fn pointer_ended(&mut self, event: &PointerEvent) -> bool {
        self.sync_interaction();
        match self.interaction.take() {
            Some(mut controller) => controller.process_ended(event, &mut self.state),
            None => false,
        }
    }

    pub fn pointer_cancelled(&mut self, event: &PointerEvent) -> bool {
        self.sync_interaction();
        match self.interaction.take() {
            Some(mut controller) => controller.process_cancelled(event, &mut self.state),
            None => false,
        }
    }

    fn sync_interaction(&mut self) {
        if self.state.invalidated.replace(false) {
            self.end_interaction();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    fn canvas_with(shapes: Vec<Shape>) -> Canvas {
        Canvas::new(ShapeModel::with_shapes(shapes), Size::new(400.0, 300.0))
    }

    #[test]
    fn test_coordinate_conversion() {
        let canvas = canvas_with(Vec::new());
        assert_eq!(canvas.center(), Point::new(200.0, 150.0));
        assert_eq!(canvas.to_local(Point::new(200.0, 150.0)), Point::ZERO);
        assert_eq!(
            canvas.to_view(Point::new(-10.0, 5.0)),
            Point::new(190.0, 155.0)
        );
    }

    #[test]
    fn test_selection_change_clears_highlight() {
        let mut canvas = canvas_with(vec![Shape::rectangle(), Shape::ellipse()]);
        canvas.model_mut().select_shape(0).unwrap();
        canvas.highlight_element(Some(2));
        assert_eq!(canvas.highlight_for(0), Highlight::Editing { element_index: 2 });
        assert_eq!(canvas.highlight_for(1), Highlight::Default);

        canvas.model_mut().select_shape(1).unwrap();
        assert_eq!(canvas.highlighted_element_index(), None);
        assert_eq!(canvas.highlight_for(1), Highlight::Selected);
    }

    #[test]
    fn test_insert_ends_interaction() {
        let mut canvas = canvas_with(vec![Shape::rectangle()]);
        let down = PointerEvent::new(PointerId(1), canvas.center());
        assert!(canvas.pointer_began(&down));
        assert!(canvas.is_interacting());

        canvas
            .model_mut()
            .add_template_shape(Shape::ellipse())
            .unwrap();
        let moved = PointerEvent::new(PointerId(1), Point::new(210.0, 150.0));
        assert!(!canvas.pointer_moved(&moved));
        assert!(!canvas.is_interacting());
    }

    #[test]
    fn test_unhandled_began_leaves_no_interaction() {
        let mut canvas = canvas_with(vec![Shape::rectangle()]);
        let down = PointerEvent::new(PointerId(1), Point::new(5.0, 5.0));
        assert!(!canvas.pointer_began(&down));
        assert!(!canvas.is_interacting());
        assert!(!canvas.pointer_ended(&down));
    }

    #[test]
    fn test_into_model_detaches_observer() {
        let canvas = canvas_with(vec![Shape::rectangle()]);
        assert_eq!(canvas.model().observer_count(), 1);
        let model = canvas.into_model();
        assert_eq!(model.observer_count(), 0);
    }
}
