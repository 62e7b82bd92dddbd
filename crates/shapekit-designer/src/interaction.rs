//! Per-gesture state machine turning pointer events into model edits.
//!
//! An [`InteractionController`] lives for exactly one gesture. It never owns
//! the canvas; every event handler receives the canvas through the
//! [`InteractionHost`] trait instead.

use shapekit_core::{Point, Vector};
use tracing::{debug, warn};

use crate::canvas::{PointerEvent, PointerId};
use crate::error::DesignerResult;
use crate::path::PointType;
use crate::shape::{HitResult, Shape};
use crate::shape_model::ShapeModel;

/// What the canvas exposes to a running gesture.
pub trait InteractionHost {
    fn model(&self) -> &ShapeModel;
    fn model_mut(&mut self) -> &mut ShapeModel;
    fn highlighted_element_index(&self) -> Option<usize>;
    fn highlight_element(&mut self, index: Option<usize>);
    /// Converts a view position into canvas-local coordinates.
    fn to_local(&self, position: Point) -> Point;
    /// Maximum distance at which an anchor or handle counts as hit.
    fn hit_tolerance(&self) -> f64;
    /// Curve flattening tolerance for containment tests.
    fn flattening_tolerance(&self) -> f64;
}

/// Gesture state.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Idle,
    /// Dragging a whole shape.
    Translating {
        shape_index: usize,
        original_shape: Shape,
    },
    /// Dragging one anchor or handle of a shape's path.
    EditingPoint {
        shape_index: usize,
        element_index: usize,
        point_type: PointType,
        original_shape: Shape,
    },
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    pointer: PointerId,
    location_at_begin: Point,
    mode: Mode,
}

impl InteractionController {
    /// Starts a gesture for the pointer of `event`, in [`Mode::Idle`].
    pub fn new(event: &PointerEvent) -> Self {
        Self {
            pointer: event.pointer,
            location_at_begin: event.position,
            mode: Mode::Idle,
        }
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Decides what the gesture manipulates.
    ///
    /// The selected shape gets the first chance: a hit anchor or handle starts
    /// point editing, a hit inside starts translation. Otherwise the topmost
    /// shape under the pointer is selected and translated. Returns false when
    /// nothing is under the pointer; the selection is cleared in that case.
    pub fn process_began<H: InteractionHost>(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        let position = host.to_local(event.position);

        if let Some(selected_index) = host.model().selected_shape_index() {
            if let Some(shape) = host.model().get(selected_index).cloned() {
                let hit = shape.hit_test_with_tolerance(
                    position,
                    host.highlighted_element_index(),
                    host.hit_tolerance(),
                    host.flattening_tolerance(),
                );

                match hit {
                    HitResult::Inside => {
                        debug!("Translating selected shape {}", selected_index);
                        self.mode = Mode::Translating {
                            shape_index: selected_index,
                            original_shape: shape,
                        };
                        host.highlight_element(None);
                        return true;
                    }
                    HitResult::Point {
                        element_index,
                        point_type,
                    } => {
                        debug!(
                            "Editing {:?} of element {} in shape {}",
                            point_type, element_index, selected_index
                        );
                        self.mode = Mode::EditingPoint {
                            shape_index: selected_index,
                            element_index,
                            point_type,
                            original_shape: shape,
                        };
                        // A c0 handle belongs to the anchor before its element.
                        let highlighted = match point_type {
                            PointType::ControlPoint0 => element_index.saturating_sub(1),
                            PointType::OnPath | PointType::ControlPoint1 => element_index,
                        };
                        host.highlight_element(Some(highlighted));
                        return true;
                    }
                    HitResult::Outside => {}
                }
            }
        }

        let Some(hit_index) = host
            .model()
            .index_of_shape_at_with_tolerance(position, host.flattening_tolerance())
        else {
            debug!("Nothing under pointer at {:?}", position);
            host.model_mut().deselect_shape();
            return false;
        };

        if let Err(err) = host.model_mut().select_shape(hit_index) {
            warn!("Failed to select shape {}: {}", hit_index, err);
            return false;
        }
        let Some(original_shape) = host.model().get(hit_index).cloned() else {
            return false;
        };
        debug!("Selected and translating shape {}", hit_index);
        self.mode = Mode::Translating {
            shape_index: hit_index,
            original_shape,
        };
        true
    }

    /// Applies the drag relative to the state captured when the gesture began.
    pub fn process_moved<H: InteractionHost>(&mut self, event: &PointerEvent, host: &mut H) -> bool {
        if event.pointer != self.pointer {
            return false;
        }

        let translation = self.translation(event);
        let result = match &self.mode {
            Mode::Idle => return false,
            Mode::Translating {
                shape_index,
                original_shape,
            } => host
                .model_mut()
                .set_origin(*shape_index, original_shape.origin + translation),
            Mode::EditingPoint {
                shape_index,
                element_index,
                point_type,
                original_shape,
            } => apply_point_edit(
                host.model_mut(),
                *shape_index,
                original_shape,
                *element_index,
                *point_type,
                translation,
            ),
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                warn!("Dropping pointer move: {}", err);
                false
            }
        }
    }

    pub fn process_ended<H: InteractionHost>(&mut self, _event: &PointerEvent, _host: &mut H) -> bool {
        debug!("Gesture ended in {:?}", mode_name(&self.mode));
        true
    }

    /// Restores the origin the shape had when the gesture began.
    ///
    /// Path edits made while in [`Mode::EditingPoint`] are kept.
    pub fn process_cancelled<H: InteractionHost>(
        &mut self,
        _event: &PointerEvent,
        host: &mut H,
    ) -> bool {
        match &self.mode {
            Mode::Idle => false,
            Mode::Translating {
                shape_index,
                original_shape,
            }
            | Mode::EditingPoint {
                shape_index,
                original_shape,
                ..
            } => {
                debug!("Gesture cancelled, restoring origin of shape {}", shape_index);
                if let Err(err) = host
                    .model_mut()
                    .set_origin(*shape_index, original_shape.origin)
                {
                    warn!("Failed to restore origin: {}", err);
                }
                true
            }
        }
    }

    fn translation(&self, event: &PointerEvent) -> Vector {
        event.position - self.location_at_begin
    }
}

fn apply_point_edit(
    model: &mut ShapeModel,
    shape_index: usize,
    original_shape: &Shape,
    element_index: usize,
    point_type: PointType,
    translation: Vector,
) -> DesignerResult<()> {
    if let Some(command) = original_shape.path.command(element_index) {
        tracing::trace!(
            "Moving {:?} of {} {} by {:?}",
            point_type,
            command.kind_name(),
            element_index,
            translation
        );
    }
    let path = original_shape
        .path
        .translate_element(element_index, point_type, translation)?;
    model.set_path(shape_index, path)
}

fn mode_name(mode: &Mode) -> &'static str {
    match mode {
        Mode::Idle => "Idle",
        Mode::Translating { .. } => "Translating",
        Mode::EditingPoint { .. } => "EditingPoint",
    }
}
