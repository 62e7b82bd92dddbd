//! Ordered shape collection with single selection and change notifications.

use serde::{Deserialize, Serialize};
use shapekit_core::observer::Observer;
use shapekit_core::{CoreError, ObserverList, Point, SubscriptionId};
use tracing::debug;

use crate::error::DesignerResult;
use crate::path::{Path, DEFAULT_FLATTENING_TOLERANCE};
use crate::shape::Shape;

/// Whether a notification precedes or follows the mutation it announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangePhase {
    Pre,
    Post,
}

/// What changed in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    SelectionChanged {
        old: Option<usize>,
        new: Option<usize>,
    },
    ShapeInserted(usize),
    ShapeRemoved(usize),
    PathChanged(usize),
    OriginChanged(usize),
    NameChanged(usize),
}

/// A model change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelChange {
    pub phase: ChangePhase,
    pub kind: ChangeKind,
}

impl ModelChange {
    pub fn pre(kind: ChangeKind) -> Self {
        Self {
            phase: ChangePhase::Pre,
            kind,
        }
    }

    pub fn post(kind: ChangeKind) -> Self {
        Self {
            phase: ChangePhase::Post,
            kind,
        }
    }
}

/// Ordered shapes plus an optional single selection.
///
/// All mutation goes through this API so that every change is bracketed by a
/// `Pre` and a `Post` notification. Notification delivery is synchronous: a
/// mutator returns only after every observer saw the `Post` notification.
///
/// # Selection Model
///
/// - At most one shape is selected; `selected_shape_index` is either `None`
///   or a valid index
/// - Inserting or removing shapes before the selected one shifts the index so
///   that it keeps pointing at the same shape
/// - Removing the selected shape clears the selection first (with its own
///   selection notifications)
#[derive(Debug, Default)]
pub struct ShapeModel {
    shapes: Vec<Shape>,
    selected_shape_index: Option<usize>,
    observers: ObserverList<ModelChange>,
}

impl ShapeModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shapes(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            ..Self::default()
        }
    }

    /// Registers an observer for model changes.
    pub fn add_observer<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: Observer<ModelChange> + 'static,
    {
        self.observers.subscribe(observer)
    }

    /// Removes a previously registered observer. Returns false if unknown.
    pub fn remove_observer(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Returns the shape at `index`, failing for an out-of-range index.
    pub fn shape(&self, index: usize) -> DesignerResult<&Shape> {
        self.shapes
            .get(index)
            .ok_or_else(|| self.out_of_range(index).into())
    }

    pub fn selected_shape_index(&self) -> Option<usize> {
        self.selected_shape_index
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected_shape_index.and_then(|i| self.shapes.get(i))
    }

    /// Replaces the shape at `index`, announcing each changed field.
    ///
    /// Notifications are emitted in the fixed order path, origin, name for
    /// both phases. Nothing is emitted if the shapes are equal.
    pub fn set_shape(&mut self, index: usize, shape: Shape) -> DesignerResult<()> {
        let current = self.shape(index)?;

        let mut kinds = Vec::with_capacity(3);
        if current.path != shape.path {
            kinds.push(ChangeKind::PathChanged(index));
        }
        if current.origin != shape.origin {
            kinds.push(ChangeKind::OriginChanged(index));
        }
        if current.name != shape.name {
            kinds.push(ChangeKind::NameChanged(index));
        }
        if kinds.is_empty() {
            return Ok(());
        }

        for kind in &kinds {
            self.notify(ModelChange::pre(*kind));
        }
        self.shapes[index] = shape;
        for kind in &kinds {
            self.notify(ModelChange::post(*kind));
        }
        Ok(())
    }

    /// Applies `edit` to a copy of the shape at `index` and stores the result.
    pub fn update_shape<F>(&mut self, index: usize, edit: F) -> DesignerResult<()>
    where
        F: FnOnce(&mut Shape),
    {
        let mut shape = self.shape(index)?.clone();
        edit(&mut shape);
        self.set_shape(index, shape)
    }

    pub fn set_origin(&mut self, index: usize, origin: Point) -> DesignerResult<()> {
        self.update_shape(index, |shape| shape.origin = origin)
    }

    pub fn set_path(&mut self, index: usize, path: Path) -> DesignerResult<()> {
        self.update_shape(index, |shape| shape.path = path)
    }

    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> DesignerResult<()> {
        let name = name.into();
        self.update_shape(index, |shape| shape.name = name)
    }

    /// Inserts `shape` at `index` (`0..=len`).
    pub fn insert(&mut self, shape: Shape, index: usize) -> DesignerResult<()> {
        if index > self.shapes.len() {
            return Err(self.out_of_range(index).into());
        }

        let kind = ChangeKind::ShapeInserted(index);
        self.notify(ModelChange::pre(kind));
        debug!("Inserting shape '{}' at {}", shape.name, index);
        self.shapes.insert(index, shape);
        if let Some(selected) = self.selected_shape_index {
            if selected >= index {
                self.selected_shape_index = Some(selected + 1);
            }
        }
        self.notify(ModelChange::post(kind));
        Ok(())
    }

    /// Inserts a new shape at the top of the list.
    pub fn add_template_shape(&mut self, shape: Shape) -> DesignerResult<()> {
        self.insert(shape, 0)
    }

    /// Removes and returns the shape at `index`.
    pub fn remove(&mut self, index: usize) -> DesignerResult<Shape> {
        if index >= self.shapes.len() {
            return Err(self.out_of_range(index).into());
        }

        if self.selected_shape_index == Some(index) {
            self.deselect_shape();
        }

        let kind = ChangeKind::ShapeRemoved(index);
        self.notify(ModelChange::pre(kind));
        let removed = self.shapes.remove(index);
        debug!("Removed shape '{}' at {}", removed.name, index);
        if let Some(selected) = self.selected_shape_index {
            if selected > index {
                self.selected_shape_index = Some(selected - 1);
            }
        }
        self.notify(ModelChange::post(kind));
        Ok(removed)
    }

    /// Deselects, then removes the shape at `index`.
    pub fn delete_shape(&mut self, index: usize) -> DesignerResult<Shape> {
        self.deselect_shape();
        self.remove(index)
    }

    pub fn select_shape(&mut self, index: usize) -> DesignerResult<()> {
        if index >= self.shapes.len() {
            return Err(self.out_of_range(index).into());
        }
        self.set_selection(Some(index));
        Ok(())
    }

    pub fn deselect_shape(&mut self) {
        self.set_selection(None);
    }

    /// Index of the first shape containing `position`, if any.
    pub fn index_of_shape_at(&self, position: Point) -> Option<usize> {
        self.index_of_shape_at_with_tolerance(position, DEFAULT_FLATTENING_TOLERANCE)
    }

    /// [`ShapeModel::index_of_shape_at`] flattening curves with `tolerance`.
    pub fn index_of_shape_at_with_tolerance(
        &self,
        position: Point,
        tolerance: f64,
    ) -> Option<usize> {
        self.shapes
            .iter()
            .position(|shape| shape.contains_with_tolerance(position, tolerance))
    }

    pub fn shape_at(&self, position: Point) -> Option<&Shape> {
        self.index_of_shape_at(position).map(|i| &self.shapes[i])
    }

    fn set_selection(&mut self, new: Option<usize>) {
        let old = self.selected_shape_index;
        if old == new {
            return;
        }

        let kind = ChangeKind::SelectionChanged { old, new };
        self.notify(ModelChange::pre(kind));
        self.selected_shape_index = new;
        debug!("Selection changed from {:?} to {:?}", old, new);
        self.notify(ModelChange::post(kind));
    }

    fn notify(&mut self, change: ModelChange) {
        self.observers.publish(&change);
    }

    fn out_of_range(&self, index: usize) -> CoreError {
        CoreError::index_out_of_range("shapes", index, self.shapes.len())
    }
}
