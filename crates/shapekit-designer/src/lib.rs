//! # ShapeKit Designer
//!
//! Hit testing and direct-manipulation editing of vector shapes built from
//! move, line, cubic Bézier and close commands.
//!
//! ## Core Components
//!
//! - **Path**: ordered path commands, element editing keyed by
//!   `(element index, point type)`, fill containment and bounds via `lyon`
//! - **Shape**: a named path placed at an origin, with point/inside/outside
//!   hit testing and icon fitting
//! - **Templates**: rectangle, ellipse and rounded rectangle starters
//! - **ShapeModel**: ordered shapes with a single selection, announcing every
//!   mutation with `Pre`/`Post` notifications
//! - **Canvas**: owns the model, the highlighted element and the running
//!   gesture
//! - **InteractionController**: one pointer gesture, translating a shape or
//!   dragging one of its anchors or handles
//!
//! ## Architecture
//!
//! ```text
//! Canvas (pointer entry points, highlight)
//!   ├── InteractionController (Idle / Translating / EditingPoint)
//!   └── ShapeModel (shapes, selection, observers)
//!         └── Shape (name, origin)
//!               └── Path (commands)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_core::{Point, Size};
//! use shapekit_designer::{Canvas, PointerEvent, PointerId, Shape, ShapeModel};
//!
//! let model = ShapeModel::with_shapes(vec![Shape::rectangle()]);
//! let mut canvas = Canvas::new(model, Size::new(400.0, 300.0));
//!
//! let down = PointerEvent::new(PointerId(1), canvas.center());
//! assert!(canvas.pointer_began(&down));
//!
//! let moved = PointerEvent::new(PointerId(1), Point::new(210.0, 160.0));
//! assert!(canvas.pointer_moved(&moved));
//! assert!(canvas.pointer_ended(&moved));
//!
//! assert_eq!(canvas.model().shapes()[0].origin, Point::new(10.0, 10.0));
//! ```

pub mod canvas;
pub mod error;
pub mod interaction;
pub mod path;
pub mod shape;
pub mod shape_model;
pub mod templates;

pub use canvas::{Canvas, Highlight, PointerEvent, PointerId, DEFAULT_HIT_TOLERANCE};
pub use error::{DesignerError, DesignerResult};
pub use interaction::{InteractionController, InteractionHost, Mode};
pub use path::{Path, PathBuilder, PathCommand, PointType, DEFAULT_FLATTENING_TOLERANCE};
pub use shape::{HitResult, IconLayout, Shape};
pub use shape_model::{ChangeKind, ChangePhase, ModelChange, ShapeModel};
pub use templates::ShapeTemplate;
