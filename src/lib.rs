//! # ShapeKit
//!
//! Direct-manipulation editing of vector shapes built from line and cubic
//! Bézier segments:
//! - Hit testing of anchors, control handles and shape interiors
//! - Dragging anchors and handles while keeping joined curves consistent
//! - Whole-shape translation with cancel support
//! - A shape model announcing every change to its observers
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Geometry primitives, observer list, core errors
//! 2. **shapekit-designer** - Paths, shapes, templates, model, canvas, gestures
//! 3. **shapekit-settings** - Canvas, interaction and icon configuration
//! 4. **shapekit** - Binary replaying a scripted editing session

pub mod session;

pub use shapekit_core::{CoreError, ObserverList, Point, Rect, Size, SubscriptionId, Vector};
pub use shapekit_designer as designer;
pub use shapekit_designer::{
    Canvas, ChangeKind, ChangePhase, DesignerError, HitResult, Highlight, InteractionController,
    Mode, ModelChange, Path, PathCommand, PointType, PointerEvent, PointerId, Shape, ShapeModel,
    ShapeTemplate,
};
pub use shapekit_settings::{Config, SettingsError};

pub use session::{build_canvas, DragScript, SessionReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
