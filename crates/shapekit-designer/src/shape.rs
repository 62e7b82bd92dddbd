//! Named, positioned paths and the hit testing performed on them.

use serde::{Deserialize, Serialize};
use shapekit_core::{Point, Rect, Size, Vector};

use crate::error::{DesignerError, DesignerResult};
use crate::path::{Path, PathCommand, PointType, DEFAULT_FLATTENING_TOLERANCE};

/// A shape on the canvas.
///
/// `path` is expressed in shape-local space; `origin` translates it into
/// canvas space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub name: String,
    pub origin: Point,
    pub path: Path,
}

/// Outcome of [`Shape::hit_test`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResult {
    /// An anchor or control handle was hit.
    Point {
        element_index: usize,
        point_type: PointType,
    },
    /// No point was hit, but the position lies inside the filled path.
    Inside,
    Outside,
}

/// Placement of a shape's path inside a square icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconLayout {
    /// Uniform scale applied after the translation.
    pub scale: f64,
    /// Translation moving the bounding box's minimum corner to the icon origin.
    pub offset: Vector,
}

impl IconLayout {
    pub fn apply(&self, p: Point) -> Point {
        (p + self.offset) * self.scale
    }
}

impl Shape {
    pub fn new(name: impl Into<String>, origin: Point, path: Path) -> Self {
        Self {
            name: name.into(),
            origin,
            path,
        }
    }

    /// Finds what part of the shape lies under `point` (canvas space).
    ///
    /// Anchors are tested in command order and the first one within
    /// `max_distance` wins. Control handles are only considered for the cubic
    /// elements adjacent to `active_element_index`: `c1` of the active element
    /// itself and `c0` of the element following it. When no point matches the
    /// result falls back to a non-zero winding containment test.
    pub fn hit_test(
        &self,
        point: Point,
        active_element_index: Option<usize>,
        max_distance: f64,
    ) -> HitResult {
        self.hit_test_with_tolerance(
            point,
            active_element_index,
            max_distance,
            DEFAULT_FLATTENING_TOLERANCE,
        )
    }

    /// [`Shape::hit_test`] with an explicit curve flattening tolerance for the
    /// containment fallback.
    pub fn hit_test_with_tolerance(
        &self,
        point: Point,
        active_element_index: Option<usize>,
        max_distance: f64,
        flattening_tolerance: f64,
    ) -> HitResult {
        let local = self.to_local(point);
        let max_squared_distance = max_distance * max_distance;
        let is_hit = |candidate: Point| candidate.squared_distance_to(&local) <= max_squared_distance;

        for (index, command) in self.path.apply_to_each_command() {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    if is_hit(p) {
                        return HitResult::Point {
                            element_index: index,
                            point_type: PointType::OnPath,
                        };
                    }
                }
                PathCommand::CubicCurveTo { c0, c1, to } => {
                    if active_element_index == Some(index) {
                        if is_hit(c1) {
                            return HitResult::Point {
                                element_index: index,
                                point_type: PointType::ControlPoint1,
                            };
                        }
                    } else if index > 0 && active_element_index == Some(index - 1) && is_hit(c0) {
                        return HitResult::Point {
                            element_index: index,
                            point_type: PointType::ControlPoint0,
                        };
                    }

                    if is_hit(to) {
                        return HitResult::Point {
                            element_index: index,
                            point_type: PointType::OnPath,
                        };
                    }
                }
                PathCommand::ClosePath => {}
            }
        }

        if self.path.contains(local, flattening_tolerance) {
            HitResult::Inside
        } else {
            HitResult::Outside
        }
    }

    /// Winding containment of a canvas-space point, ignoring handles.
    pub fn contains(&self, point: Point) -> bool {
        self.contains_with_tolerance(point, DEFAULT_FLATTENING_TOLERANCE)
    }

    pub fn contains_with_tolerance(&self, point: Point, tolerance: f64) -> bool {
        self.path.contains(self.to_local(point), tolerance)
    }

    /// Bounds of the path in shape-local space.
    pub fn bounding_box(&self) -> Rect {
        self.path.bounding_box()
    }

    /// Converts a canvas-space point into shape-local space.
    pub fn to_local(&self, point: Point) -> Point {
        point - self.origin.to_vector()
    }

    /// Computes how the path is fitted into a square icon of `size`, leaving
    /// `padding` units of room for the stroke.
    ///
    /// A degenerate axis (a purely horizontal or vertical path) is ignored
    /// when choosing the scale.
    pub fn icon_layout(&self, size: Size, padding: f64) -> DesignerResult<IconLayout> {
        let bounds = self.bounding_box();
        let sx = if bounds.width() > 0.0 {
            Some((size.width - padding) / bounds.width())
        } else {
            None
        };
        let sy = if bounds.height() > 0.0 {
            Some((size.height - padding) / bounds.height())
        } else {
            None
        };

        let scale = match (sx, sy) {
            (Some(x), Some(y)) => x.min(y),
            (Some(s), None) | (None, Some(s)) => s,
            (None, None) => return Err(DesignerError::EmptyPath),
        };

        Ok(IconLayout {
            scale,
            offset: Point::ZERO - bounds.origin,
        })
    }

    /// The path mapped into icon space, ready to be stroked.
    pub fn icon_path(&self, size: Size, padding: f64) -> DesignerResult<Path> {
        let layout = self.icon_layout(size, padding)?;
        Ok(self.path.map_points(|p| layout.apply(p)))
    }
}
