//! Immutable vector paths made of move, line, cubic and close commands.
//!
//! A [`Path`] is addressed by element index (the position of a command in the
//! sequence) plus a [`PointType`] naming which point of a cubic command is
//! meant. Geometric edits never mutate a path; they build a new one.

use lyon::algorithms::aabb::bounding_box;
use lyon::algorithms::hit_test::hit_test_path;
use lyon::math::point;
use lyon::path::{FillRule, PathEvent};
use serde::{Deserialize, Serialize};
use shapekit_core::{CoreError, Point, Rect, Vector};
use std::fmt;

use crate::error::{DesignerError, DesignerResult};

/// Flattening tolerance used when curves are approximated for containment tests.
pub const DEFAULT_FLATTENING_TOLERANCE: f64 = 0.1;

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Starts a new subpath.
    MoveTo(Point),
    /// Straight segment to the point.
    LineTo(Point),
    /// Cubic Bezier segment ending at `to`.
    ///
    /// `c0` leaves the previous anchor, `c1` arrives at `to`.
    CubicCurveTo { c0: Point, c1: Point, to: Point },
    /// Closes the current subpath.
    ClosePath,
}

impl PathCommand {
    /// The on-path point this command ends at, if any.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicCurveTo { to, .. } => Some(to),
            PathCommand::ClosePath => None,
        }
    }

    /// Command name used in log output, e.g. `"CubicCurveTo"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PathCommand::MoveTo(_) => "MoveTo",
            PathCommand::LineTo(_) => "LineTo",
            PathCommand::CubicCurveTo { .. } => "CubicCurveTo",
            PathCommand::ClosePath => "ClosePath",
        }
    }

    fn map_points<F>(&self, f: &F) -> PathCommand
    where
        F: Fn(Point) -> Point,
    {
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(f(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(f(p)),
            PathCommand::CubicCurveTo { c0, c1, to } => PathCommand::CubicCurveTo {
                c0: f(c0),
                c1: f(c1),
                to: f(to),
            },
            PathCommand::ClosePath => PathCommand::ClosePath,
        }
    }
}

/// Which point of a path element is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointType {
    /// The anchor the element ends at.
    OnPath,
    /// Outgoing handle of the previous anchor (`c0` of a cubic).
    ControlPoint0,
    /// Incoming handle of the element's own anchor (`c1` of a cubic).
    ControlPoint1,
}

/// Ordered traversal of `(element index, command)` pairs.
pub type CommandIter<'a> = std::iter::Enumerate<std::slice::Iter<'a, PathCommand>>;

/// An immutable sequence of path commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn builder() -> PathBuilder {
        PathBuilder::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn command(&self, index: usize) -> Option<&PathCommand> {
        self.commands.get(index)
    }

    /// Traverses the commands in order. The iterator is `Clone`, so a
    /// traversal can be restarted from any point.
    pub fn apply_to_each_command(&self) -> CommandIter<'_> {
        self.commands.iter().enumerate()
    }

    /// Returns a copy of the path with the point at `(element_index, point_type)`
    /// moved by `offset`.
    ///
    /// Moving an anchor carries its handles along: a cubic's own `c1` and the
    /// following cubic's `c0`. Moving a handle mirrors the opposite handle of
    /// the joint: `ControlPoint0` at `i` moves `c1` of element `i + 1` by
    /// `-offset`, and `ControlPoint1` at `i` moves `c0` of element `i - 1` by
    /// `-offset`. `MoveTo`/`LineTo` elements always move their single point.
    pub fn translate_element(
        &self,
        element_index: usize,
        point_type: PointType,
        offset: Vector,
    ) -> DesignerResult<Path> {
        if element_index >= self.commands.len() {
            return Err(DesignerError::ElementOutOfRange {
                index: element_index,
                len: self.commands.len(),
            });
        }

        let is_target = |index: usize| index == element_index;
        let is_previous = |index: usize| index + 1 == element_index;
        let is_next = |index: usize| index == element_index + 1;

        let commands = self
            .apply_to_each_command()
            .map(|(index, command)| match *command {
                PathCommand::MoveTo(mut p) => {
                    if is_target(index) {
                        p += offset;
                    }
                    PathCommand::MoveTo(p)
                }
                PathCommand::LineTo(mut p) => {
                    if is_target(index) {
                        p += offset;
                    }
                    PathCommand::LineTo(p)
                }
                PathCommand::CubicCurveTo {
                    mut c0,
                    mut c1,
                    mut to,
                } => {
                    match point_type {
                        PointType::OnPath => {
                            if is_target(index) {
                                c1 += offset;
                                to += offset;
                            } else if is_next(index) {
                                c0 += offset;
                            }
                        }
                        PointType::ControlPoint0 => {
                            if is_target(index) {
                                c0 += offset;
                            } else if is_next(index) {
                                c1 -= offset;
                            }
                        }
                        PointType::ControlPoint1 => {
                            if is_target(index) {
                                c1 += offset;
                            } else if is_previous(index) {
                                c0 -= offset;
                            }
                        }
                    }
                    PathCommand::CubicCurveTo { c0, c1, to }
                }
                PathCommand::ClosePath => PathCommand::ClosePath,
            })
            .collect();

        Ok(Path::new(commands))
    }

    /// Applies `f` to every point of every command.
    pub fn map_points<F>(&self, f: F) -> Path
    where
        F: Fn(Point) -> Point,
    {
        Path::new(self.commands.iter().map(|c| c.map_points(&f)).collect())
    }

    pub fn translated(&self, offset: Vector) -> Path {
        self.map_points(|p| p + offset)
    }

    /// Converts to a `lyon` path for geometric queries and rendering.
    ///
    /// Segments that appear before any `MoveTo` (or right after a `ClosePath`)
    /// start an implicit subpath at the current point.
    pub fn to_lyon(&self) -> lyon::path::Path {
        let mut builder = lyon::path::Path::builder();
        let mut open = false;
        let mut start = Point::ZERO;
        let mut current = Point::ZERO;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(to_lyon_point(p));
                    open = true;
                    start = p;
                    current = p;
                }
                PathCommand::LineTo(p) => {
                    if !open {
                        builder.begin(to_lyon_point(current));
                        open = true;
                        start = current;
                    }
                    builder.line_to(to_lyon_point(p));
                    current = p;
                }
                PathCommand::CubicCurveTo { c0, c1, to } => {
                    if !open {
                        builder.begin(to_lyon_point(current));
                        open = true;
                        start = current;
                    }
                    builder.cubic_bezier_to(
                        to_lyon_point(c0),
                        to_lyon_point(c1),
                        to_lyon_point(to),
                    );
                    current = to;
                }
                PathCommand::ClosePath => {
                    if open {
                        builder.close();
                        open = false;
                    }
                    current = start;
                }
            }
        }

        if open {
            builder.end(false);
        }

        builder.build()
    }

    /// Non-zero winding containment test, flattening curves with `tolerance`.
    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        if self.commands.is_empty() {
            return false;
        }
        let lyon_path = self.to_lyon();
        hit_test_path(
            &to_lyon_point(p),
            lyon_path.iter(),
            FillRule::NonZero,
            tolerance as f32,
        )
    }

    /// Tight axis-aligned bounds of the path geometry (handles excluded).
    pub fn bounding_box(&self) -> Rect {
        if self.commands.iter().all(|c| c.end_point().is_none()) {
            return Rect::default();
        }
        let lyon_path = self.to_lyon();
        let bb = bounding_box(lyon_path.iter());
        Rect::from_min_max(
            Point::new(bb.min.x as f64, bb.min.y as f64),
            Point::new(bb.max.x as f64, bb.max.y as f64),
        )
    }
}

impl TryFrom<&lyon::path::Path> for Path {
    type Error = DesignerError;

    /// Imports a `lyon` path. Quadratic segments are rejected.
    fn try_from(path: &lyon::path::Path) -> DesignerResult<Self> {
        let mut builder = Path::builder();
        for event in path.iter() {
            match event {
                PathEvent::Begin { at } => builder = builder.move_to(from_lyon_point(at)),
                PathEvent::Line { to, .. } => builder = builder.line_to(from_lyon_point(to)),
                PathEvent::Cubic {
                    ctrl1, ctrl2, to, ..
                } => {
                    builder = builder.cubic_curve_to(
                        from_lyon_point(ctrl1),
                        from_lyon_point(ctrl2),
                        from_lyon_point(to),
                    )
                }
                PathEvent::Quadratic { .. } => {
                    return Err(CoreError::UnsupportedCommand {
                        command: "QuadraticCurveTo".to_string(),
                    }
                    .into());
                }
                PathEvent::End { close, .. } => {
                    if close {
                        builder = builder.close();
                    }
                }
            }
        }
        Ok(builder.build())
    }
}

impl fmt::Display for Path {
    /// Formats the path as SVG path data.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for command in &self.commands {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            match command {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y)?,
                PathCommand::CubicCurveTo { c0, c1, to } => write!(
                    f,
                    "C {} {} {} {} {} {}",
                    c0.x, c0.y, c1.x, c1.y, to.x, to.y
                )?,
                PathCommand::ClosePath => write!(f, "Z")?,
            }
        }
        Ok(())
    }
}

/// Fluent builder for [`Path`].
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    pub fn move_to(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn cubic_curve_to(mut self, c0: Point, c1: Point, to: Point) -> Self {
        self.commands.push(PathCommand::CubicCurveTo { c0, c1, to });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::ClosePath);
        self
    }

    pub fn build(self) -> Path {
        Path::new(self.commands)
    }
}

fn to_lyon_point(p: Point) -> lyon::math::Point {
    point(p.x as f32, p.y as f32)
}

fn from_lyon_point(p: lyon::math::Point) -> Point {
    Point::new(p.x as f64, p.y as f64)
}
