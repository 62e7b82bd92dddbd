//! Built-in shape templates.
//!
//! Every template is centered on its local origin and placed at canvas
//! origin `(0, 0)`.

use rand::Rng;
use shapekit_core::{Point, Rect};

use crate::path::Path;
use crate::shape::Shape;

/// Length of a cubic handle approximating a quarter circle of radius 1.
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// The available template shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeTemplate {
    Rectangle,
    Ellipse,
    RoundedRect,
}

impl ShapeTemplate {
    pub const ALL: [ShapeTemplate; 3] = [
        ShapeTemplate::Rectangle,
        ShapeTemplate::Ellipse,
        ShapeTemplate::RoundedRect,
    ];

    pub fn build(self) -> Shape {
        match self {
            ShapeTemplate::Rectangle => Shape::rectangle(),
            ShapeTemplate::Ellipse => Shape::ellipse(),
            ShapeTemplate::RoundedRect => Shape::rounded_rect(),
        }
    }

    /// Picks one of the templates uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> ShapeTemplate {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl Shape {
    /// 120 x 90 rectangle: `MoveTo` at the top-left corner `(-60, -45)`,
    /// three `LineTo` corners, `ClosePath`.
    pub fn rectangle() -> Shape {
        Shape::new(
            "Rectangle",
            Point::ZERO,
            rect_path(Rect::new(-60.0, -45.0, 120.0, 90.0)),
        )
    }

    /// 110 x 120 ellipse built from four cubic quarter arcs.
    pub fn ellipse() -> Shape {
        Shape::new(
            "Ellipse",
            Point::ZERO,
            ellipse_path(Rect::new(-55.0, -60.0, 110.0, 120.0)),
        )
    }

    /// 90 x 80 rectangle with 15 unit cubic corners.
    pub fn rounded_rect() -> Shape {
        Shape::new(
            "Rounded Rectangle",
            Point::ZERO,
            rounded_rect_path(Rect::new(-45.0, -40.0, 90.0, 80.0), 15.0),
        )
    }

    pub fn random_template<R: Rng + ?Sized>(rng: &mut R) -> Shape {
        ShapeTemplate::random(rng).build()
    }
}

pub fn rect_path(r: Rect) -> Path {
    Path::builder()
        .move_to(Point::new(r.min_x(), r.min_y()))
        .line_to(Point::new(r.max_x(), r.min_y()))
        .line_to(Point::new(r.max_x(), r.max_y()))
        .line_to(Point::new(r.min_x(), r.max_y()))
        .close()
        .build()
}

pub fn ellipse_path(r: Rect) -> Path {
    let (cx, cy) = (r.mid_x(), r.mid_y());
    let (rx, ry) = (r.width() / 2.0, r.height() / 2.0);
    let (kx, ky) = (rx * KAPPA, ry * KAPPA);

    Path::builder()
        .move_to(Point::new(cx + rx, cy))
        .cubic_curve_to(
            Point::new(cx + rx, cy + ky),
            Point::new(cx + kx, cy + ry),
            Point::new(cx, cy + ry),
        )
        .cubic_curve_to(
            Point::new(cx - kx, cy + ry),
            Point::new(cx - rx, cy + ky),
            Point::new(cx - rx, cy),
        )
        .cubic_curve_to(
            Point::new(cx - rx, cy - ky),
            Point::new(cx - kx, cy - ry),
            Point::new(cx, cy - ry),
        )
        .cubic_curve_to(
            Point::new(cx + kx, cy - ry),
            Point::new(cx + rx, cy - ky),
            Point::new(cx + rx, cy),
        )
        .close()
        .build()
}

pub fn rounded_rect_path(r: Rect, radius: f64) -> Path {
    let radius = radius.min(r.width() / 2.0).min(r.height() / 2.0);
    let k = radius * KAPPA;
    let (x0, y0, x1, y1) = (r.min_x(), r.min_y(), r.max_x(), r.max_y());

    Path::builder()
        .move_to(Point::new(x0 + radius, y0))
        .line_to(Point::new(x1 - radius, y0))
        .cubic_curve_to(
            Point::new(x1 - radius + k, y0),
            Point::new(x1, y0 + radius - k),
            Point::new(x1, y0 + radius),
        )
        .line_to(Point::new(x1, y1 - radius))
        .cubic_curve_to(
            Point::new(x1, y1 - radius + k),
            Point::new(x1 - radius + k, y1),
            Point::new(x1 - radius, y1),
        )
        .line_to(Point::new(x0 + radius, y1))
        .cubic_curve_to(
            Point::new(x0 + radius - k, y1),
            Point::new(x0, y1 - radius + k),
            Point::new(x0, y1 - radius),
        )
        .line_to(Point::new(x0, y0 + radius))
        .cubic_curve_to(
            Point::new(x0, y0 + radius - k),
            Point::new(x0 + radius - k, y0),
            Point::new(x0 + radius, y0),
        )
        .close()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rectangle_layout() {
        let shape = Shape::rectangle();
        assert_eq!(shape.name, "Rectangle");
        assert_eq!(shape.path.len(), 5);
        assert_eq!(
            shape.path.command(0),
            Some(&PathCommand::MoveTo(Point::new(-60.0, -45.0)))
        );
        assert_eq!(shape.path.command(4), Some(&PathCommand::ClosePath));
        assert_eq!(shape.bounding_box(), Rect::new(-60.0, -45.0, 120.0, 90.0));
    }

    #[test]
    fn test_ellipse_layout() {
        let shape = Shape::ellipse();
        let cubic_count = shape
            .path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::CubicCurveTo { .. }))
            .count();
        assert_eq!(shape.path.len(), 6);
        assert_eq!(cubic_count, 4);

        let bounds = shape.bounding_box();
        assert!((bounds.min_x() + 55.0).abs() < 1e-3);
        assert!((bounds.max_y() - 60.0).abs() < 1e-3);
        assert!(shape.contains(Point::ZERO));
        assert!(!shape.contains(Point::new(50.0, 55.0)));
    }

    #[test]
    fn test_rounded_rect_layout() {
        let shape = Shape::rounded_rect();
        assert_eq!(shape.path.len(), 10);
        let bounds = shape.bounding_box();
        assert!((bounds.width() - 90.0).abs() < 1e-3);
        assert!((bounds.height() - 80.0).abs() < 1e-3);
        // The corner itself is cut off by the rounding.
        assert!(!shape.contains(Point::new(-44.5, -39.5)));
        assert!(shape.contains(Point::new(-40.0, 0.0)));
    }

    #[test]
    fn test_random_template_is_one_of_all() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let template = ShapeTemplate::random(&mut rng);
            assert!(ShapeTemplate::ALL.contains(&template));
        }
        let names: Vec<String> = ShapeTemplate::ALL
            .iter()
            .map(|t| t.build().name)
            .collect();
        let shape = Shape::random_template(&mut rng);
        assert!(names.contains(&shape.name));
    }
}
