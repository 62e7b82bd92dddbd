use shapekit_core::Point;
use shapekit_designer::{HitResult, PointType, Shape, DEFAULT_FLATTENING_TOLERANCE};

const RECT_CORNERS: [(usize, f64, f64); 4] = [
    (0, -60.0, -45.0),
    (1, 60.0, -45.0),
    (2, 60.0, 45.0),
    (3, -60.0, 45.0),
];

#[test]
fn test_rectangle_corners_hit_as_anchors() {
    let shape = Shape::rectangle();
    for (index, x, y) in RECT_CORNERS {
        for max_distance in [0.0, 1.0, 12.0] {
            assert_eq!(
                shape.hit_test(Point::new(x, y), None, max_distance),
                HitResult::Point {
                    element_index: index,
                    point_type: PointType::OnPath
                },
                "corner {} at tolerance {}",
                index,
                max_distance
            );
        }
    }
}

#[test]
fn test_far_point_is_outside() {
    let shape = Shape::rectangle();
    assert_eq!(
        shape.hit_test(Point::new(1200.0, 900.0), None, 12.0),
        HitResult::Outside
    );
    assert_eq!(
        shape.hit_test(Point::new(-1200.0, 0.0), Some(1), 12.0),
        HitResult::Outside
    );
}

#[test]
fn test_interior_point_is_inside() {
    let shape = Shape::rectangle();
    assert_eq!(shape.hit_test(Point::ZERO, None, 12.0), HitResult::Inside);
}

#[test]
fn test_tolerance_boundary_is_inclusive() {
    let shape = Shape::rectangle();
    let hit = shape.hit_test(Point::new(-60.0, -57.0), None, 12.0);
    assert_eq!(
        hit,
        HitResult::Point {
            element_index: 0,
            point_type: PointType::OnPath
        }
    );
}

#[test]
fn test_hit_test_follows_origin() {
    let mut shape = Shape::rectangle();
    shape.origin = Point::new(100.0, 0.0);
    assert_eq!(
        shape.hit_test(Point::new(40.0, -45.0), None, 1.0),
        HitResult::Point {
            element_index: 0,
            point_type: PointType::OnPath
        }
    );
    assert_eq!(shape.hit_test(Point::ZERO, None, 1.0), HitResult::Outside);
}

#[test]
fn test_fine_flattening_catches_points_near_curve() {
    // Just inside the true ellipse, outside its coarse polygonal approximation.
    let shape = Shape::ellipse();
    let p = Point::new(38.9, 42.4);

    assert_eq!(
        shape.hit_test_with_tolerance(p, None, 0.0, DEFAULT_FLATTENING_TOLERANCE),
        HitResult::Outside
    );
    assert_eq!(
        shape.hit_test_with_tolerance(p, None, 0.0, 0.01),
        HitResult::Inside
    );
    assert_eq!(shape.hit_test(p, None, 0.0), HitResult::Outside);
}
