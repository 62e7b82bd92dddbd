use proptest::prelude::*;
use shapekit_core::{Point, Vector};
use shapekit_designer::{DesignerError, Path, PathCommand, PointType};

fn point() -> impl Strategy<Value = Point> {
    (-500.0f64..500.0, -500.0f64..500.0).prop_map(|(x, y)| Point::new(x, y))
}

fn command() -> impl Strategy<Value = PathCommand> {
    prop_oneof![
        point().prop_map(PathCommand::MoveTo),
        point().prop_map(PathCommand::LineTo),
        (point(), point(), point()).prop_map(|(c0, c1, to)| PathCommand::CubicCurveTo { c0, c1, to }),
        Just(PathCommand::ClosePath),
    ]
}

fn point_type() -> impl Strategy<Value = PointType> {
    prop_oneof![
        Just(PointType::OnPath),
        Just(PointType::ControlPoint0),
        Just(PointType::ControlPoint1),
    ]
}

fn two_cubics() -> Path {
    Path::builder()
        .move_to(Point::new(0.0, 0.0))
        .cubic_curve_to(
            Point::new(10.0, -10.0),
            Point::new(20.0, -10.0),
            Point::new(30.0, 0.0),
        )
        .cubic_curve_to(
            Point::new(40.0, 10.0),
            Point::new(50.0, 10.0),
            Point::new(60.0, 0.0),
        )
        .close()
        .build()
}

fn cubic_at(path: &Path, index: usize) -> (Point, Point, Point) {
    match path.command(index) {
        Some(PathCommand::CubicCurveTo { c0, c1, to }) => (*c0, *c1, *to),
        other => panic!("expected cubic at {}, got {:?}", index, other),
    }
}

proptest! {
    #[test]
    fn zero_offset_is_identity(
        commands in prop::collection::vec(command(), 1..12),
        index_seed in any::<prop::sample::Index>(),
        point_type in point_type(),
    ) {
        let path = Path::new(commands);
        let index = index_seed.index(path.len());
        let moved = path.translate_element(index, point_type, Vector::ZERO).unwrap();
        prop_assert_eq!(moved, path);
    }

    #[test]
    fn line_to_round_trip(
        commands in prop::collection::vec(command(), 0..8),
        target in point(),
        dx in -100i32..100,
        dy in -100i32..100,
    ) {
        let mut commands = commands;
        let index = commands.len();
        commands.push(PathCommand::LineTo(target));
        let path = Path::new(commands);

        // Integral offsets keep the round trip exact.
        let v = Vector::new(dx as f64, dy as f64);
        let there = path.translate_element(index, PointType::OnPath, v).unwrap();
        let back = there.translate_element(index, PointType::OnPath, -v).unwrap();
        for (a, b) in back.commands().iter().zip(path.commands()) {
            match (a, b) {
                (PathCommand::LineTo(p), PathCommand::LineTo(q)) => {
                    prop_assert!(p.distance_to(q) < 1e-9);
                }
                _ => prop_assert_eq!(a, b),
            }
        }
    }
}

#[test]
fn test_anchor_drags_next_outgoing_handle() {
    let path = two_cubics();
    let v = Vector::new(3.0, 4.0);
    let moved = path.translate_element(1, PointType::OnPath, v).unwrap();

    let (c0, c1, to) = cubic_at(&moved, 1);
    assert_eq!(c0, Point::new(10.0, -10.0));
    assert_eq!(c1, Point::new(23.0, -6.0));
    assert_eq!(to, Point::new(33.0, 4.0));

    let (next_c0, next_c1, next_to) = cubic_at(&moved, 2);
    assert_eq!(next_c0, Point::new(43.0, 14.0));
    assert_eq!(next_c1, Point::new(50.0, 10.0));
    assert_eq!(next_to, Point::new(60.0, 0.0));
}

#[test]
fn test_control_point1_leaves_next_handle_alone() {
    let path = two_cubics();
    let v = Vector::new(5.0, 0.0);
    let moved = path
        .translate_element(1, PointType::ControlPoint1, v)
        .unwrap();

    assert_eq!(cubic_at(&moved, 1).1, Point::new(25.0, -10.0));
    assert_eq!(cubic_at(&moved, 2).0, Point::new(40.0, 10.0));
}

#[test]
fn test_control_point1_mirrors_previous_outgoing_handle() {
    let path = two_cubics();
    let v = Vector::new(1.0, 2.0);
    let moved = path
        .translate_element(2, PointType::ControlPoint1, v)
        .unwrap();

    assert_eq!(cubic_at(&moved, 1).0, Point::new(9.0, -12.0));
    assert_eq!(cubic_at(&moved, 2).1, Point::new(51.0, 12.0));
    assert_eq!(cubic_at(&moved, 1).2, Point::new(30.0, 0.0));
    assert_eq!(cubic_at(&moved, 2).0, Point::new(40.0, 10.0));
    assert_eq!(
        moved.to_string(),
        "M 0 0 C 9 -12 20 -10 30 0 C 40 10 51 12 60 0 Z"
    );
}

#[test]
fn test_control_point0_mirrors_next_incoming_handle() {
    let path = two_cubics();
    let v = Vector::new(1.0, 2.0);
    let moved = path
        .translate_element(1, PointType::ControlPoint0, v)
        .unwrap();

    assert_eq!(cubic_at(&moved, 1).0, Point::new(11.0, -8.0));
    assert_eq!(cubic_at(&moved, 2).1, Point::new(49.0, 8.0));
    assert_eq!(moved.command(0), path.command(0));
}

#[test]
fn test_move_to_anchor_drags_first_handle() {
    let path = two_cubics();
    let moved = path
        .translate_element(0, PointType::OnPath, Vector::new(-2.0, 0.0))
        .unwrap();

    assert_eq!(moved.command(0), Some(&PathCommand::MoveTo(Point::new(-2.0, 0.0))));
    assert_eq!(cubic_at(&moved, 1).0, Point::new(8.0, -10.0));
}

#[test]
fn test_out_of_range_element() {
    let path = two_cubics();
    assert_eq!(
        path.translate_element(4, PointType::OnPath, Vector::new(1.0, 1.0)),
        Err(DesignerError::ElementOutOfRange { index: 4, len: 4 })
    );
}

#[test]
fn test_lyon_conversion_keeps_commands() {
    let path = two_cubics();
    let lyon_path = path.to_lyon();
    let back = Path::try_from(&lyon_path).unwrap();
    assert_eq!(back.commands().len(), path.commands().len());
    assert_eq!(back.command(2), path.command(2));
}

#[test]
fn test_quadratic_is_rejected() {
    let mut builder = lyon::path::Path::builder();
    builder.begin(lyon::math::point(0.0, 0.0));
    builder.quadratic_bezier_to(lyon::math::point(5.0, 5.0), lyon::math::point(10.0, 0.0));
    builder.end(false);
    let lyon_path = builder.build();

    let err = Path::try_from(&lyon_path).unwrap_err();
    assert!(err.to_string().contains("Quadratic"), "{}", err);
}

#[test]
fn test_svg_display() {
    let path = Path::builder()
        .move_to(Point::new(0.0, 0.0))
        .line_to(Point::new(10.0, 0.0))
        .close()
        .build();
    assert_eq!(path.to_string(), "M 0 0 L 10 0 Z");
}
