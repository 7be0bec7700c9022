use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use pie_labels_rs::core::{LeaderLine, LineSide, Point, SliceGeometry, calculate_position};

fn geometry(center: Point, mid_angle: f64, outer_radius: f64) -> SliceGeometry {
    SliceGeometry::new(center, 0.0, mid_angle, 0.0, 0.0, outer_radius, 12.0)
}

#[test]
fn calculate_position_projects_along_angle() {
    let origin = Point::new(10.0, 20.0);
    let right = calculate_position(0.0, origin, 5.0);
    assert_relative_eq!(right.x, 15.0);
    assert_relative_eq!(right.y, 20.0);

    let down = calculate_position(PI / 2.0, origin, 5.0);
    assert_relative_eq!(down.x, 10.0, epsilon = 1e-12);
    assert_relative_eq!(down.y, 25.0);
}

#[test]
fn leader_line_at_angle_zero_extends_right_of_center() {
    let line = LeaderLine::compute(&geometry(Point::new(100.0, 100.0), 0.0, 50.0), 5.0, 15.0, 15.0);

    assert_eq!(line.side, LineSide::Right);
    assert_relative_eq!(line.p1.x, 155.0);
    assert_relative_eq!(line.p1.y, 100.0);
    assert_relative_eq!(line.p2.x, 165.0);
    assert_relative_eq!(line.p2.y, 100.0);
    assert_relative_eq!(line.p3.x, 180.0);
    assert_relative_eq!(line.p3.y, 100.0);
}

#[test]
fn leader_line_at_angle_pi_bends_left() {
    let line = LeaderLine::compute(&geometry(Point::new(100.0, 100.0), PI, 50.0), 5.0, 15.0, 15.0);

    assert_eq!(line.side, LineSide::Left);
    assert!(line.p3.x < line.p2.x);
    assert_relative_eq!(line.p1.x, 45.0, epsilon = 1e-9);
    assert_relative_eq!(line.p2.x, 35.0, epsilon = 1e-9);
    assert_relative_eq!(line.p3.x, 20.0, epsilon = 1e-9);
    assert_relative_eq!(line.p3.y, line.p2.y);
}

#[test]
fn leader_line_normalizes_wrapped_angles() {
    let base = LeaderLine::compute(&geometry(Point::new(0.0, 0.0), 0.3, 40.0), 5.0, 15.0, 15.0);
    let wrapped = LeaderLine::compute(
        &geometry(Point::new(0.0, 0.0), 0.3 + TAU, 40.0),
        5.0,
        15.0,
        15.0,
    );

    assert_eq!(base.side, wrapped.side);
    assert_relative_eq!(base.p3.x, wrapped.p3.x, epsilon = 1e-9);
    assert_relative_eq!(base.p3.y, wrapped.p3.y, epsilon = 1e-9);
}

#[test]
fn second_segment_is_horizontal_on_both_sides() {
    for angle in [0.4, 2.0, 4.0, 5.9] {
        let line = LeaderLine::compute(&geometry(Point::new(0.0, 0.0), angle, 60.0), 4.0, 12.0, 18.0);
        assert_relative_eq!(line.p2.y, line.p3.y);
        assert_relative_eq!((line.p3.x - line.p2.x).abs(), 18.0, epsilon = 1e-9);
        let expected_sign = line.side.direction();
        assert_relative_eq!(line.p3.x - line.p2.x, expected_sign * 18.0, epsilon = 1e-9);
    }
}
