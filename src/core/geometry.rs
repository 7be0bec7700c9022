//! Leader-line geometry: pure functions from slice angle/radius data to the
//! three ordered points of the bent connector.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::core::{Point, SliceGeometry};

/// Projects `point` by `offset` pixels along `angle`.
///
/// Matches the position helper host charts expose for slice geometry, so the
/// engine and the host agree on what "along the mid-angle" means.
#[must_use]
pub fn calculate_position(angle: f64, point: Point, offset: f64) -> Point {
    Point::new(
        point.x + angle.cos() * offset,
        point.y + angle.sin() * offset,
    )
}

/// Horizontal direction label text expands from, decided by the slice mid-angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSide {
    Left,
    Right,
}

impl LineSide {
    /// Right iff the mid-angle, normalized into `[0, 2π)`, falls in the right
    /// half of the circle: `[0, π/2]` or `(3π/2, 2π)`.
    #[must_use]
    pub fn from_angle(mid_angle: f64) -> Self {
        let angle = mid_angle.rem_euclid(TAU);
        if angle <= FRAC_PI_2 || angle > PI * 1.5 {
            Self::Right
        } else {
            Self::Left
        }
    }

    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::Right)
    }

    /// +1 for right, -1 for left.
    #[must_use]
    pub const fn direction(self) -> f64 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }
}

/// The three ordered points of one bent leader line.
///
/// `p1` sits at the slice edge, `p2` at the first bend, `p3` at the end of the
/// horizontal tail the labels anchor to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaderLine {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
    pub side: LineSide,
}

impl LeaderLine {
    /// Computes the connector for one slice:
    /// `p1` at `outer_radius + chart_offset` along the mid-angle,
    /// `p2` at `outer_radius + segment1_length` along the same angle,
    /// `p3` = `p2` shifted horizontally by `segment2_length` toward the side.
    #[must_use]
    pub fn compute(
        geometry: &SliceGeometry,
        chart_offset: f64,
        segment1_length: f64,
        segment2_length: f64,
    ) -> Self {
        let p1 = calculate_position(
            geometry.mid_angle,
            geometry.center,
            geometry.outer_radius + chart_offset,
        );
        let p2 = calculate_position(
            geometry.mid_angle,
            geometry.center,
            geometry.outer_radius + segment1_length,
        );
        let side = LineSide::from_angle(geometry.mid_angle);
        let p3 = Point::new(p2.x + side.direction() * segment2_length, p2.y);

        Self { p1, p2, p3, side }
    }
}
