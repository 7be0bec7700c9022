use serde::{Deserialize, Serialize};

/// Point in surface pixel space (y grows downward, as in typical view systems).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// Axis-aligned box with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[must_use]
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }

    #[must_use]
    pub fn min_x(self) -> f64 {
        self.origin.x
    }

    #[must_use]
    pub fn max_x(self) -> f64 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub fn min_y(self) -> f64 {
        self.origin.y
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.origin.y + self.size.height
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    #[must_use]
    pub fn with_center(self, center: Point) -> Self {
        Self::from_center(center, self.size)
    }

    /// Overlap test with open edges: boxes that merely touch do not intersect,
    /// and degenerate (zero-area) boxes never intersect anything.
    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }
}

/// Opaque identity key for one slice, stable for the chart's lifetime.
///
/// The placement store is keyed by this value alone; the slice's data and
/// geometry never participate in identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SliceId(u32);

impl SliceId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Data payload carried by one slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceData {
    pub title: String,
    pub value: f64,
}

impl SliceData {
    #[must_use]
    pub fn new(title: impl Into<String>, value: f64) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }
}

/// Geometry descriptor computed by the host chart for one slice.
///
/// Angles are radians; radii and offsets are surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceGeometry {
    pub center: Point,
    pub start_angle: f64,
    pub mid_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub selected_offset: f64,
}

impl SliceGeometry {
    #[must_use]
    pub const fn new(
        center: Point,
        start_angle: f64,
        mid_angle: f64,
        end_angle: f64,
        inner_radius: f64,
        outer_radius: f64,
        selected_offset: f64,
    ) -> Self {
        Self {
            center,
            start_angle,
            mid_angle,
            end_angle,
            inner_radius,
            outer_radius,
            selected_offset,
        }
    }
}

/// One wedge of the chart: identity, payload, and host-computed geometry.
///
/// Read-only input to the placement engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub id: SliceId,
    pub data: SliceData,
    pub geometry: SliceGeometry,
}

impl PieSlice {
    #[must_use]
    pub fn new(id: SliceId, data: SliceData, geometry: SliceGeometry) -> Self {
        Self { id, data, geometry }
    }
}
