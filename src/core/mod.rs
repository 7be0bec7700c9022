mod geometry;
mod types;

pub use geometry::{LeaderLine, LineSide, calculate_position};
pub use types::{PieSlice, Point, Rect, Size, SliceData, SliceGeometry, SliceId};
