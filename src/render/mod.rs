mod primitives;
mod surface;
mod text;

pub use primitives::{Color, ElementId, LabelFont, LabelPrimitive, LineShape, MarkerDot};
pub use surface::{ChartSurface, RecordingSurface, SurfaceElement};
pub use text::{CharAdvanceMeasurer, TextMeasurer};
