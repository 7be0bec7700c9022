use crate::core::{LeaderLine, PieSlice, Point, Rect};
use crate::render::{LabelPrimitive, TextMeasurer};

use super::{LabelRole, LabelSettings};

/// Builds the measured, positioned label for one slice and role, anchored at
/// the leader line's end point.
///
/// Horizontal anchoring follows the line side: on the right the label's left
/// edge sits at `p3.x + x_offset`, on the left its right edge sits at
/// `p3.x - x_offset`. Vertically the label is centered on `p3.y`, nudged by
/// `+y_offset` for the title role and `-y_offset` for the value role.
#[must_use]
pub fn build_label(
    slice: &PieSlice,
    role: LabelRole,
    line: &LeaderLine,
    settings: &LabelSettings,
    x_offset: f64,
    y_offset: f64,
    measurer: &dyn TextMeasurer,
) -> LabelPrimitive {
    let style = settings
        .style_builder
        .as_ref()
        .map_or_else(|| settings.style(), |builder| builder(slice));
    let text = (settings.text_generator)(slice, role);
    let size = measurer.measure(&text, style.font);

    let x = if line.side.is_right() {
        line.p3.x + x_offset
    } else {
        line.p3.x - size.width - x_offset
    };
    let role_nudge = if role.is_title() { y_offset } else { -y_offset };
    let y = line.p3.y - size.height / 2.0 + role_nudge;

    LabelPrimitive::new(
        text,
        Rect::new(Point::new(x, y), size),
        style.text_color,
        style.bg_color,
        style.font,
    )
}
