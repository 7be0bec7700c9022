use crate::core::Size;
use crate::render::LabelFont;

/// Black-box text measurement capability.
///
/// The engine only needs intrinsic (size-to-fit) label sizes; rasterization
/// and font loading stay on the host side. Implementations must be pure for a
/// given `(text, font)` pair so repeated placement passes stay deterministic.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: LabelFont) -> Size;
}

/// Character-advance measurement heuristic used when no host measurer is
/// injected: width = glyph count × font size × advance factor, height =
/// font size × line-height factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharAdvanceMeasurer {
    pub advance_factor: f64,
    pub bold_advance_factor: f64,
    pub line_height_factor: f64,
}

impl Default for CharAdvanceMeasurer {
    fn default() -> Self {
        Self {
            advance_factor: 0.56,
            bold_advance_factor: 0.60,
            line_height_factor: 1.2,
        }
    }
}

impl TextMeasurer for CharAdvanceMeasurer {
    fn measure(&self, text: &str, font: LabelFont) -> Size {
        if text.is_empty() {
            return Size::zero();
        }
        let factor = if font.bold {
            self.bold_advance_factor
        } else {
            self.advance_factor
        };
        let glyphs = text.chars().count() as f64;
        Size::new(
            glyphs * font.size_px * factor,
            font.size_px * self.line_height_factor,
        )
    }
}
