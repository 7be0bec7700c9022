use crate::core::{Point, Size};
use crate::error::{LayerError, LayerResult};
use crate::render::{Color, MarkerDot};

use super::LabelSettings;

/// Style and enablement of the fallback marker dot.
///
/// `enabled` is the immutable user preference "substitute a marker when label
/// collisions occur"; whether a given placement pass actually draws dots is
/// decided by the engine's one-way marker latch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerDotSettings {
    pub enabled: bool,
    pub size: Size,
    pub border_width: f64,
    pub border_color: Color,
    pub fill_color: Color,
}

impl Default for MarkerDotSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            size: Size::new(10.0, 10.0),
            border_width: 1.0,
            border_color: Color::BLACK,
            fill_color: Color::WHITE,
        }
    }
}

impl MarkerDotSettings {
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Builds the dot primitive for one placement, centered on the line origin.
    #[must_use]
    pub fn dot_at(&self, center: Point) -> MarkerDot {
        MarkerDot::new(
            center,
            self.size,
            self.border_width,
            self.border_color,
            self.fill_color,
        )
    }

    pub fn validate(&self) -> LayerResult<()> {
        for (field, value) in [("width", self.size.width), ("height", self.size.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayerError::InvalidSettings(format!(
                    "marker {field} must be finite and > 0"
                )));
            }
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(LayerError::InvalidSettings(
                "marker border width must be finite and >= 0".to_owned(),
            ));
        }
        self.border_color.validate()?;
        self.fill_color.validate()
    }
}

/// Configuration bundle for one line-text layer instance.
///
/// Lengths and offsets are surface pixels; defaults mirror common pie-chart
/// annotation proportions (15 px segments, 5 px chart and label offsets).
#[derive(Debug, Clone)]
pub struct LineTextLayerSettings {
    pub segment1_length: f64,
    pub segment2_length: f64,
    pub chart_offset: f64,
    pub label_x_offset: f64,
    pub label_y_offset: f64,
    pub line_width: f64,
    pub line_color: Color,
    pub marker: MarkerDotSettings,
    pub title_label: LabelSettings,
    pub value_label: LabelSettings,
}

impl Default for LineTextLayerSettings {
    fn default() -> Self {
        Self {
            segment1_length: 15.0,
            segment2_length: 15.0,
            chart_offset: 5.0,
            label_x_offset: 5.0,
            label_y_offset: 0.0,
            line_width: 1.0,
            line_color: Color::BLACK,
            marker: MarkerDotSettings::default(),
            title_label: LabelSettings::default(),
            value_label: LabelSettings::default(),
        }
    }
}

impl LineTextLayerSettings {
    #[must_use]
    pub fn with_segment_lengths(mut self, segment1: f64, segment2: f64) -> Self {
        self.segment1_length = segment1;
        self.segment2_length = segment2;
        self
    }

    #[must_use]
    pub fn with_chart_offset(mut self, offset: f64) -> Self {
        self.chart_offset = offset;
        self
    }

    #[must_use]
    pub fn with_label_offsets(mut self, x_offset: f64, y_offset: f64) -> Self {
        self.label_x_offset = x_offset;
        self.label_y_offset = y_offset;
        self
    }

    #[must_use]
    pub fn with_line_stroke(mut self, width: f64, color: Color) -> Self {
        self.line_width = width;
        self.line_color = color;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerDotSettings) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_title_label(mut self, settings: LabelSettings) -> Self {
        self.title_label = settings;
        self
    }

    #[must_use]
    pub fn with_value_label(mut self, settings: LabelSettings) -> Self {
        self.value_label = settings;
        self
    }

    pub fn validate(&self) -> LayerResult<()> {
        for (value, name) in [
            (self.segment1_length, "segment1_length"),
            (self.segment2_length, "segment2_length"),
            (self.chart_offset, "chart_offset"),
            (self.label_x_offset, "label_x_offset"),
            (self.label_y_offset, "label_y_offset"),
        ] {
            if !value.is_finite() {
                return Err(LayerError::InvalidSettings(format!(
                    "layer offset `{name}` must be finite"
                )));
            }
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(LayerError::InvalidSettings(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        self.line_color.validate()?;
        self.marker.validate()?;
        self.title_label.validate()?;
        self.value_label.validate()
    }
}
