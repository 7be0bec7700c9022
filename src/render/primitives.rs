use crate::core::{Point, Rect, Size};
use crate::error::{LayerError, LayerResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const CLEAR: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> LayerResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(LayerError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Engine-issued opaque handle for one attachable visual element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Label typeface description for the black-box text measurer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFont {
    pub size_px: f64,
    pub bold: bool,
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            size_px: 20.0,
            bold: true,
        }
    }
}

impl LabelFont {
    #[must_use]
    pub const fn new(size_px: f64, bold: bool) -> Self {
        Self { size_px, bold }
    }

    pub fn validate(self) -> LayerResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(LayerError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one bent leader line in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineShape {
    pub points: [Point; 3],
    pub stroke_width: f64,
    pub color: Color,
}

impl LineShape {
    #[must_use]
    pub const fn new(p1: Point, p2: Point, p3: Point, stroke_width: f64, color: Color) -> Self {
        Self {
            points: [p1, p2, p3],
            stroke_width,
            color,
        }
    }

    /// Bounding-box center; repositioning is expressed against this point.
    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        let min_x = self.points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = self
            .points
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_y = self.points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = self
            .points
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);
        Rect::new(
            Point::new(min_x, min_y),
            Size::new(max_x - min_x, max_y - min_y),
        )
    }

    /// Translates all three points so the bounding-box center lands on `to`.
    pub fn move_center(&mut self, to: Point) {
        let from = self.center();
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        for point in &mut self.points {
            *point = point.translated(dx, dy);
        }
    }

    pub fn validate(&self) -> LayerResult<()> {
        if self.points.iter().any(|p| !p.is_finite()) {
            return Err(LayerError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(LayerError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one measured, positioned label in pixel space.
///
/// `frame` already carries the intrinsic (size-to-fit) size; backends draw the
/// text inside it without re-layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPrimitive {
    pub text: String,
    pub frame: Rect,
    pub text_color: Color,
    pub bg_color: Color,
    pub font: LabelFont,
}

impl LabelPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        frame: Rect,
        text_color: Color,
        bg_color: Color,
        font: LabelFont,
    ) -> Self {
        Self {
            text: text.into(),
            frame,
            text_color,
            bg_color,
            font,
        }
    }

    /// Empty text is allowed: a label for an untitled slice measures to a
    /// zero-width frame and simply never collides.
    pub fn validate(&self) -> LayerResult<()> {
        if !self.frame.origin.is_finite() || !self.frame.size.is_finite() {
            return Err(LayerError::InvalidData(
                "label frame must be finite".to_owned(),
            ));
        }
        self.font.validate()?;
        self.text_color.validate()?;
        self.bg_color.validate()
    }
}

/// Draw command for the small circular fallback marker centered on the line
/// origin at the slice edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerDot {
    pub center: Point,
    pub size: Size,
    pub border_width: f64,
    pub border_color: Color,
    pub fill_color: Color,
}

impl MarkerDot {
    #[must_use]
    pub const fn new(
        center: Point,
        size: Size,
        border_width: f64,
        border_color: Color,
        fill_color: Color,
    ) -> Self {
        Self {
            center,
            size,
            border_width,
            border_color,
            fill_color,
        }
    }

    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::from_center(self.center, self.size)
    }

    pub fn validate(&self) -> LayerResult<()> {
        if !self.center.is_finite() {
            return Err(LayerError::InvalidData(
                "marker center must be finite".to_owned(),
            ));
        }
        for (field, value) in [
            ("width", self.size.width),
            ("height", self.size.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayerError::InvalidData(format!(
                    "marker {field} must be finite and > 0"
                )));
            }
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(LayerError::InvalidData(
                "marker border width must be finite and >= 0".to_owned(),
            ));
        }
        self.border_color.validate()?;
        self.fill_color.validate()
    }
}
