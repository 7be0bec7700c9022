use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::core::PieSlice;
use crate::error::LayerResult;
use crate::render::{Color, LabelFont};

/// Which of the two labels a text generator or builder is producing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    Title,
    Value,
}

impl LabelRole {
    #[must_use]
    pub const fn is_title(self) -> bool {
        matches!(self, Self::Title)
    }
}

/// Presentation of one label: colors and typeface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub text_color: Color,
    pub bg_color: Color,
    pub font: LabelFont,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            text_color: Color::BLACK,
            bg_color: Color::CLEAR,
            font: LabelFont::default(),
        }
    }
}

/// Produces the display string for a slice in a given role.
pub type TextGenerator = Arc<dyn Fn(&PieSlice, LabelRole) -> String + Send + Sync>;

/// Fully-custom label styling; when set, the role's presentation fields are
/// ignored and this builder decides the style per slice.
pub type LabelStyleBuilder = Arc<dyn Fn(&PieSlice) -> LabelStyle + Send + Sync>;

/// Configuration for one label role (title or value).
///
/// Immutable during a placement pass; clone freely — the closures are shared
/// by reference.
#[derive(Clone)]
pub struct LabelSettings {
    pub text_color: Color,
    pub bg_color: Color,
    pub font: LabelFont,
    pub text_generator: TextGenerator,
    pub style_builder: Option<LabelStyleBuilder>,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            text_color: Color::BLACK,
            bg_color: Color::CLEAR,
            font: LabelFont::default(),
            text_generator: Arc::new(default_label_text),
            style_builder: None,
        }
    }
}

impl fmt::Debug for LabelSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelSettings")
            .field("text_color", &self.text_color)
            .field("bg_color", &self.bg_color)
            .field("font", &self.font)
            .field("custom_style_builder", &self.style_builder.is_some())
            .finish_non_exhaustive()
    }
}

impl LabelSettings {
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    #[must_use]
    pub fn with_bg_color(mut self, color: Color) -> Self {
        self.bg_color = color;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: LabelFont) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub fn with_text_generator(
        mut self,
        generator: impl Fn(&PieSlice, LabelRole) -> String + Send + Sync + 'static,
    ) -> Self {
        self.text_generator = Arc::new(generator);
        self
    }

    #[must_use]
    pub fn with_style_builder(
        mut self,
        builder: impl Fn(&PieSlice) -> LabelStyle + Send + Sync + 'static,
    ) -> Self {
        self.style_builder = Some(Arc::new(builder));
        self
    }

    /// Default style assembled from this role's presentation fields.
    #[must_use]
    pub fn style(&self) -> LabelStyle {
        LabelStyle {
            text_color: self.text_color,
            bg_color: self.bg_color,
            font: self.font,
        }
    }

    pub fn validate(&self) -> LayerResult<()> {
        self.text_color.validate()?;
        self.bg_color.validate()?;
        self.font.validate()
    }
}

/// Default text generator: the slice title for the title role, the value
/// formatted as a plain decimal for the value role.
pub fn default_label_text(slice: &PieSlice, role: LabelRole) -> String {
    match role {
        LabelRole::Title => slice.data.title.clone(),
        LabelRole::Value => format_decimal_value(slice.data.value),
    }
}

/// Locale-agnostic decimal rendering: no grouping, no currency symbol, zero
/// minimum fraction digits, at most three fraction digits. Values a decimal
/// cannot represent (NaN, infinities, out of range) fall back to the raw
/// `f64` display form.
fn format_decimal_value(value: f64) -> String {
    decimal_text(value).unwrap_or_else(|| value.to_string())
}

fn decimal_text(value: f64) -> Option<String> {
    let decimal = Decimal::from_f64(value)?;
    Some(decimal.round_dp(3).normalize().to_string())
}
