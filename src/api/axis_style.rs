use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const DEFAULT_TITLE: &str = "Unset Title";
pub const DEFAULT_X_AXIS_LABEL: &str = "X - Axis";
pub const DEFAULT_Y_AXIS_LABEL: &str = "Y - Axis";
pub const DEFAULT_TITLE_FONT_SIZE_PX: f64 = 50.0;
pub const DEFAULT_AXIS_LABEL_FONT_SIZE_PX: f64 = 40.0;
pub const DEFAULT_TICK_FONT_SIZE_PX: f64 = 30.0;

pub const DEFAULT_TITLE_FONT: FontStyle =
    FontStyle::new(DEFAULT_TITLE_FONT_SIZE_PX, Color::WHITE).bold();
pub const DEFAULT_AXIS_LABEL_FONT: FontStyle =
    FontStyle::new(DEFAULT_AXIS_LABEL_FONT_SIZE_PX, Color::WHITE);
pub const DEFAULT_TICK_FONT: FontStyle = FontStyle::new(DEFAULT_TICK_FONT_SIZE_PX, Color::WHITE);

/// Size, color and weight of one text role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    pub size_px: f64,
    pub color: Color,
    #[serde(default)]
    pub bold: bool,
}

impl FontStyle {
    #[must_use]
    pub const fn new(size_px: f64, color: Color) -> Self {
        Self {
            size_px,
            color,
            bold: false,
        }
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn validate(self, role: &str) -> ChartResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "{role} font size must be finite and > 0, got {}",
                self.size_px
            )));
        }
        self.color.validate()
    }
}

/// Font fields present in a config object; missing ones keep the role default.
#[derive(Debug, Deserialize)]
struct FontStylePatch {
    size_px: Option<f64>,
    color: Option<Color>,
    bold: Option<bool>,
}

impl FontStylePatch {
    fn apply(self, base: FontStyle) -> FontStyle {
        FontStyle {
            size_px: self.size_px.unwrap_or(base.size_px),
            color: self.color.unwrap_or(base.color),
            bold: self.bold.unwrap_or(base.bold),
        }
    }
}

fn title_font<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FontStyle, D::Error> {
    FontStylePatch::deserialize(deserializer).map(|patch| patch.apply(DEFAULT_TITLE_FONT))
}

fn axis_label_font<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FontStyle, D::Error> {
    FontStylePatch::deserialize(deserializer).map(|patch| patch.apply(DEFAULT_AXIS_LABEL_FONT))
}

fn tick_font<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FontStyle, D::Error> {
    FontStylePatch::deserialize(deserializer).map(|patch| patch.apply(DEFAULT_TICK_FONT))
}

/// Texts and fonts drawn around the plot by the axis describer.
///
/// Font objects may be partial; absent fields fall back to that role's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    pub background_color: Color,
    pub title: String,
    #[serde(deserialize_with = "title_font")]
    pub title_font: FontStyle,
    pub x_axis_label: String,
    pub y_axis_label: String,
    #[serde(deserialize_with = "axis_label_font")]
    pub axis_label_font: FontStyle,
    #[serde(deserialize_with = "tick_font")]
    pub tick_font: FontStyle,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            background_color: Color::TRANSPARENT,
            title: DEFAULT_TITLE.to_owned(),
            title_font: DEFAULT_TITLE_FONT,
            x_axis_label: DEFAULT_X_AXIS_LABEL.to_owned(),
            y_axis_label: DEFAULT_Y_AXIS_LABEL.to_owned(),
            axis_label_font: DEFAULT_AXIS_LABEL_FONT,
            tick_font: DEFAULT_TICK_FONT,
        }
    }
}

impl AxisStyle {
    pub fn validate(self) -> ChartResult<Self> {
        self.background_color.validate()?;
        self.title_font.validate("title")?;
        self.axis_label_font.validate("axis label")?;
        self.tick_font.validate("tick")?;
        Ok(self)
    }

    pub fn with_title(self, title: impl Into<String>) -> ChartResult<Self> {
        Self {
            title: title.into(),
            ..self
        }
        .validate()
    }

    pub fn with_axis_labels(
        self,
        x_axis_label: impl Into<String>,
        y_axis_label: impl Into<String>,
    ) -> ChartResult<Self> {
        Self {
            x_axis_label: x_axis_label.into(),
            y_axis_label: y_axis_label.into(),
            ..self
        }
        .validate()
    }

    pub fn with_background_color(self, color: Color) -> ChartResult<Self> {
        Self {
            background_color: color,
            ..self
        }
        .validate()
    }

    pub fn with_title_font(self, font: FontStyle) -> ChartResult<Self> {
        Self {
            title_font: font,
            ..self
        }
        .validate()
    }

    pub fn with_axis_label_font(self, font: FontStyle) -> ChartResult<Self> {
        Self {
            axis_label_font: font,
            ..self
        }
        .validate()
    }

    pub fn with_tick_font(self, font: FontStyle) -> ChartResult<Self> {
        Self {
            tick_font: font,
            ..self
        }
        .validate()
    }
}
