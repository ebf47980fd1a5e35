use serde::{Deserialize, Serialize};

use crate::core::{BarFractions, ValueBound};
use crate::error::ChartResult;
use crate::render::Color;

pub const DEFAULT_BAR_WIDTH_FRACTION: f64 = 0.1;
pub const DEFAULT_BAR_SPACING_FRACTION: f64 = 0.03;
/// Blend ratio toward black used to derive the shadow from the bar color.
pub const BAR_SHADOW_BLEND_RATIO: f64 = 0.5;
/// Stroke width of gap gridlines.
pub const GRID_STROKE_WIDTH_PX: f64 = 2.0;

/// Immutable style snapshot of a bar chart.
///
/// Every `with_*` method returns a new validated snapshot; the shadow color is
/// derived from the bar color unless explicitly overridden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartStyle {
    pub background_color: Color,
    pub bar_color: Color,
    /// Explicit shadow color; `None` derives it from `bar_color`.
    pub bar_shadow_color: Option<Color>,
    pub grid_color: Color,
    pub bar_width_fraction: f64,
    pub bar_spacing_fraction: f64,
    pub min_value: ValueBound,
    pub max_value: ValueBound,
}

impl Default for BarChartStyle {
    fn default() -> Self {
        Self {
            background_color: Color::TRANSPARENT,
            bar_color: Color::BLUE,
            bar_shadow_color: None,
            grid_color: Color::TRANSPARENT,
            bar_width_fraction: DEFAULT_BAR_WIDTH_FRACTION,
            bar_spacing_fraction: DEFAULT_BAR_SPACING_FRACTION,
            min_value: ValueBound::Auto,
            max_value: ValueBound::Auto,
        }
    }
}

impl BarChartStyle {
    pub fn validate(self) -> ChartResult<Self> {
        self.background_color.validate()?;
        self.bar_color.validate()?;
        if let Some(shadow) = self.bar_shadow_color {
            shadow.validate()?;
        }
        self.grid_color.validate()?;
        self.fractions()?;
        self.min_value.validate()?;
        self.max_value.validate()?;
        Ok(self)
    }

    pub fn fractions(self) -> ChartResult<BarFractions> {
        BarFractions::new(self.bar_width_fraction, self.bar_spacing_fraction)
    }

    /// Color of the full-height backdrop drawn behind every bar.
    #[must_use]
    pub fn effective_bar_shadow_color(self) -> Color {
        self.bar_shadow_color
            .unwrap_or_else(|| self.bar_color.blend(Color::BLACK, BAR_SHADOW_BLEND_RATIO))
    }

    /// Replaces the bar color and re-derives the shadow from it.
    pub fn with_bar_color(self, color: Color) -> ChartResult<Self> {
        Self {
            bar_color: color,
            bar_shadow_color: None,
            ..self
        }
        .validate()
    }

    pub fn with_bar_shadow_color(self, color: Color) -> ChartResult<Self> {
        Self {
            bar_shadow_color: Some(color),
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

    pub fn with_grid_color(self, color: Color) -> ChartResult<Self> {
        Self {
            grid_color: color,
            ..self
        }
        .validate()
    }

    pub fn with_bar_width_fraction(self, fraction: f64) -> ChartResult<Self> {
        Self {
            bar_width_fraction: fraction,
            ..self
        }
        .validate()
    }

    pub fn with_bar_spacing_fraction(self, fraction: f64) -> ChartResult<Self> {
        Self {
            bar_spacing_fraction: fraction,
            ..self
        }
        .validate()
    }

    /// `-1` selects automatic derivation from the series.
    pub fn with_min_value(self, value: f64) -> ChartResult<Self> {
        Self {
            min_value: ValueBound::from_sentinel(value)?,
            ..self
        }
        .validate()
    }

    /// `-1` selects automatic derivation from the series.
    pub fn with_max_value(self, value: f64) -> ChartResult<Self> {
        Self {
            max_value: ValueBound::from_sentinel(value)?,
            ..self
        }
        .validate()
    }
}
