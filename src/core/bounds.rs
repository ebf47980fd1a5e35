use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Series;
use crate::error::{ChartError, ChartResult};

/// Configured lower or upper value bound of the bar scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "ValueBoundRepr", into = "ValueBoundRepr")]
pub enum ValueBound {
    /// Derived from the series on every draw.
    #[default]
    Auto,
    Fixed(f64),
}

impl ValueBound {
    /// Legacy numeric encoding of [`ValueBound::Auto`].
    pub const AUTO_SENTINEL: f64 = -1.0;

    pub fn fixed(value: f64) -> ChartResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "bound must be finite and >= 0, got {value}"
            )));
        }
        Ok(Self::Fixed(value))
    }

    /// Accepts `-1` as `Auto` and any finite value `>= 0` as `Fixed`.
    pub fn from_sentinel(value: f64) -> ChartResult<Self> {
        if value == Self::AUTO_SENTINEL {
            return Ok(Self::Auto);
        }
        Self::fixed(value).map_err(|_| {
            ChartError::InvalidInput(format!(
                "only -1 or a value >= 0 is accepted as bound, got {value}"
            ))
        })
    }

    #[must_use]
    pub fn as_sentinel(self) -> f64 {
        match self {
            Self::Auto => Self::AUTO_SENTINEL,
            Self::Fixed(value) => value,
        }
    }

    /// Checks a bound built without going through [`ValueBound::fixed`].
    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::Auto => Ok(()),
            Self::Fixed(value) => Self::fixed(value).map(|_| ()),
        }
    }

    #[must_use]
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    fn resolve(self, derived: f64) -> f64 {
        match self {
            Self::Auto => derived,
            Self::Fixed(value) => value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ValueBoundRepr {
    Keyword(String),
    Value(f64),
}

impl TryFrom<ValueBoundRepr> for ValueBound {
    type Error = ChartError;

    fn try_from(repr: ValueBoundRepr) -> ChartResult<Self> {
        match repr {
            ValueBoundRepr::Keyword(keyword) if keyword.eq_ignore_ascii_case("auto") => {
                Ok(Self::Auto)
            }
            ValueBoundRepr::Keyword(keyword) => Err(ChartError::InvalidInput(format!(
                "unknown bound keyword `{keyword}`"
            ))),
            ValueBoundRepr::Value(value) => Self::from_sentinel(value),
        }
    }
}

impl From<ValueBound> for ValueBoundRepr {
    fn from(bound: ValueBound) -> Self {
        match bound {
            ValueBound::Auto => Self::Keyword("auto".to_owned()),
            ValueBound::Fixed(value) => Self::Value(value),
        }
    }
}

/// Resolved `[min, max]` used to scale bar heights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveBounds {
    pub min: f64,
    pub max: f64,
}

impl EffectiveBounds {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidInput(
                "effective bounds must be finite".to_owned(),
            ));
        }
        if max == min {
            return Err(ChartError::InvalidInput(format!(
                "effective max equals effective min ({min}); bar heights are undefined"
            )));
        }
        if max < min {
            return Err(ChartError::InvalidInput(format!(
                "effective max ({max}) must be greater than effective min ({min})"
            )));
        }
        Ok(Self { min, max })
    }

    /// Resolves `Auto` bounds from the series, comparing values numerically.
    pub fn resolve(series: &Series, min: ValueBound, max: ValueBound) -> ChartResult<Self> {
        let values = series.values().iter().copied().map(OrderedFloat);
        let (Some(series_min), Some(series_max)) = (values.clone().min(), values.max()) else {
            return Err(ChartError::InvalidInput(
                "series must contain at least one value".to_owned(),
            ));
        };
        Self::new(min.resolve(series_min.0), max.resolve(series_max.0))
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Unclamped position of `value` inside the bounds (`min → 0`, `max → 1`).
    #[must_use]
    pub fn height_fraction(self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    /// Value at step `step` of `steps` equal intervals from `min` to `max`.
    #[must_use]
    pub fn interpolate(self, step: usize, steps: usize) -> f64 {
        self.min + step as f64 * self.span() / steps as f64
    }
}
