use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Ordered, non-empty list of finite values plotted as bars.
///
/// A series is replaced wholesale on update; there is no in-place mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> ChartResult<Self> {
        if values.is_empty() {
            return Err(ChartError::InvalidInput(
                "series must contain at least one value".to_owned(),
            ));
        }
        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            return Err(ChartError::InvalidInput(format!(
                "series value at index {index} must be finite"
            )));
        }
        Ok(Self { values })
    }

    /// Builds a series from any numeric type losslessly convertible to `f64`.
    pub fn from_values<I, T>(values: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        Self::new(values.into_iter().map(Into::into).collect())
    }

    pub fn from_decimals(values: &[Decimal]) -> ChartResult<Self> {
        let converted = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value.to_f64().ok_or_else(|| {
                    ChartError::InvalidInput(format!(
                        "series value at index {index} cannot be represented as f64"
                    ))
                })
            })
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(converted)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TryFrom<Vec<f64>> for Series {
    type Error = ChartError;

    fn try_from(values: Vec<f64>) -> ChartResult<Self> {
        Self::new(values)
    }
}

impl From<Series> for Vec<f64> {
    fn from(series: Series) -> Self {
        series.values
    }
}
