use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::error::{ChartError, ChartResult};

use super::{AxisStyle, BarChartStyle};

/// Serializable bootstrap configuration for a chart view.
///
/// Missing fields take widget defaults; loaded values go through the same
/// validation as the `with_*` builders. Malformed JSON is a `Config` error,
/// rejected values are `InvalidInput`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub chart: BarChartStyle,
    pub axis: AxisStyle,
}

impl ChartConfig {
    pub fn validate(self) -> ChartResult<Self> {
        Ok(Self {
            chart: self.chart.validate()?,
            axis: self.axis.validate()?,
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| match e.classify() {
            Category::Data => ChartError::InvalidInput(format!("rejected chart config value: {e}")),
            Category::Io | Category::Syntax | Category::Eof => {
                ChartError::Config(format!("failed to parse chart config json: {e}"))
            }
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Config(format!("failed to serialize chart config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::ChartConfig;
    use crate::core::ValueBound;
    use crate::error::ChartError;
    use crate::render::Color;

    #[test]
    fn empty_object_yields_defaults() {
        let config = ChartConfig::from_json_str("{}").expect("defaults");
        assert_eq!(config, ChartConfig::default());
    }

    #[test]
    fn partial_config_overrides_selected_fields() {
        let config = ChartConfig::from_json_str(
            r##"{
                "chart": { "bar_color": "#FF8800", "min_value": 0, "max_value": "auto" },
                "axis": { "title": "Weekly steps" }
            }"##,
        )
        .expect("config");

        assert_eq!(config.chart.min_value, ValueBound::Fixed(0.0));
        assert_eq!(config.chart.max_value, ValueBound::Auto);
        assert_eq!(config.chart.bar_color.red, 1.0);
        assert_eq!(config.chart.bar_width_fraction, 0.1);
        assert_eq!(config.axis.title, "Weekly steps");
        assert_eq!(config.axis.tick_font.size_px, 30.0);
        assert_eq!(config.chart.grid_color, Color::TRANSPARENT);
    }

    #[test]
    fn invalid_values_are_rejected_on_load() {
        let err = ChartConfig::from_json_str(r#"{ "chart": { "bar_spacing_fraction": -0.2 } }"#)
            .expect_err("negative spacing");
        assert!(matches!(err, ChartError::InvalidInput(_)));

        let err = ChartConfig::from_json_str(r#"{ "chart": { "min_value": -4 } }"#)
            .expect_err("invalid bound");
        assert!(matches!(err, ChartError::InvalidInput(_)));

        let err = ChartConfig::from_json_str(
            r#"{ "chart": { "bar_color": { "red": 2, "green": 0, "blue": 0 } } }"#,
        )
        .expect_err("channel out of range");
        assert!(matches!(err, ChartError::InvalidInput(_)));
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let config = ChartConfig::default();
        let json = config.to_json_pretty().expect("serialize");
        assert_eq!(ChartConfig::from_json_str(&json).expect("parse"), config);
    }
}
