use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BarLayout, EffectiveBounds, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};

/// Fixed padding added to every reserved margin.
pub const AXIS_PADDING_PX: f64 = 40.0;
/// Distance between the outer edge / plot edge and axis text.
pub const AXIS_TEXT_INSET_PX: f64 = 20.0;
/// Number of equal intervals on the value axis (11 labels).
pub const Y_TICK_STEPS: usize = 10;
/// Fractional digits always kept in value-axis labels.
pub const Y_TICK_LABEL_MIN_DECIMALS: u32 = 6;
/// Largest scale `rust_decimal` can carry.
const DECIMAL_MAX_SCALE: u32 = 28;

pub type YTickValues = SmallVec<[f64; Y_TICK_STEPS + 1]>;
pub type YTickLabels = SmallVec<[String; Y_TICK_STEPS + 1]>;

/// Space reserved around the plot for title and axis text.
///
/// The right margin mirrors `left` so the plot stays horizontally centered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMargins {
    pub title: f64,
    pub left: f64,
    pub bottom: f64,
}

impl AxisMargins {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left
    }

    /// Area left for the chart once margins are removed from `viewport`.
    pub fn plot_area(self, viewport: Viewport) -> ChartResult<PlotArea> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let area = PlotArea::new(
            self.left,
            self.title,
            f64::from(viewport.width) - self.left - self.right(),
            f64::from(viewport.height) - self.title - self.bottom,
        );
        if !area.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(area)
    }
}

pub fn compute_margins(
    title_font_height: f64,
    axis_label_font_height: f64,
    max_y_tick_text_width: f64,
    tick_font_height: f64,
) -> AxisMargins {
    AxisMargins {
        title: AXIS_PADDING_PX + title_font_height,
        left: AXIS_PADDING_PX + axis_label_font_height + max_y_tick_text_width,
        bottom: AXIS_PADDING_PX + axis_label_font_height + tick_font_height,
    }
}

/// Axis tick labels derived from the bound chart's series and bounds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisTicks {
    pub x_labels: Vec<String>,
    pub y_values: YTickValues,
    pub y_labels: YTickLabels,
}

impl AxisTicks {
    /// `"1".."N"` on the category axis, 11 evenly spaced values on the value axis.
    #[must_use]
    pub fn from_bounds(bar_count: usize, bounds: EffectiveBounds) -> Self {
        let x_labels = (1..=bar_count).map(|i| i.to_string()).collect();
        let y_values: YTickValues = (0..=Y_TICK_STEPS)
            .map(|k| bounds.interpolate(k, Y_TICK_STEPS))
            .collect();
        let decimals = tick_label_decimals(bounds.span() / Y_TICK_STEPS as f64);
        let y_labels = y_values
            .iter()
            .map(|&v| format_tick_value(v, decimals))
            .collect();
        Self {
            x_labels,
            y_values,
            y_labels,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_labels.is_empty() && self.y_labels.is_empty()
    }
}

/// Fractional digits needed so labels `step` apart keep a significant digit.
#[must_use]
pub fn tick_label_decimals(step: f64) -> u32 {
    if !step.is_finite() || step <= 0.0 {
        return Y_TICK_LABEL_MIN_DECIMALS;
    }
    let needed = -step.log10().ceil() + 1.0;
    if needed <= f64::from(Y_TICK_LABEL_MIN_DECIMALS) {
        Y_TICK_LABEL_MIN_DECIMALS
    } else {
        (needed as u32).min(DECIMAL_MAX_SCALE)
    }
}

/// Formats a value-axis label rounded to `decimals` without binary
/// floating-point noise.
#[must_use]
pub fn format_tick_value(value: f64, decimals: u32) -> String {
    match Decimal::from_f64(value) {
        Some(decimal) => decimal
            .round_dp(decimals.min(DECIMAL_MAX_SCALE))
            .normalize()
            .to_string(),
        None => value.to_string(),
    }
}

/// How an x-tick label relates to its anchor x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum XTickAnchorKind {
    /// Label starts at the anchor (no chart bound).
    Start,
    /// Label is centered on the anchor (under its bar).
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XTickAnchor {
    pub x: f64,
    pub kind: XTickAnchorKind,
}

/// Horizontal anchors for `count` category labels.
///
/// With a bar layout every label is centered under its bar; otherwise labels
/// are spread by index over the plot width.
#[must_use]
pub fn x_tick_anchors(area: PlotArea, count: usize, layout: Option<&BarLayout>) -> Vec<XTickAnchor> {
    match layout {
        Some(layout) => layout
            .bars()
            .iter()
            .take(count)
            .map(|bar| XTickAnchor {
                x: area.left + bar.center_x(),
                kind: XTickAnchorKind::Center,
            })
            .collect(),
        None => (0..count)
            .map(|i| XTickAnchor {
                x: area.left + area.width * (i as f64 / count as f64),
                kind: XTickAnchorKind::Start,
            })
            .collect(),
    }
}

/// Baseline of category labels, above the x-axis title.
#[must_use]
pub fn x_tick_baseline(viewport: Viewport, axis_label_font_height: f64) -> f64 {
    f64::from(viewport.height) - AXIS_TEXT_INSET_PX - axis_label_font_height
}

/// Baselines of the 11 value labels; index 0 is the plot bottom, 10 the top.
#[must_use]
pub fn y_tick_baselines(area: PlotArea) -> [f64; Y_TICK_STEPS + 1] {
    std::array::from_fn(|k| area.top + area.height - area.height * k as f64 / Y_TICK_STEPS as f64)
}

/// Right edge of value labels.
#[must_use]
pub fn y_tick_right_x(area: PlotArea) -> f64 {
    area.left - AXIS_TEXT_INSET_PX
}

/// Center-x and baseline of the chart title.
#[must_use]
pub fn title_anchor(viewport: Viewport, title_font_height: f64) -> (f64, f64) {
    (
        f64::from(viewport.width) * 0.5,
        AXIS_TEXT_INSET_PX + title_font_height,
    )
}

/// Center-x and baseline of the x-axis title.
#[must_use]
pub fn x_label_anchor(viewport: Viewport, area: PlotArea) -> (f64, f64) {
    (
        area.left + area.width * 0.5,
        f64::from(viewport.height) - AXIS_TEXT_INSET_PX,
    )
}

/// Baseline-x and center-y of the y-axis title, which is drawn rotated 90° ccw.
#[must_use]
pub fn y_label_anchor(area: PlotArea, axis_label_font_height: f64) -> (f64, f64) {
    (
        AXIS_TEXT_INSET_PX + axis_label_font_height,
        area.top + area.height * 0.5,
    )
}

#[cfg(test)]
mod tests {
    use super::{
        AxisTicks, compute_margins, format_tick_value, tick_label_decimals, y_tick_baselines,
    };
    use crate::core::{EffectiveBounds, PlotArea, Viewport};
    use crate::error::ChartError;

    #[test]
    fn margins_follow_font_metrics() {
        let margins = compute_margins(50.0, 40.0, 62.0, 30.0);
        assert_eq!(margins.title, 90.0);
        assert_eq!(margins.left, 142.0);
        assert_eq!(margins.right(), 142.0);
        assert_eq!(margins.bottom, 110.0);

        let area = margins.plot_area(Viewport::new(1000, 800)).expect("area");
        assert_eq!(area, PlotArea::new(142.0, 90.0, 716.0, 600.0));
    }

    #[test]
    fn collapsed_plot_area_is_rejected() {
        let margins = compute_margins(50.0, 40.0, 62.0, 30.0);
        let err = margins
            .plot_area(Viewport::new(200, 800))
            .expect_err("too narrow");
        assert!(matches!(err, ChartError::InvalidViewport { .. }));
    }

    #[test]
    fn tick_labels_drop_float_noise() {
        let bounds = EffectiveBounds::new(0.0, 0.3).expect("bounds");
        let ticks = AxisTicks::from_bounds(2, bounds);
        assert_eq!(ticks.x_labels, vec!["1", "2"]);
        assert_eq!(ticks.y_labels[1], "0.03");
        assert_eq!(ticks.y_labels[3], "0.09");
        assert_eq!(ticks.y_labels[10], "0.3");
        assert_eq!(format_tick_value(32.5, 6), "32.5");
        assert_eq!(format_tick_value(26.0, 6), "26");
    }

    #[test]
    fn tiny_spans_keep_distinct_labels() {
        assert_eq!(tick_label_decimals(8.0), 6);
        assert_eq!(tick_label_decimals(2e-7), 7);
        assert_eq!(tick_label_decimals(3e-8), 8);

        let bounds = EffectiveBounds::new(0.0, 1e-6).expect("bounds");
        let ticks = AxisTicks::from_bounds(2, bounds);
        assert_eq!(ticks.y_labels[0], "0");
        assert_eq!(ticks.y_labels[1], "0.0000001");
        assert_eq!(ticks.y_labels[5], "0.0000005");
        assert_eq!(ticks.y_labels[10], "0.000001");
    }

    #[test]
    fn value_baselines_run_bottom_to_top() {
        let area = PlotArea::new(100.0, 90.0, 500.0, 600.0);
        let baselines = y_tick_baselines(area);
        assert_eq!(baselines[0], 690.0);
        assert_eq!(baselines[5], 390.0);
        assert_eq!(baselines[10], 90.0);
    }
}
