use tracing::debug;

use crate::core::axis_layout::{
    title_anchor, x_label_anchor, x_tick_baseline, y_label_anchor, y_tick_baselines,
    y_tick_right_x,
};
use crate::core::{
    AxisMargins, AxisTicks, PlotArea, Viewport, XTickAnchorKind, compute_margins, x_tick_anchors,
};
use crate::error::ChartResult;
use crate::render::{
    CanvasLayerKind, RectPrimitive, RenderFrame, TextHAlign, TextMeasurer, TextPrimitive,
    TextRotation,
};

use super::{AxisStyle, BarGeometryProvider};

/// Container-side describer: title, axis titles and tick labels around a chart.
///
/// Ticks are a cache mirrored from the bound chart by [`AxisDescriber::bind`];
/// the chart itself stays the single source of truth for values and bounds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisDescriber {
    style: AxisStyle,
    ticks: AxisTicks,
}

impl AxisDescriber {
    pub fn new(style: AxisStyle) -> ChartResult<Self> {
        Ok(Self {
            style: style.validate()?,
            ticks: AxisTicks::default(),
        })
    }

    #[must_use]
    pub fn style(&self) -> &AxisStyle {
        &self.style
    }

    #[must_use]
    pub fn ticks(&self) -> &AxisTicks {
        &self.ticks
    }

    pub fn with_style(&self, style: AxisStyle) -> ChartResult<Self> {
        Ok(Self {
            style: style.validate()?,
            ticks: self.ticks.clone(),
        })
    }

    /// Mirrors the chart's series length and effective bounds into tick labels.
    pub fn bind(&self, chart: &dyn BarGeometryProvider) -> ChartResult<Self> {
        let bounds = chart.effective_bounds()?;
        let ticks = AxisTicks::from_bounds(chart.series().len(), bounds);
        debug!(
            x_ticks = ticks.x_labels.len(),
            y_min = bounds.min,
            y_max = bounds.max,
            "bind axis describer to chart"
        );
        Ok(Self {
            style: self.style.clone(),
            ticks,
        })
    }

    /// Widest value label, measured with the tick font.
    #[must_use]
    pub fn max_y_tick_width(&self, measurer: &dyn TextMeasurer) -> f64 {
        self.ticks
            .y_labels
            .iter()
            .map(|label| measurer.text_width(label, self.style.tick_font.size_px))
            .fold(0.0, f64::max)
    }

    #[must_use]
    pub fn margins(&self, measurer: &dyn TextMeasurer) -> AxisMargins {
        compute_margins(
            self.style.title_font.size_px,
            self.style.axis_label_font.size_px,
            self.max_y_tick_width(measurer),
            self.style.tick_font.size_px,
        )
    }

    /// Appends describer background and text into `frame`.
    ///
    /// With a chart, category labels are centered under its bars; without one
    /// they are spread evenly over `area`.
    pub fn build_frame_into(
        &self,
        frame: &mut RenderFrame,
        viewport: Viewport,
        area: PlotArea,
        chart: Option<&dyn BarGeometryProvider>,
    ) -> ChartResult<()> {
        let style = &self.style;

        if !style.background_color.is_transparent() {
            frame.push_rect(
                CanvasLayerKind::Background,
                RectPrimitive::new(
                    0.0,
                    0.0,
                    f64::from(viewport.width),
                    f64::from(viewport.height),
                    style.background_color,
                ),
            );
        }

        if !style.title.is_empty() {
            let (x, y) = title_anchor(viewport, style.title_font.size_px);
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    style.title.clone(),
                    x,
                    y,
                    style.title_font.size_px,
                    style.title_font.color,
                    TextHAlign::Center,
                )
                .with_bold(style.title_font.bold),
            );
        }

        let layout = chart
            .map(|chart| chart.bar_layout(area.width))
            .transpose()?;
        let x_baseline = x_tick_baseline(viewport, style.axis_label_font.size_px);
        let anchors = x_tick_anchors(area, self.ticks.x_labels.len(), layout.as_ref());
        for (label, anchor) in self.ticks.x_labels.iter().zip(anchors) {
            let h_align = match anchor.kind {
                XTickAnchorKind::Start => TextHAlign::Left,
                XTickAnchorKind::Center => TextHAlign::Center,
            };
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    label.clone(),
                    anchor.x,
                    x_baseline,
                    style.tick_font.size_px,
                    style.tick_font.color,
                    h_align,
                )
                .with_bold(style.tick_font.bold),
            );
        }

        let y_right = y_tick_right_x(area);
        for (label, baseline) in self.ticks.y_labels.iter().zip(y_tick_baselines(area)) {
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    label.clone(),
                    y_right,
                    baseline,
                    style.tick_font.size_px,
                    style.tick_font.color,
                    TextHAlign::Right,
                )
                .with_bold(style.tick_font.bold),
            );
        }

        if !style.x_axis_label.is_empty() {
            let (x, y) = x_label_anchor(viewport, area);
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    style.x_axis_label.clone(),
                    x,
                    y,
                    style.axis_label_font.size_px,
                    style.axis_label_font.color,
                    TextHAlign::Center,
                )
                .with_bold(style.axis_label_font.bold),
            );
        }

        if !style.y_axis_label.is_empty() {
            let (x, y) = y_label_anchor(area, style.axis_label_font.size_px);
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    style.y_axis_label.clone(),
                    x,
                    y,
                    style.axis_label_font.size_px,
                    style.axis_label_font.color,
                    TextHAlign::Center,
                )
                .with_bold(style.axis_label_font.bold)
                .with_rotation(TextRotation::CounterClockwise90),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::AxisDescriber;
    use crate::api::{AxisStyle, BarChart, BarChartStyle};
    use crate::core::{PlotArea, Series, Viewport};
    use crate::render::{CanvasLayerKind, HeuristicTextMeasurer, RenderFrame, TextHAlign};

    #[test]
    fn unbound_describer_has_no_ticks_and_no_tick_width() {
        let describer = AxisDescriber::new(AxisStyle::default()).expect("describer");
        assert!(describer.ticks().is_empty());
        let margins = describer.margins(&HeuristicTextMeasurer::default());
        assert_eq!(margins.left, 80.0);
    }

    #[test]
    fn bind_mirrors_chart_ticks() {
        let chart = BarChart::new(
            BarChartStyle::default(),
            Series::new(vec![20.0, 50.0, 80.0]).expect("series"),
        )
        .expect("chart");
        let describer = AxisDescriber::default().bind(&chart).expect("bind");

        assert_eq!(describer.ticks().x_labels, vec!["1", "2", "3"]);
        assert_eq!(describer.ticks().y_labels.len(), 11);
        assert_eq!(describer.ticks().y_labels[0], "20");
        assert_eq!(describer.ticks().y_labels[1], "26");
        assert_eq!(describer.ticks().y_labels[10], "80");
    }

    #[test]
    fn unbound_x_ticks_are_spread_by_index() {
        let chart = BarChart::new(
            BarChartStyle::default(),
            Series::new(vec![1.0, 2.0, 3.0, 4.0]).expect("series"),
        )
        .expect("chart");
        let describer = AxisDescriber::default().bind(&chart).expect("bind");
        let area = PlotArea::new(100.0, 90.0, 400.0, 300.0);
        let mut frame = RenderFrame::new(Viewport::new(600, 500));
        describer
            .build_frame_into(&mut frame, Viewport::new(600, 500), area, None)
            .expect("frame");

        let texts = &frame.layer(CanvasLayerKind::Axis).expect("axis").texts;
        let xs: Vec<f64> = texts
            .iter()
            .filter(|text| text.h_align == TextHAlign::Left)
            .map(|text| text.x)
            .collect();
        assert_eq!(xs, vec![100.0, 200.0, 300.0, 400.0]);
    }
}
