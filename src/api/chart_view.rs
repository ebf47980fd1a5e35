use tracing::{debug, trace, warn};

use crate::core::{AxisMargins, BarLayout, PlotArea, Series, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, TextMeasurer};

use super::{AxisDescriber, AxisStyle, BarChart, BarGeometryProvider, ChartConfig};

/// Margins, plot area and bar geometry resolved for one viewport size.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewLayout {
    pub viewport: Viewport,
    pub margins: AxisMargins,
    pub plot_area: PlotArea,
    pub bar_layout: Option<BarLayout>,
}

/// Axis describer container with an optional nested bar chart.
///
/// Each update returns a new view. Replacing the data goes through the bound
/// chart and re-derives the describer's tick cache in the same step.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    viewport: Viewport,
    describer: AxisDescriber,
    chart: Option<BarChart>,
}

impl ChartView {
    pub fn new(viewport: Viewport, axis_style: AxisStyle) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            viewport,
            describer: AxisDescriber::new(axis_style)?,
            chart: None,
        })
    }

    /// Builds a view with a chart styled by `config` and bound to `series`.
    pub fn from_config(viewport: Viewport, config: &ChartConfig, series: Series) -> ChartResult<Self> {
        let chart = BarChart::new(config.chart, series)?;
        Self::new(viewport, config.axis.clone())?.with_chart(chart)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn describer(&self) -> &AxisDescriber {
        &self.describer
    }

    #[must_use]
    pub fn chart(&self) -> Option<&BarChart> {
        self.chart.as_ref()
    }

    /// Nests `chart` and mirrors its ticks.
    pub fn with_chart(&self, chart: BarChart) -> ChartResult<Self> {
        let describer = self.describer.bind(&chart)?;
        Ok(Self {
            viewport: self.viewport,
            describer,
            chart: Some(chart),
        })
    }

    /// Replaces the bound chart's series.
    ///
    /// Fails with `IllegalState` when no chart is nested yet.
    pub fn with_data(&self, series: Series) -> ChartResult<Self> {
        let Some(chart) = &self.chart else {
            return Err(ChartError::IllegalState(
                "data update requires a bound chart".to_owned(),
            ));
        };
        debug!(len = series.len(), "replace chart view data");
        self.with_chart(chart.with_series(series)?)
    }

    pub fn with_axis_style(&self, style: AxisStyle) -> ChartResult<Self> {
        Ok(Self {
            viewport: self.viewport,
            describer: self.describer.with_style(style)?,
            chart: self.chart.clone(),
        })
    }

    pub fn with_viewport(&self, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        debug!(width = viewport.width, height = viewport.height, "resize chart view");
        Ok(Self {
            viewport,
            describer: self.describer.clone(),
            chart: self.chart.clone(),
        })
    }

    pub fn layout(&self, measurer: &dyn TextMeasurer) -> ChartResult<ViewLayout> {
        let margins = self.describer.margins(measurer);
        let plot_area = margins.plot_area(self.viewport)?;
        let bar_layout = self
            .chart
            .as_ref()
            .map(|chart| chart.bar_layout(plot_area.width))
            .transpose()?;
        debug!(
            left = margins.left,
            title = margins.title,
            bottom = margins.bottom,
            plot_width = plot_area.width,
            plot_height = plot_area.height,
            "laid out chart view"
        );
        Ok(ViewLayout {
            viewport: self.viewport,
            margins,
            plot_area,
            bar_layout,
        })
    }

    /// Builds the full frame: describer background, nested chart, then axis text.
    pub fn build_frame(&self, measurer: &dyn TextMeasurer) -> ChartResult<RenderFrame> {
        let layout = self.layout(measurer).inspect_err(|err| {
            if matches!(err, ChartError::InvalidViewport { .. }) {
                warn!(
                    width = self.viewport.width,
                    height = self.viewport.height,
                    "viewport too small for axis margins; draw pass aborted"
                );
            }
        })?;

        let mut frame = RenderFrame::new(self.viewport);
        let provider = self.chart.as_ref().map(|chart| chart as &dyn BarGeometryProvider);
        self.describer
            .build_frame_into(&mut frame, self.viewport, layout.plot_area, provider)?;
        if let Some(chart) = &self.chart {
            chart.build_frame_into(&mut frame, layout.plot_area)?;
        }
        Ok(frame)
    }

    /// Redraws the view and its nested chart through `renderer`.
    pub fn render<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        measurer: &dyn TextMeasurer,
    ) -> ChartResult<()> {
        let frame = self.build_frame(measurer)?;
        let stats = frame.stats();
        trace!(
            rects = stats.rects,
            circles = stats.circles,
            lines = stats.lines,
            texts = stats.texts,
            "render chart view"
        );
        renderer.render(&frame)
    }
}
