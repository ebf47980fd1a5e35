use tracing::{debug, trace};

use crate::core::{
    BarGeometry, BarLayout, EffectiveBounds, PillGeometry, PlotArea, Series, compute_bar_layout,
};
use crate::error::ChartResult;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame,
};

use super::{BarChartStyle, GRID_STROKE_WIDTH_PX};

/// Read-only geometry capability a container borrows from its nested chart.
///
/// The axis describer uses it to derive ticks and to center category labels
/// under bars without owning the chart.
pub trait BarGeometryProvider {
    fn series(&self) -> &Series;

    fn effective_bounds(&self) -> ChartResult<EffectiveBounds>;

    fn bar_layout(&self, area_width_px: f64) -> ChartResult<BarLayout>;
}

/// Immutable bar chart snapshot: one series plus its style.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    style: BarChartStyle,
    series: Series,
}

impl BarChart {
    /// Fails when the style is invalid or the bounds it resolves to are degenerate.
    pub fn new(style: BarChartStyle, series: Series) -> ChartResult<Self> {
        let chart = Self {
            style: style.validate()?,
            series,
        };
        chart.effective_bounds()?;
        Ok(chart)
    }

    #[must_use]
    pub fn style(&self) -> BarChartStyle {
        self.style
    }

    /// Returns a snapshot with `series` replacing the current values.
    pub fn with_series(&self, series: Series) -> ChartResult<Self> {
        debug!(len = series.len(), "replace bar chart series");
        Self::new(self.style, series)
    }

    pub fn with_style(&self, style: BarChartStyle) -> ChartResult<Self> {
        debug!(?style, "replace bar chart style");
        Self::new(style, self.series.clone())
    }

    /// Appends bars into `frame` inside `area`.
    ///
    /// Paint order: background, gap gridlines, full-height shadow pills for
    /// every bar, then value pills for bars above the lower bound.
    pub fn build_frame_into(&self, frame: &mut RenderFrame, area: PlotArea) -> ChartResult<()> {
        let layout = self.bar_layout(area.width)?;
        let style = self.style;

        if !style.background_color.is_transparent() {
            frame.push_rect(
                CanvasLayerKind::Background,
                RectPrimitive::new(
                    area.left,
                    area.top,
                    area.width,
                    area.height,
                    style.background_color,
                ),
            );
        }

        if !style.grid_color.is_transparent() {
            for x in layout.gridline_positions() {
                frame.push_line(
                    CanvasLayerKind::Grid,
                    LinePrimitive::new(
                        area.left + x,
                        area.top,
                        area.left + x,
                        area.bottom(),
                        GRID_STROKE_WIDTH_PX,
                        style.grid_color,
                    ),
                );
            }
        }

        let shadow_color = style.effective_bar_shadow_color();
        for bar in layout.bars() {
            push_pill(frame, CanvasLayerKind::BarShadow, area, *bar, 1.0, shadow_color);
        }

        let mut filled = 0_usize;
        for bar in layout.bars().iter().filter(|bar| bar.is_filled()) {
            push_pill(
                frame,
                CanvasLayerKind::Bar,
                area,
                *bar,
                bar.height_fraction,
                style.bar_color,
            );
            filled += 1;
        }

        trace!(
            bars = layout.bars().len(),
            filled,
            bar_width_px = layout.bar_width_px(),
            "built bar chart frame"
        );
        Ok(())
    }
}

fn push_pill(
    frame: &mut RenderFrame,
    kind: CanvasLayerKind,
    area: PlotArea,
    bar: BarGeometry,
    height_fraction: f64,
    color: Color,
) {
    let pill = PillGeometry::new(bar.left_x, bar.width, height_fraction, area.height);
    frame.push_rect(
        kind,
        RectPrimitive::new(
            area.left + pill.rect_left,
            area.top + pill.rect_top,
            pill.rect_width,
            pill.rect_height,
            color,
        ),
    );
    frame.push_circle(
        kind,
        CirclePrimitive::new(
            area.left + pill.cap_center_x,
            area.top + pill.cap_center_y,
            pill.cap_radius,
            color,
        ),
    );
}

impl BarGeometryProvider for BarChart {
    fn series(&self) -> &Series {
        &self.series
    }

    fn effective_bounds(&self) -> ChartResult<EffectiveBounds> {
        EffectiveBounds::resolve(&self.series, self.style.min_value, self.style.max_value)
    }

    fn bar_layout(&self, area_width_px: f64) -> ChartResult<BarLayout> {
        compute_bar_layout(
            &self.series,
            area_width_px,
            self.style.fractions()?,
            self.effective_bounds()?,
        )
    }
}
