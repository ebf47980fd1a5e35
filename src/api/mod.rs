mod axis_describer;
mod axis_style;
mod bar_chart;
mod bar_chart_style;
mod chart_view;
mod config;

pub use axis_describer::AxisDescriber;
pub use axis_style::{
    AxisStyle, DEFAULT_AXIS_LABEL_FONT_SIZE_PX, DEFAULT_TICK_FONT_SIZE_PX,
    DEFAULT_TITLE_FONT_SIZE_PX, FontStyle,
};
pub use bar_chart::{BarChart, BarGeometryProvider};
pub use bar_chart_style::{
    BAR_SHADOW_BLEND_RATIO, BarChartStyle, DEFAULT_BAR_SPACING_FRACTION,
    DEFAULT_BAR_WIDTH_FRACTION, GRID_STROKE_WIDTH_PX,
};
pub use chart_view::{ChartView, ViewLayout};
pub use config::ChartConfig;
