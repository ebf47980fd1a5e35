pub mod axis_layout;
pub mod bar_layout;
pub mod bounds;
pub mod series;
pub mod types;

pub use axis_layout::{
    AxisMargins, AxisTicks, XTickAnchor, XTickAnchorKind, compute_margins, format_tick_value,
    tick_label_decimals, x_tick_anchors,
};
pub use bar_layout::{BarFractions, BarGeometry, BarLayout, PillGeometry, compute_bar_layout};
pub use bounds::{EffectiveBounds, ValueBound};
pub use series::Series;
pub use types::{PlotArea, Viewport};
