//! plotcraft: bar chart geometry and axis layout.
//!
//! `core` holds the pure layout math (bar placement, bounds, margins, ticks),
//! `render` the drawing-surface contract and backends, and `api` the
//! immutable chart / axis-describer snapshots that turn layout into frames.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{AxisDescriber, BarChart, BarChartStyle, ChartConfig, ChartView};
pub use error::{ChartError, ChartResult};
