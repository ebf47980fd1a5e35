mod frame;
mod null_renderer;
mod primitives;
mod text_measure;

pub use frame::{CanvasLayerKind, FrameStats, LayerPrimitives, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextRotation,
};
pub use text_measure::{HeuristicTextMeasurer, TextMeasurer};

use crate::error::ChartResult;

/// Drawing surface contract implemented by rendering backends.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from chart geometry and widget state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderer};
