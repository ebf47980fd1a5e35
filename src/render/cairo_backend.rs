use std::f64::consts::{FRAC_PI_2, TAU};
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::{FontDescription, Layout, Weight};

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, FrameStats, RenderFrame, Renderer, TextHAlign, TextMeasurer, TextPrimitive,
    TextRotation,
};

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a toolkit draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango renderer backend.
///
/// Draws either into its own offscreen image surface (`Renderer::render`) or
/// into a caller-owned context (`CairoContextRenderer`). It also measures text
/// with the same Pango font setup it draws with.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    measure_context: Context,
    clear_color: Color,
    last_stats: FrameStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidInput(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let measure_context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo measuring context", err))?;
        Ok(Self {
            surface,
            measure_context,
            clear_color: Color::TRANSPARENT,
            last_stats: FrameStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            ChartError::InvalidInput(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            ChartError::InvalidInput(format!("failed to write png `{}`: {err}", path.display()))
        })
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        context.save().map_err(|err| map_backend_error("failed to save context", err))?;
        context.set_operator(cairo::Operator::Source);
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;

        for layer in &frame.layers {
            for rect in &layer.rects {
                apply_color(context, rect.fill_color);
                context.rectangle(rect.x, rect.y, rect.width, rect.height);
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            }

            for circle in &layer.circles {
                apply_color(context, circle.fill_color);
                context.new_sub_path();
                context.arc(circle.center_x, circle.center_y, circle.radius, 0.0, TAU);
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill circle", err))?;
            }

            for line in &layer.lines {
                apply_color(context, line.color);
                context.set_line_width(line.stroke_width);
                context.move_to(line.x1, line.y1);
                context.line_to(line.x2, line.y2);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke line", err))?;
            }

            for text in &layer.texts {
                draw_text(context, text)?;
            }
        }

        self.last_stats = frame.stats();
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

impl TextMeasurer for CairoRenderer {
    fn text_width(&self, text: &str, font_size_px: f64) -> f64 {
        let layout = text_layout(&self.measure_context, text, font_size_px, false);
        f64::from(layout.pixel_size().0)
    }
}

fn text_layout(context: &Context, text: &str, font_size_px: f64, bold: bool) -> Layout {
    let layout = pangocairo::functions::create_layout(context);
    let mut font = FontDescription::new();
    font.set_family("Sans");
    font.set_absolute_size(font_size_px * f64::from(pango::SCALE));
    if bold {
        font.set_weight(Weight::Bold);
    }
    layout.set_font_description(Some(&font));
    layout.set_text(text);
    layout
}

fn draw_text(context: &Context, text: &TextPrimitive) -> ChartResult<()> {
    let layout = text_layout(context, &text.text, text.font_size_px, text.bold);
    let (text_width, _) = layout.pixel_size();
    let text_width = f64::from(text_width);
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

    context.save().map_err(|err| map_backend_error("failed to save context", err))?;
    context.translate(text.x, text.y);
    if text.rotation == TextRotation::CounterClockwise90 {
        context.rotate(-FRAC_PI_2);
    }
    let start_x = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -text_width / 2.0,
        TextHAlign::Right => -text_width,
    };
    apply_color(context, text.color);
    context.move_to(start_x, -baseline);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidInput(format!("{prefix}: {err}"))
}
