use plotcraft::ChartError;
use plotcraft::api::{AxisStyle, BarChart, BarChartStyle, ChartView};
use plotcraft::core::{PlotArea, Series, Viewport};
use plotcraft::render::{
    CanvasLayerKind, HeuristicTextMeasurer, NullRenderer, TextHAlign, TextMeasurer, TextRotation,
};

/// Every glyph is 10px wide regardless of font size.
struct FixedWidthMeasurer;

impl TextMeasurer for FixedWidthMeasurer {
    fn text_width(&self, text: &str, _font_size_px: f64) -> f64 {
        10.0 * text.chars().count() as f64
    }
}

fn sample_view() -> ChartView {
    let chart = BarChart::new(
        BarChartStyle::default(),
        Series::new(vec![20.0, 50.0, 80.0]).expect("series"),
    )
    .expect("chart");
    ChartView::new(Viewport::new(1000, 800), AxisStyle::default())
        .expect("view")
        .with_chart(chart)
        .expect("bind")
}

#[test]
fn margins_reserve_title_axis_and_widest_tick() {
    let layout = sample_view().layout(&FixedWidthMeasurer).expect("layout");

    // Widest value label is two glyphs ("20".."80").
    assert_eq!(layout.margins.title, 90.0);
    assert_eq!(layout.margins.left, 100.0);
    assert_eq!(layout.margins.bottom, 110.0);
    assert_eq!(layout.plot_area, PlotArea::new(100.0, 90.0, 800.0, 600.0));
}

#[test]
fn chart_bars_are_offset_into_plot_area() {
    let view = sample_view();
    let layout = view.layout(&FixedWidthMeasurer).expect("layout");
    let frame = view.build_frame(&FixedWidthMeasurer).expect("frame");

    let shadows = frame.layer(CanvasLayerKind::BarShadow).expect("shadow");
    let first = shadows.rects[0];
    assert_eq!(first.x, layout.plot_area.left);
    assert!((first.y + first.height - layout.plot_area.bottom()).abs() <= 1e-9);

    let cap = shadows.circles[0];
    assert!((cap.center_y - cap.radius - layout.plot_area.top).abs() <= 1e-9);
}

#[test]
fn value_labels_run_from_bottom_to_top_right_aligned() {
    let view = sample_view();
    let frame = view.build_frame(&FixedWidthMeasurer).expect("frame");
    let axis = frame.layer(CanvasLayerKind::Axis).expect("axis");

    let y_ticks: Vec<_> = axis
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Right)
        .collect();
    assert_eq!(y_ticks.len(), 11);
    assert_eq!(y_ticks[0].text, "20");
    assert_eq!(y_ticks[0].y, 690.0);
    assert_eq!(y_ticks[10].text, "80");
    assert_eq!(y_ticks[10].y, 90.0);
    assert!(y_ticks.iter().all(|text| text.x == 80.0));
}

#[test]
fn titles_are_anchored_around_plot() {
    let view = sample_view();
    let frame = view.build_frame(&FixedWidthMeasurer).expect("frame");
    let axis = frame.layer(CanvasLayerKind::Axis).expect("axis");

    let title = axis
        .texts
        .iter()
        .find(|text| text.text == "Unset Title")
        .expect("title");
    assert_eq!((title.x, title.y), (500.0, 70.0));
    assert!(title.bold);

    let x_label = axis
        .texts
        .iter()
        .find(|text| text.text == "X - Axis")
        .expect("x label");
    assert_eq!((x_label.x, x_label.y), (500.0, 780.0));

    let y_label = axis
        .texts
        .iter()
        .find(|text| text.text == "Y - Axis")
        .expect("y label");
    assert_eq!((y_label.x, y_label.y), (60.0, 390.0));
    assert_eq!(y_label.rotation, TextRotation::CounterClockwise90);

    let x_tick = axis
        .texts
        .iter()
        .find(|text| text.text == "1")
        .expect("first x tick");
    assert_eq!(x_tick.y, 740.0);
}

#[test]
fn resize_recomputes_plot_area_but_keeps_ticks() {
    let view = sample_view();
    let resized = view
        .with_viewport(Viewport::new(1200, 900))
        .expect("resize");
    let layout = resized.layout(&FixedWidthMeasurer).expect("layout");

    assert_eq!(layout.plot_area.width, 1000.0);
    assert_eq!(layout.plot_area.height, 700.0);
    assert_eq!(resized.describer().ticks(), view.describer().ticks());
    assert!(view.with_viewport(Viewport::new(0, 900)).is_err());
}

#[test]
fn unbound_view_renders_axis_text_only() {
    let view = ChartView::new(Viewport::new(800, 600), AxisStyle::default()).expect("view");
    let mut renderer = NullRenderer::default();
    view.render(&mut renderer, &HeuristicTextMeasurer::default())
        .expect("render");

    // Title plus both axis titles; no ticks before a chart is bound.
    assert_eq!(renderer.last_stats.texts, 3);
    assert_eq!(renderer.last_stats.circles, 0);
}

#[test]
fn data_update_before_binding_is_illegal_state() {
    let view = ChartView::new(Viewport::new(800, 600), AxisStyle::default()).expect("view");
    let err = view
        .with_data(Series::new(vec![1.0, 2.0, 3.0]).expect("series"))
        .expect_err("unbound");
    assert!(matches!(err, ChartError::IllegalState(_)));
}

#[test]
fn each_render_redraws_nested_chart_with_current_data() {
    let view = sample_view();
    let mut renderer = NullRenderer::default();
    let measurer = HeuristicTextMeasurer::default();

    view.render(&mut renderer, &measurer).expect("first render");
    let updated = view
        .with_data(Series::new(vec![5.0, 10.0, 15.0, 20.0, 25.0]).expect("series"))
        .expect("update");
    updated.render(&mut renderer, &measurer).expect("second render");

    assert_eq!(renderer.frames_rendered, 2);
    let frame = renderer.last_frame.as_ref().expect("frame");
    let shadows = frame.layer(CanvasLayerKind::BarShadow).expect("shadow");
    assert_eq!(shadows.rects.len(), 5);
    let bars = frame.layer(CanvasLayerKind::Bar).expect("bars");
    assert_eq!(bars.rects.len(), 4);
}
