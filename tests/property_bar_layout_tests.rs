use plotcraft::api::{AxisStyle, BarChart, BarChartStyle, ChartView};
use plotcraft::core::{
    AxisTicks, BarFractions, EffectiveBounds, Series, ValueBound, Viewport, compute_bar_layout,
};
use plotcraft::render::{CanvasLayerKind, HeuristicTextMeasurer, TextHAlign};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bars_and_gaps_fill_area_width(
        values in prop::collection::vec(0.0f64..1_000.0, 1..64),
        width_fraction in 0.001f64..5.0,
        spacing_fraction in 0.0f64..5.0,
        area_width in 1.0f64..4_000.0
    ) {
        let series = Series::new(values).expect("series");
        let fractions = BarFractions::new(width_fraction, spacing_fraction).expect("fractions");
        let bounds = EffectiveBounds::new(0.0, 1_000.0).expect("bounds");
        let layout = compute_bar_layout(&series, area_width, fractions, bounds).expect("layout");

        let n = layout.bars().len() as f64;
        let total = n * layout.bar_width_px() + (n - 1.0) * layout.bar_spacing_px();
        prop_assert!((total - area_width).abs() <= 1e-6 * area_width.max(1.0));

        let last = layout.bars()[layout.bars().len() - 1];
        prop_assert!((last.left_x + last.width - area_width).abs() <= 1e-6 * area_width.max(1.0));
    }

    #[test]
    fn auto_bounds_map_series_extremes_to_unit_range(
        values in prop::collection::vec(0.0f64..10_000.0, 2..64)
    ) {
        // Flat series have no valid bounds.
        prop_assume!(values.iter().any(|value| *value != values[0]));
        let series = Series::new(values.clone()).expect("series");
        let bounds = EffectiveBounds::resolve(&series, ValueBound::Auto, ValueBound::Auto)
            .expect("bounds");
        let fractions = BarFractions::new(0.1, 0.03).expect("fractions");
        let layout = compute_bar_layout(&series, 800.0, fractions, bounds).expect("layout");

        for (value, bar) in values.iter().zip(layout.bars()) {
            if *value == bounds.max {
                prop_assert_eq!(bar.height_fraction, 1.0);
            }
            if *value == bounds.min {
                prop_assert_eq!(bar.height_fraction, 0.0);
            }
            prop_assert!((0.0..=1.0).contains(&bar.height_fraction));
        }
    }

    #[test]
    fn value_ticks_form_arithmetic_progression(
        min in 0.0f64..1_000.0,
        span in 0.01f64..1_000.0,
        count in 1usize..32
    ) {
        let bounds = EffectiveBounds::new(min, min + span).expect("bounds");
        let ticks = AxisTicks::from_bounds(count, bounds);

        prop_assert_eq!(ticks.y_values.len(), 11);
        prop_assert_eq!(ticks.y_labels.len(), 11);
        prop_assert_eq!(ticks.x_labels.len(), count);
        prop_assert!((ticks.y_values[0] - bounds.min).abs() <= 1e-9);
        prop_assert!((ticks.y_values[10] - bounds.max).abs() <= 1e-9 * bounds.max.max(1.0));
        let step = span / 10.0;
        for pair in ticks.y_values.windows(2) {
            prop_assert!((pair[1] - pair[0] - step).abs() <= 1e-9 * span.max(1.0));
        }
    }

    #[test]
    fn small_span_value_labels_stay_distinct(
        min in 0.0f64..100.0,
        span in 1e-9f64..1e-3
    ) {
        let bounds = EffectiveBounds::new(min, min + span).expect("bounds");
        let ticks = AxisTicks::from_bounds(1, bounds);

        let parsed: Vec<f64> = ticks
            .y_labels
            .iter()
            .map(|label| label.parse::<f64>().expect("numeric label"))
            .collect();
        for pair in parsed.windows(2) {
            prop_assert!(pair[1] > pair[0], "labels {:?}", ticks.y_labels);
        }
    }

    #[test]
    fn category_labels_are_centered_under_bars(
        values in prop::collection::vec(1.0f64..100.0, 2..24),
        width in 700u32..2_400,
        height in 600u32..1_600
    ) {
        let mut values = values;
        values[0] = 0.0;
        let chart = BarChart::new(BarChartStyle::default(), Series::new(values).expect("series"))
            .expect("chart");
        let view = ChartView::new(Viewport::new(width, height), AxisStyle::default())
            .expect("view")
            .with_chart(chart)
            .expect("bind");
        let measurer = HeuristicTextMeasurer::default();
        let layout = view.layout(&measurer).expect("layout");
        let bars = layout.bar_layout.expect("bar layout");
        let frame = view.build_frame(&measurer).expect("frame");

        let axis = frame.layer(CanvasLayerKind::Axis).expect("axis layer");
        let x_ticks: Vec<_> = axis
            .texts
            .iter()
            .filter(|text| text.h_align == TextHAlign::Center && text.font_size_px == 30.0)
            .collect();
        prop_assert_eq!(x_ticks.len(), bars.bars().len());
        for (text, bar) in x_ticks.iter().zip(bars.bars()) {
            let expected = layout.plot_area.left + bar.left_x + bar.width / 2.0;
            prop_assert!((text.x - expected).abs() <= 1e-9);
        }
    }
}
