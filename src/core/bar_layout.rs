use serde::{Deserialize, Serialize};

use crate::core::{EffectiveBounds, Series};
use crate::error::{ChartError, ChartResult};

/// Relative bar width and inter-bar spacing.
///
/// Only the ratio between the two matters: the layout normalizes them so the
/// bars and gaps together fill the whole area width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarFractions {
    pub width: f64,
    pub spacing: f64,
}

impl BarFractions {
    pub fn new(width: f64, spacing: f64) -> ChartResult<Self> {
        let fractions = Self { width, spacing };
        fractions.validate()?;
        Ok(fractions)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "bar width fraction must be finite and >= 0, got {}",
                self.width
            )));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "bar spacing fraction must be finite and >= 0, got {}",
                self.spacing
            )));
        }
        Ok(())
    }

    /// `n * width + (n - 1) * spacing`, the fraction sum spread over the area.
    #[must_use]
    pub fn area_correction(self, bar_count: usize) -> f64 {
        let n = bar_count as f64;
        n * self.width + (n - 1.0) * self.spacing
    }
}

/// Horizontal placement and relative height of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub left_x: f64,
    pub width: f64,
    /// Height relative to the area, clamped to `[0, 1]`.
    pub height_fraction: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn center_x(self) -> f64 {
        self.left_x + self.width * 0.5
    }

    /// Bars sitting exactly on the lower bound are not filled.
    #[must_use]
    pub fn is_filled(self) -> bool {
        self.height_fraction != 0.0
    }
}

/// Flat-bottomed bar with a semicircular cap, in area-local pixels.
///
/// The rectangle spans from the baseline up to the cap center; the cap circle
/// adds `radius` above that, so a full-height pill touches the area top. The
/// radius is half the bar width, capped at the area height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillGeometry {
    pub rect_left: f64,
    pub rect_top: f64,
    pub rect_width: f64,
    pub rect_height: f64,
    pub cap_center_x: f64,
    pub cap_center_y: f64,
    pub cap_radius: f64,
}

impl PillGeometry {
    #[must_use]
    pub fn new(left_x: f64, width: f64, height_fraction: f64, area_height_px: f64) -> Self {
        let radius = (width * 0.5).min(area_height_px.max(0.0));
        let drawn_height = height_fraction.clamp(0.0, 1.0) * (area_height_px - radius).max(0.0);
        let top = area_height_px - drawn_height;
        Self {
            rect_left: left_x,
            rect_top: top,
            rect_width: width,
            rect_height: drawn_height,
            cap_center_x: left_x + width * 0.5,
            cap_center_y: top,
            cap_radius: radius,
        }
    }

    /// Topmost pixel reached by the cap.
    #[must_use]
    pub fn top(self) -> f64 {
        self.cap_center_y - self.cap_radius
    }
}

/// Pixel-space layout of a whole series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    bars: Vec<BarGeometry>,
    bar_width_px: f64,
    bar_spacing_px: f64,
    area_width_px: f64,
}

impl BarLayout {
    #[must_use]
    pub fn bars(&self) -> &[BarGeometry] {
        &self.bars
    }

    #[must_use]
    pub fn bar_width_px(&self) -> f64 {
        self.bar_width_px
    }

    #[must_use]
    pub fn bar_spacing_px(&self) -> f64 {
        self.bar_spacing_px
    }

    #[must_use]
    pub fn area_width_px(&self) -> f64 {
        self.area_width_px
    }

    /// Horizontal distance between the left edges of consecutive bars.
    #[must_use]
    pub fn bar_stride_px(&self) -> f64 {
        self.bar_width_px + self.bar_spacing_px
    }

    /// Vertical gridlines centered in each gap between two bars.
    #[must_use]
    pub fn gridline_positions(&self) -> Vec<f64> {
        let stride = self.bar_stride_px();
        (1..self.bars.len())
            .map(|i| i as f64 * stride - self.bar_spacing_px * 0.5)
            .collect()
    }

    /// Pill for bar `index` drawn at `height_fraction` inside an area of `area_height_px`.
    #[must_use]
    pub fn pill(&self, index: usize, height_fraction: f64, area_height_px: f64) -> Option<PillGeometry> {
        self.bars
            .get(index)
            .map(|bar| PillGeometry::new(bar.left_x, bar.width, height_fraction, area_height_px))
    }
}

/// Computes bar positions, widths and height fractions for `series`.
///
/// Bars and the `n - 1` gaps between them exactly fill `area_width_px`.
pub fn compute_bar_layout(
    series: &Series,
    area_width_px: f64,
    fractions: BarFractions,
    bounds: EffectiveBounds,
) -> ChartResult<BarLayout> {
    fractions.validate()?;
    if series.is_empty() {
        return Err(ChartError::InvalidInput(
            "series must contain at least one value".to_owned(),
        ));
    }
    if !area_width_px.is_finite() || area_width_px < 0.0 {
        return Err(ChartError::InvalidInput(format!(
            "area width must be finite and >= 0, got {area_width_px}"
        )));
    }

    let correction = fractions.area_correction(series.len());
    if correction <= 0.0 {
        return Err(ChartError::InvalidInput(
            "bar width and spacing fractions leave no drawable area".to_owned(),
        ));
    }

    let bar_width_px = area_width_px * fractions.width / correction;
    let bar_spacing_px = area_width_px * fractions.spacing / correction;
    let stride = bar_width_px + bar_spacing_px;

    let bars = series
        .values()
        .iter()
        .enumerate()
        .map(|(i, &value)| BarGeometry {
            left_x: i as f64 * stride,
            width: bar_width_px,
            height_fraction: bounds.height_fraction(value).clamp(0.0, 1.0),
        })
        .collect();

    Ok(BarLayout {
        bars,
        bar_width_px,
        bar_spacing_px,
        area_width_px,
    })
}

#[cfg(test)]
mod tests {
    use super::{BarFractions, PillGeometry, compute_bar_layout};
    use crate::core::{EffectiveBounds, Series};
    use crate::error::ChartError;

    #[test]
    fn single_bar_fills_whole_area() {
        let series = Series::new(vec![3.0]).expect("series");
        let bounds = EffectiveBounds::new(0.0, 10.0).expect("bounds");
        let fractions = BarFractions::new(0.1, 0.03).expect("fractions");
        let layout = compute_bar_layout(&series, 400.0, fractions, bounds).expect("layout");

        assert_eq!(layout.bars().len(), 1);
        assert!((layout.bar_width_px() - 400.0).abs() <= 1e-9);
        assert!(layout.gridline_positions().is_empty());
    }

    #[test]
    fn zero_width_fraction_with_one_bar_is_rejected() {
        let series = Series::new(vec![3.0]).expect("series");
        let bounds = EffectiveBounds::new(0.0, 10.0).expect("bounds");
        let fractions = BarFractions::new(0.0, 0.5).expect("fractions");
        let err = compute_bar_layout(&series, 400.0, fractions, bounds)
            .expect_err("no drawable area");
        assert!(matches!(err, ChartError::InvalidInput(_)));
    }

    #[test]
    fn gridlines_sit_in_gap_centers() {
        let series = Series::new(vec![1.0, 2.0, 3.0]).expect("series");
        let bounds = EffectiveBounds::new(0.0, 3.0).expect("bounds");
        // width 4, spacing 1 over 14 units -> 200px bars, 50px gaps on 700px.
        let fractions = BarFractions::new(4.0, 1.0).expect("fractions");
        let layout = compute_bar_layout(&series, 700.0, fractions, bounds).expect("layout");

        let grid = layout.gridline_positions();
        assert_eq!(grid.len(), 2);
        assert!((grid[0] - 225.0).abs() <= 1e-9);
        assert!((grid[1] - 475.0).abs() <= 1e-9);
    }

    #[test]
    fn full_height_pill_touches_area_top() {
        let pill = PillGeometry::new(10.0, 20.0, 1.0, 300.0);
        assert!((pill.cap_radius - 10.0).abs() <= 1e-9);
        assert!((pill.rect_top - 10.0).abs() <= 1e-9);
        assert!(pill.top().abs() <= 1e-9);
        assert!((pill.rect_top + pill.rect_height - 300.0).abs() <= 1e-9);
    }

    #[test]
    fn wide_bar_cap_stays_inside_short_area() {
        let pill = PillGeometry::new(0.0, 400.0, 1.0, 100.0);
        assert!(pill.top() >= 0.0);
        assert_eq!(pill.cap_radius, 100.0);
        assert_eq!(pill.cap_center_x, 200.0);
        assert!((pill.rect_top + pill.rect_height - 100.0).abs() <= 1e-9);

        let half = PillGeometry::new(0.0, 400.0, 0.5, 100.0);
        assert!(half.top() >= 0.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let series = Series::new(vec![-5.0, 50.0, 500.0]).expect("series");
        let bounds = EffectiveBounds::new(0.0, 100.0).expect("bounds");
        let fractions = BarFractions::new(0.1, 0.03).expect("fractions");
        let layout = compute_bar_layout(&series, 300.0, fractions, bounds).expect("layout");

        let fractions: Vec<f64> = layout.bars().iter().map(|b| b.height_fraction).collect();
        assert_eq!(fractions, vec![0.0, 0.5, 1.0]);
        assert!(!layout.bars()[0].is_filled());
    }
}
