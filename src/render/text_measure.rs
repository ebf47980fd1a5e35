/// Text metrics source used to size axis margins before drawing.
pub trait TextMeasurer {
    /// Advance width of `text` in pixels at `font_size_px`.
    fn text_width(&self, text: &str, font_size_px: f64) -> f64;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn text_width(&self, text: &str, font_size_px: f64) -> f64 {
        (**self).text_width(text, font_size_px)
    }
}

/// Fixed-advance estimate: every glyph is `advance_em` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicTextMeasurer {
    pub advance_em: f64,
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn text_width(&self, text: &str, font_size_px: f64) -> f64 {
        self.advance_em * font_size_px * text.chars().count() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::{HeuristicTextMeasurer, TextMeasurer};

    #[test]
    fn width_scales_with_glyph_count_and_size() {
        let measurer = HeuristicTextMeasurer { advance_em: 0.5 };
        assert_eq!(measurer.text_width("80", 30.0), 30.0);
        assert_eq!(measurer.text_width("", 30.0), 0.0);
    }
}
