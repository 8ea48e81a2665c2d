use crate::error::{ChartError, ChartResult};

/// Line height used by the estimating measurer, relative to font size.
pub const ESTIMATED_LINE_HEIGHT_RATIO: f64 = 1.2;

/// Bounding box of a rendered string, unrotated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Bounding-box query answered by the rendering backend.
pub trait TextMeasurer {
    fn measure_text(&mut self, text: &str, font_size_px: f64) -> ChartResult<TextExtent>;
}

/// Deterministic, backend-independent text metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl EstimatedTextMeasurer {
    #[must_use]
    pub fn estimate_width(text: &str, font_size_px: f64) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' | ':' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                'A'..='Z' => 0.68,
                _ => 0.58,
            }
        });
        (units * font_size_px).max(font_size_px)
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure_text(&mut self, text: &str, font_size_px: f64) -> ChartResult<TextExtent> {
        if !font_size_px.is_finite() || font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if text.is_empty() {
            return Ok(TextExtent::default());
        }
        Ok(TextExtent {
            width: Self::estimate_width(text, font_size_px),
            height: font_size_px * ESTIMATED_LINE_HEIGHT_RATIO,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{EstimatedTextMeasurer, TextMeasurer};

    #[test]
    fn estimate_grows_with_text_length() {
        let mut measurer = EstimatedTextMeasurer;
        let short = measurer.measure_text("Jan", 12.0).expect("short");
        let long = measurer.measure_text("January 2026", 12.0).expect("long");
        assert!(long.width > short.width);
        assert_eq!(short.height, long.height);
    }

    #[test]
    fn empty_text_has_no_extent() {
        let mut measurer = EstimatedTextMeasurer;
        let extent = measurer.measure_text("", 12.0).expect("empty");
        assert_eq!(extent.width, 0.0);
        assert_eq!(extent.height, 0.0);
    }

    #[test]
    fn invalid_font_size_is_rejected() {
        let mut measurer = EstimatedTextMeasurer;
        assert!(measurer.measure_text("x", 0.0).is_err());
    }
}
