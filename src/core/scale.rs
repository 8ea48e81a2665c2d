use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::windowing::VisibleSlice;
use crate::error::{ChartError, ChartResult};

/// Minimum painted width left to every bar after spacing is subtracted.
pub const MIN_VISIBLE_BAR_WIDTH: f64 = 2.0;

/// Value-to-pixel mapping for one visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarScale {
    /// Largest value among the visible points. Zero when every visible value is zero.
    pub max_value: f64,
    /// Horizontal slot per bar, spacing included.
    pub bar_width: f64,
    pub effective_spacing: f64,
}

impl BarScale {
    /// Pixel height for `value` inside a plot of `plot_height`.
    ///
    /// A non-positive `max_value` maps everything to zero; negative values
    /// never produce negative heights.
    #[must_use]
    pub fn bar_height(self, value: f64, plot_height: f64) -> f64 {
        if self.max_value > 0.0 {
            ((value / self.max_value) * plot_height).max(0.0)
        } else {
            0.0
        }
    }

    /// Share of the maximum in `[0, 1]`, used for entrance durations.
    #[must_use]
    pub fn value_ratio(self, value: f64) -> f64 {
        if self.max_value > 0.0 {
            (value / self.max_value).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Painted width of one bar.
    #[must_use]
    pub fn body_width(self) -> f64 {
        self.bar_width - self.effective_spacing
    }
}

/// Derives the bar scale from the visible window.
///
/// Fails with [`ChartError::EmptyDataset`] on an empty slice and with
/// [`ChartError::InvalidData`] when a visible value is not a finite number.
pub fn compute_scale(
    slice: &VisibleSlice<'_>,
    width: f64,
    number_shown_columns: i64,
    bars_spacing: f64,
) -> ChartResult<BarScale> {
    if slice.is_empty() || number_shown_columns <= 0 {
        return Err(ChartError::EmptyDataset);
    }
    for bar in slice.iter() {
        bar.point.validate()?;
    }

    let max_value = slice
        .iter()
        .map(|bar| OrderedFloat(bar.point.value))
        .max()
        .map(|value| value.into_inner())
        .ok_or(ChartError::EmptyDataset)?;

    let columns = usize::try_from(number_shown_columns)
        .unwrap_or(usize::MAX)
        .min(slice.len());
    let bar_width = width / columns as f64;

    Ok(BarScale {
        max_value,
        bar_width,
        effective_spacing: clamp_spacing(bars_spacing, bar_width),
    })
}

/// Clamps spacing to `[0, bar_width - 2]` so every bar keeps a visible body.
#[must_use]
pub fn clamp_spacing(bars_spacing: f64, bar_width: f64) -> f64 {
    if !bars_spacing.is_finite() {
        return 0.0;
    }
    let upper = (bar_width - MIN_VISIBLE_BAR_WIDTH).max(0.0);
    bars_spacing.clamp(0.0, upper)
}

#[cfg(test)]
mod tests {
    use super::{clamp_spacing, compute_scale};
    use crate::core::DataPoint;
    use crate::core::windowing::select_window;
    use crate::error::ChartError;

    #[test]
    fn spacing_clamp_leaves_two_pixels() {
        assert_eq!(clamp_spacing(1000.0, 100.0), 98.0);
        assert_eq!(clamp_spacing(-4.0, 100.0), 0.0);
        assert_eq!(clamp_spacing(5.0, 1.5), 0.0);
        assert_eq!(clamp_spacing(f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn max_value_comes_from_visible_window_only() {
        let data = vec![
            DataPoint::new("a", 500.0),
            DataPoint::new("b", 10.0),
            DataPoint::new("c", 30.0),
        ];
        let slice = select_window(&data, 1, 2);
        let scale = compute_scale(&slice, 200.0, 2, 0.0).expect("scale");
        assert_eq!(scale.max_value, 30.0);
        assert_eq!(scale.bar_width, 100.0);
    }

    #[test]
    fn short_window_widens_bars() {
        let data = vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)];
        let slice = select_window(&data, 0, 8);
        let scale = compute_scale(&slice, 300.0, 8, 0.0).expect("scale");
        assert_eq!(scale.bar_width, 150.0);
    }

    #[test]
    fn empty_window_is_reported() {
        let data: Vec<DataPoint> = Vec::new();
        let slice = select_window(&data, 0, 3);
        assert_eq!(
            compute_scale(&slice, 200.0, 3, 0.0),
            Err(ChartError::EmptyDataset)
        );
    }

    #[test]
    fn non_finite_value_is_malformed() {
        let data = vec![DataPoint::new("a", f64::NAN)];
        let slice = select_window(&data, 0, 1);
        let err = compute_scale(&slice, 200.0, 1, 0.0).expect_err("nan must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn all_zero_window_has_zero_max_and_zero_heights() {
        let data = vec![DataPoint::new("a", 0.0), DataPoint::new("b", 0.0)];
        let slice = select_window(&data, 0, 2);
        let scale = compute_scale(&slice, 200.0, 2, 0.0).expect("scale");
        assert_eq!(scale.max_value, 0.0);
        assert_eq!(scale.bar_height(0.0, 100.0), 0.0);
        assert_eq!(scale.value_ratio(0.0), 0.0);
    }
}
