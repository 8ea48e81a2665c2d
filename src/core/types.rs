use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One labelled sample. Position in the input sequence is its display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn from_decimal(label: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        let label = label.into();
        let value = value.to_f64().ok_or_else(|| {
            ChartError::InvalidData(format!("value of `{label}` cannot be represented as f64"))
        })?;
        Ok(Self { label, value })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "value of `{}` must be a finite number",
                self.label
            )));
        }
        Ok(())
    }
}

/// Size of the drawing surface required by a layout, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasExtent {
    pub width: f64,
    pub height: f64,
}

impl CanvasExtent {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn contains_point(self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// Text extents reported back by the rendering backend.
///
/// All channels start at zero and stay zero until the backend measured the
/// painted labels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasuredExtents {
    pub y_label_width: f64,
    pub x_label_height: f64,
    pub tick_label_max_height: f64,
}

impl MeasuredExtents {
    pub const ZERO: Self = Self {
        y_label_width: 0.0,
        x_label_height: 0.0,
        tick_label_max_height: 0.0,
    };

    #[must_use]
    pub fn new(y_label_width: f64, x_label_height: f64, tick_label_max_height: f64) -> Self {
        Self {
            y_label_width: sanitize_extent(y_label_width),
            x_label_height: sanitize_extent(x_label_height),
            tick_label_max_height: sanitize_extent(tick_label_max_height),
        }
    }

    #[must_use]
    pub fn is_unmeasured(self) -> bool {
        self == Self::ZERO
    }
}

/// Negative or non-finite measurements collapse to zero.
#[must_use]
pub fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
