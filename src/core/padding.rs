use serde::{Deserialize, Serialize};

use crate::core::config::ChartConfig;
use crate::core::types::{MeasuredExtents, sanitize_extent};

/// Space reserved for measured label text, on top of the configured padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectivePadding {
    /// Horizontal space left of the plot taken by the rotated Y-axis label.
    pub effective_padding_y: f64,
    /// Vertical space below the plot taken by tick labels and the X-axis label.
    pub effective_padding_x: f64,
    /// Tick-label share of `effective_padding_x`.
    pub tick_labels_height: f64,
}

/// Combines the label toggles with the latest measured extents.
#[must_use]
pub fn resolve_padding(config: &ChartConfig, extents: MeasuredExtents) -> EffectivePadding {
    let effective_padding_y = if config.y_axis_label_show {
        sanitize_extent(extents.y_label_width)
    } else {
        0.0
    };
    let x_label = if config.x_axis_label_show {
        sanitize_extent(extents.x_label_height)
    } else {
        0.0
    };
    let tick_labels = if config.show_labels_tick_x {
        sanitize_extent(extents.tick_label_max_height)
    } else {
        0.0
    };

    EffectivePadding {
        effective_padding_y,
        effective_padding_x: x_label + tick_labels,
        tick_labels_height: tick_labels,
    }
}
