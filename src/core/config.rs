use serde::{Deserialize, Serialize};

use crate::core::animation::Easing;
use crate::core::color::Rgb8;
use crate::error::{ChartError, ChartResult};

pub const MIN_CHART_WIDTH: f64 = 100.0;
pub const MIN_CHART_HEIGHT: f64 = 100.0;
pub const MAX_AXIS_STROKE_WIDTH: f64 = 10.0;

/// Percentage by which the default hover color darkens `bar_color`.
pub const DEFAULT_HOVER_DARKEN_PERCENT: f64 = 20.0;

/// Chart configuration.
///
/// Every field is independent and defaulted, so hosts may deserialize any
/// subset. Values are clamped into safe bounds by [`ChartConfig::normalized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub bar_color: Rgb8,
    pub bar_hover_color: Option<Rgb8>,
    pub axis_stroke_color: Rgb8,
    pub stroke_width_axe: f64,
    /// Dash pattern for axis lines; empty means solid.
    pub axis_dash_pattern: Vec<f64>,
    pub number_shown_columns: i64,
    pub initial_value: i64,
    #[serde(rename = "paddingXaxis")]
    pub padding_x_axis: f64,
    #[serde(rename = "paddingYaxis")]
    pub padding_y_axis: f64,
    pub bars_spacing: f64,
    #[serde(rename = "showXaxis")]
    pub show_x_axis: bool,
    #[serde(rename = "showYaxis")]
    pub show_y_axis: bool,
    pub x_axis_label_show: bool,
    pub y_axis_label_show: bool,
    pub ticks_x_shown: bool,
    pub show_labels_tick_x: bool,
    pub animated: bool,
    pub easing: Easing,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub label_font_size: f64,
    pub tick_label_font_size: f64,
    pub label_color: Rgb8,
    pub tooltip_fill: Rgb8,
    pub tooltip_text_color: Rgb8,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 300.0,
            bar_color: Rgb8::new(0x4f, 0x46, 0xe5),
            bar_hover_color: None,
            axis_stroke_color: Rgb8::new(0x33, 0x41, 0x55),
            stroke_width_axe: 2.0,
            axis_dash_pattern: Vec::new(),
            number_shown_columns: 10,
            initial_value: 0,
            padding_x_axis: 10.0,
            padding_y_axis: 20.0,
            bars_spacing: 4.0,
            show_x_axis: true,
            show_y_axis: true,
            x_axis_label_show: true,
            y_axis_label_show: true,
            ticks_x_shown: true,
            show_labels_tick_x: true,
            animated: true,
            easing: Easing::EaseOut,
            x_axis_label: "X axis".to_owned(),
            y_axis_label: "Y axis".to_owned(),
            label_font_size: 12.0,
            tick_label_font_size: 10.0,
            label_color: Rgb8::new(0x1e, 0x29, 0x3b),
            tooltip_fill: Rgb8::new(0x0f, 0x17, 0x2a),
            tooltip_text_color: Rgb8::new(0xff, 0xff, 0xff),
        }
    }
}

impl ChartConfig {
    /// Returns a copy clamped into safe bounds.
    ///
    /// Only `width`, `height` and `stroke_width_axe` are touched; every other
    /// field passes through as given.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut config = self.clone();
        config.width = config.width.max(MIN_CHART_WIDTH);
        config.height = config.height.max(MIN_CHART_HEIGHT);
        config.stroke_width_axe = config.stroke_width_axe.min(MAX_AXIS_STROKE_WIDTH);
        config
    }

    /// Fill used for a hovered bar.
    #[must_use]
    pub fn hover_color(&self) -> Rgb8 {
        self.bar_hover_color
            .unwrap_or_else(|| self.bar_color.darken(DEFAULT_HOVER_DARKEN_PERCENT))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config json: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config json: {e}"))
        })
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_window(mut self, initial_value: i64, number_shown_columns: i64) -> Self {
        self.initial_value = initial_value;
        self.number_shown_columns = number_shown_columns;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding_x_axis: f64, padding_y_axis: f64) -> Self {
        self.padding_x_axis = padding_x_axis;
        self.padding_y_axis = padding_y_axis;
        self
    }

    #[must_use]
    pub fn with_bars_spacing(mut self, bars_spacing: f64) -> Self {
        self.bars_spacing = bars_spacing;
        self
    }

    #[must_use]
    pub fn with_stroke_width_axe(mut self, stroke_width_axe: f64) -> Self {
        self.stroke_width_axe = stroke_width_axe;
        self
    }

    #[must_use]
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, x_axis_label: &str, y_axis_label: &str) -> Self {
        self.x_axis_label = x_axis_label.to_owned();
        self.y_axis_label = y_axis_label.to_owned();
        self
    }

    /// Toggles every axis, tick and label feature at once.
    #[must_use]
    pub fn with_decorations(mut self, shown: bool) -> Self {
        self.show_x_axis = shown;
        self.show_y_axis = shown;
        self.x_axis_label_show = shown;
        self.y_axis_label_show = shown;
        self.ticks_x_shown = shown;
        self.show_labels_tick_x = shown;
        self
    }
}
