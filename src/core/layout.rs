use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::config::ChartConfig;
use crate::core::padding::{EffectivePadding, resolve_padding};
use crate::core::scale::{BarScale, compute_scale};
use crate::core::types::{CanvasExtent, DataPoint, MeasuredExtents};
use crate::core::windowing::{VisibleSlice, select_window};
use crate::error::{ChartError, ChartResult};

/// Extra horizontal room kept right of the last bar.
pub const CANVAS_RIGHT_MARGIN: f64 = 10.0;
/// Preferred tick mark length; shortened to fit inside `padding_y_axis`.
pub const TICK_LENGTH: f64 = 6.0;
/// Rotation applied to the Y-axis label (counter-clockwise, reads bottom-up).
pub const Y_AXIS_LABEL_ROTATION_DEG: f64 = -90.0;

/// Rest geometry of one visible bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarGeometry {
    /// 0-based position inside the visible window.
    pub position: usize,
    pub original_index: usize,
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width * 0.5
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisKind {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    pub kind: AxisKind,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Vertical tick mark under one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// Anchor of a label in canvas space.
///
/// `(x, y)` is the top-center of the text box before rotation; rotation is
/// applied around the anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnchor {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub rotation_deg: f64,
}

/// Complete geometry for one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartLayout {
    pub canvas: CanvasExtent,
    /// `None` when the visible window was empty.
    pub scale: Option<BarScale>,
    pub padding: EffectivePadding,
    /// Left edge of the bar area (first bar slot, spacing excluded).
    pub plot_left: f64,
    pub plot_top: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    pub bars: Vec<BarGeometry>,
    pub axes: SmallVec<[AxisLine; 2]>,
    pub ticks: Vec<TickMark>,
    pub tick_labels: Vec<TextAnchor>,
    pub x_axis_label: Option<TextAnchor>,
    pub y_axis_label: Option<TextAnchor>,
}

impl ChartLayout {
    /// Canvas-only layout used when nothing is visible.
    #[must_use]
    pub fn empty(config: &ChartConfig, padding: EffectivePadding) -> Self {
        Self {
            canvas: canvas_extent(config, padding, 0.0),
            scale: None,
            padding,
            plot_left: plot_left(config, padding),
            plot_top: config.padding_y_axis,
            plot_width: config.width,
            plot_height: config.height,
            bars: Vec::new(),
            axes: SmallVec::new(),
            ticks: Vec::new(),
            tick_labels: Vec::new(),
            x_axis_label: None,
            y_axis_label: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    #[must_use]
    pub fn bar(&self, position: usize) -> Option<&BarGeometry> {
        self.bars.get(position)
    }

    #[must_use]
    pub fn axis(&self, kind: AxisKind) -> Option<AxisLine> {
        self.axes.iter().copied().find(|axis| axis.kind == kind)
    }

    /// Y coordinate of the X-axis line center.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.plot_top + self.plot_height
    }
}

fn plot_left(config: &ChartConfig, padding: EffectivePadding) -> f64 {
    padding.effective_padding_y + config.padding_x_axis + config.stroke_width_axe
}

fn canvas_extent(config: &ChartConfig, padding: EffectivePadding, spacing: f64) -> CanvasExtent {
    CanvasExtent::new(
        config.width
            + 2.0 * config.padding_x_axis
            + config.stroke_width_axe
            + padding.effective_padding_y
            + spacing
            + CANVAS_RIGHT_MARGIN,
        config.height
            + 2.0 * config.padding_y_axis
            + config.stroke_width_axe
            + padding.effective_padding_x,
    )
}

/// Produces rest geometry for every visible bar plus axes, ticks and labels.
///
/// `config` is expected to be normalized. Fails with
/// [`ChartError::EmptyDataset`] when `slice` is empty.
pub fn compute_layout(
    slice: &VisibleSlice<'_>,
    scale: BarScale,
    padding: EffectivePadding,
    config: &ChartConfig,
) -> ChartResult<ChartLayout> {
    if slice.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    let height = config.height;
    let stroke = config.stroke_width_axe;
    let spacing = scale.effective_spacing;
    let left = plot_left(config, padding);
    let body_width = scale.body_width();
    let corner_radius = body_width.max(0.0).sqrt();

    let bars: Vec<BarGeometry> = slice
        .iter()
        .enumerate()
        .map(|(position, visible)| {
            let bar_height = scale.bar_height(visible.point.value, height);
            BarGeometry {
                position,
                original_index: visible.original_index,
                label: visible.point.label.clone(),
                value: visible.point.value,
                x: position as f64 * scale.bar_width + left + spacing,
                y: height - bar_height + config.padding_y_axis - stroke / 2.0,
                width: body_width,
                height: bar_height,
                corner_radius,
            }
        })
        .collect();

    let baseline_y = config.padding_y_axis + height;
    let axis_left = padding.effective_padding_y + config.padding_x_axis;

    let mut axes = SmallVec::new();
    if config.show_x_axis {
        axes.push(AxisLine {
            kind: AxisKind::X,
            x1: axis_left,
            y1: baseline_y,
            x2: axis_left + stroke + config.width + spacing,
            y2: baseline_y,
        });
    }
    if config.show_y_axis {
        let x = axis_left + stroke / 2.0;
        axes.push(AxisLine {
            kind: AxisKind::Y,
            x1: x,
            y1: config.padding_y_axis,
            x2: x,
            y2: baseline_y + stroke / 2.0,
        });
    }

    let tick_top = baseline_y + stroke / 2.0;
    let tick_length = TICK_LENGTH.min(config.padding_y_axis.max(0.0));
    let ticks = if config.ticks_x_shown {
        bars.iter()
            .map(|bar| TickMark {
                x: bar.center_x(),
                y_top: tick_top,
                y_bottom: tick_top + tick_length,
            })
            .collect()
    } else {
        Vec::new()
    };

    let tick_label_top = tick_top + tick_length;
    let tick_labels = if config.show_labels_tick_x {
        bars.iter()
            .map(|bar| TextAnchor {
                text: bar.label.clone(),
                x: bar.center_x(),
                y: tick_label_top,
                font_size_px: config.tick_label_font_size,
                rotation_deg: 0.0,
            })
            .collect()
    } else {
        Vec::new()
    };

    let x_axis_label = config.x_axis_label_show.then(|| {
        TextAnchor {
            text: config.x_axis_label.clone(),
            x: left + config.width / 2.0,
            y: tick_label_top + padding.tick_labels_height,
            font_size_px: config.label_font_size,
            rotation_deg: 0.0,
        }
    });

    // The rotated Y label spans half its measured width above and below its
    // anchor; keep that span on the canvas.
    let mut canvas = canvas_extent(config, padding, spacing);
    let y_axis_label = config.y_axis_label_show.then(|| {
        let half_span = padding.effective_padding_y / 2.0;
        let y = (config.padding_y_axis + height / 2.0).max(half_span);
        canvas.height = canvas.height.max(y + half_span);
        TextAnchor {
            text: config.y_axis_label.clone(),
            x: 0.0,
            y,
            font_size_px: config.label_font_size,
            rotation_deg: Y_AXIS_LABEL_ROTATION_DEG,
        }
    });

    Ok(ChartLayout {
        canvas,
        scale: Some(scale),
        padding,
        plot_left: left,
        plot_top: config.padding_y_axis,
        plot_width: config.width,
        plot_height: height,
        bars,
        axes,
        ticks,
        tick_labels,
        x_axis_label,
        y_axis_label,
    })
}

/// Full pipeline for one pass: normalize, select, scale, pad, lay out.
///
/// An empty window is recovered into [`ChartLayout::empty`]; malformed points
/// fail the call.
pub fn layout_chart(
    data: &[DataPoint],
    config: &ChartConfig,
    extents: MeasuredExtents,
) -> ChartResult<ChartLayout> {
    let config = config.normalized();
    let padding = resolve_padding(&config, extents);
    let slice = select_window(data, config.initial_value, config.number_shown_columns);

    let scale = match compute_scale(
        &slice,
        config.width,
        config.number_shown_columns,
        config.bars_spacing,
    ) {
        Ok(scale) => scale,
        Err(ChartError::EmptyDataset) => {
            warn!(
                data_len = data.len(),
                initial_value = config.initial_value,
                number_shown_columns = config.number_shown_columns,
                "visible window is empty; producing empty layout"
            );
            return Ok(ChartLayout::empty(&config, padding));
        }
        Err(err) => {
            warn!(error = %err, "layout failed on malformed data");
            return Err(err);
        }
    };

    let layout = compute_layout(&slice, scale, padding, &config)?;
    debug!(
        bars = layout.bars.len(),
        canvas_width = layout.canvas.width,
        canvas_height = layout.canvas.height,
        "computed chart layout"
    );
    Ok(layout)
}
