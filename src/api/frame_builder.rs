use crate::core::{BarSample, ChartConfig, ChartLayout, TooltipAnchor};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Tick marks are drawn thinner than the axes they hang from.
const TICK_STROKE_RATIO: f64 = 0.5;
const TOOLTIP_CORNER_RADIUS: f64 = 4.0;

/// Materializes a layout into draw primitives.
///
/// `bars` holds the sampled state for each layout bar, in the same order.
/// Missing samples fall back to rest geometry and the configured fill.
#[must_use]
pub fn build_render_frame(
    layout: &ChartLayout,
    config: &ChartConfig,
    bars: &[BarSample],
    tooltip: Option<&TooltipAnchor>,
) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.canvas);
    let bar_fill = Color::from(config.bar_color);

    for (index, bar) in layout.bars.iter().enumerate() {
        let (y, height, fill) = match bars.get(index) {
            Some(sample) => (sample.y, sample.height, Color::from(sample.fill)),
            None => (bar.y, bar.height, bar_fill),
        };
        frame.rects.push(
            RectPrimitive::new(bar.x, y, bar.width, height.max(0.0), fill)
                .with_corner_radius(bar.corner_radius),
        );
    }

    let stroke = config.stroke_width_axe;
    let axis_color = Color::from(config.axis_stroke_color);
    if stroke > 0.0 {
        for axis in &layout.axes {
            frame.lines.push(
                LinePrimitive::new(axis.x1, axis.y1, axis.x2, axis.y2, stroke, axis_color)
                    .with_dash(&config.axis_dash_pattern),
            );
        }
        for tick in &layout.ticks {
            if tick.y_bottom > tick.y_top {
                frame.lines.push(LinePrimitive::new(
                    tick.x,
                    tick.y_top,
                    tick.x,
                    tick.y_bottom,
                    (stroke * TICK_STROKE_RATIO).max(1.0),
                    axis_color,
                ));
            }
        }
    }

    let label_color = Color::from(config.label_color);
    let anchors = layout
        .tick_labels
        .iter()
        .chain(layout.x_axis_label.iter())
        .chain(layout.y_axis_label.iter());
    for anchor in anchors {
        if anchor.text.is_empty() {
            continue;
        }
        frame.texts.push(
            TextPrimitive::new(
                anchor.text.clone(),
                anchor.x,
                anchor.y,
                anchor.font_size_px,
                label_color,
                TextHAlign::Center,
            )
            .with_rotation(anchor.rotation_deg),
        );
    }

    if let Some(tooltip) = tooltip {
        frame.rects.push(
            RectPrimitive::new(
                tooltip.x,
                tooltip.y,
                tooltip.width,
                tooltip.height,
                Color::from(config.tooltip_fill),
            )
            .with_corner_radius(TOOLTIP_CORNER_RADIUS),
        );
        let font_size = config.tick_label_font_size;
        frame.texts.push(TextPrimitive::new(
            tooltip.text.clone(),
            tooltip.center_x(),
            tooltip.y + ((tooltip.height - font_size) / 2.0).max(0.0),
            font_size,
            Color::from(config.tooltip_text_color),
            TextHAlign::Center,
        ));
    }

    frame
}
