use serde::{Deserialize, Serialize};

use crate::core::layout::ChartLayout;

pub const TOOLTIP_WIDTH: f64 = 80.0;
pub const TOOLTIP_HEIGHT: f64 = 30.0;
/// Vertical gap between the tooltip box and the top edge of its bar.
pub const TOOLTIP_GAP: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipAnchor {
    /// Visible position of the hovered bar.
    pub position: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
}

impl TooltipAnchor {
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width * 0.5
    }
}

/// Maps a hovered visible position to its tooltip box.
///
/// Tooltips stay hidden until the entrance sequence has completed, and for
/// positions outside the visible window.
#[must_use]
pub fn locate_tooltip(
    hovered: Option<usize>,
    entrance_completed: bool,
    layout: &ChartLayout,
) -> Option<TooltipAnchor> {
    if !entrance_completed {
        return None;
    }
    let bar = layout.bar(hovered?)?;
    Some(TooltipAnchor {
        position: bar.position,
        x: bar.center_x() - TOOLTIP_WIDTH / 2.0,
        y: bar.y - TOOLTIP_HEIGHT - TOOLTIP_GAP,
        width: TOOLTIP_WIDTH,
        height: TOOLTIP_HEIGHT,
        text: format!("{}: {}", bar.label, bar.value),
    })
}
