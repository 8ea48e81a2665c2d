use serde::{Deserialize, Serialize};

use crate::core::{BarAnimation, ChartConfig, ChartLayout, MeasuredExtents, TooltipAnchor};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::chart::{BarChart, LayoutPass};

/// Serializable state of one chart instance, used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSnapshot {
    pub config: ChartConfig,
    pub extents: MeasuredExtents,
    pub generation: u64,
    pub layout_pass: LayoutPass,
    pub layout: ChartLayout,
    pub animation: Vec<BarAnimation>,
    pub hovered: Option<usize>,
    pub entrance_completed: bool,
    pub tooltip: Option<TooltipAnchor>,
}

impl<R: Renderer> BarChart<R> {
    pub fn snapshot(&self) -> ChartResult<ChartSnapshot> {
        let layout = self.layout()?;
        let animation = self.animation_plan()?;
        let tooltip = self.tooltip()?;
        Ok(ChartSnapshot {
            config: self.config().clone(),
            extents: self.extents(),
            generation: self.generation(),
            layout_pass: self.layout_pass(),
            layout,
            animation,
            hovered: self.hovered(),
            entrance_completed: self.entrance_completed(),
            tooltip,
        })
    }
}
