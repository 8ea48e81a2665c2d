use serde::{Deserialize, Serialize};

use crate::core::MeasuredExtents;
use crate::core::types::sanitize_extent;

/// Independent measurement channels reported by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtentChannel {
    YLabelWidth,
    XLabelHeight,
    TickLabelMaxHeight,
}

impl ExtentChannel {
    pub const ALL: [Self; 3] = [
        Self::YLabelWidth,
        Self::XLabelHeight,
        Self::TickLabelMaxHeight,
    ];
}

/// One measured value, tagged with the layout generation it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementReport {
    pub generation: u64,
    pub channel: ExtentChannel,
    pub value: f64,
}

impl MeasurementReport {
    #[must_use]
    pub fn new(generation: u64, channel: ExtentChannel, value: f64) -> Self {
        Self {
            generation,
            channel,
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementOutcome {
    /// Accepted; `changed` is true when the stored extent moved.
    Accepted { changed: bool },
    /// Older than the last report accepted on the same channel; ignored.
    Stale { latest_generation: u64 },
}

impl MeasurementOutcome {
    #[must_use]
    pub fn changed(self) -> bool {
        matches!(self, Self::Accepted { changed: true })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
struct ChannelSlot {
    value: f64,
    generation: Option<u64>,
}

impl ChannelSlot {
    fn apply(&mut self, generation: u64, value: f64) -> MeasurementOutcome {
        match self.generation {
            Some(latest) if generation < latest => {
                return MeasurementOutcome::Stale {
                    latest_generation: latest,
                };
            }
            _ => {}
        }
        let value = sanitize_extent(value);
        let changed = value != self.value;
        self.value = value;
        self.generation = Some(generation);
        MeasurementOutcome::Accepted { changed }
    }
}

/// Per-instance cache of the latest measured extents.
///
/// Last write wins per channel, ordered by layout generation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtentCache {
    y_label_width: ChannelSlot,
    x_label_height: ChannelSlot,
    tick_label_max_height: ChannelSlot,
}

impl ExtentCache {
    pub fn apply(&mut self, report: MeasurementReport) -> MeasurementOutcome {
        self.slot_mut(report.channel)
            .apply(report.generation, report.value)
    }

    #[must_use]
    pub fn extents(&self) -> MeasuredExtents {
        MeasuredExtents {
            y_label_width: self.y_label_width.value,
            x_label_height: self.x_label_height.value,
            tick_label_max_height: self.tick_label_max_height.value,
        }
    }

    #[must_use]
    pub fn latest_generation(&self, channel: ExtentChannel) -> Option<u64> {
        match channel {
            ExtentChannel::YLabelWidth => self.y_label_width.generation,
            ExtentChannel::XLabelHeight => self.x_label_height.generation,
            ExtentChannel::TickLabelMaxHeight => self.tick_label_max_height.generation,
        }
    }

    fn slot_mut(&mut self, channel: ExtentChannel) -> &mut ChannelSlot {
        match channel {
            ExtentChannel::YLabelWidth => &mut self.y_label_width,
            ExtentChannel::XLabelHeight => &mut self.x_label_height,
            ExtentChannel::TickLabelMaxHeight => &mut self.tick_label_max_height,
        }
    }
}
