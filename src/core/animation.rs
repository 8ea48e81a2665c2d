use serde::{Deserialize, Serialize};

use crate::core::color::Rgb8;
use crate::core::config::ChartConfig;
use crate::core::layout::ChartLayout;

/// Delay between the entrance of consecutive bars, in seconds.
pub const ENTRANCE_STAGGER_SECS: f64 = 0.1;
/// Per-bar fill stagger applied before the first paint completes.
pub const FILL_STAGGER_SECS: f64 = 0.05;
/// Fill delay contributed by every visible bar before the first paint completes.
pub const FILL_DELAY_PER_VISIBLE_BAR_SECS: f64 = 0.075;
pub const FILL_TRANSITION_DURATION_SECS: f64 = 0.3;
/// How much darker a bar starts its entrance than its rest fill.
pub const ENTRANCE_FILL_DARKEN_PERCENT: f64 = 40.0;

/// Timing curve applied to geometry transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Whether the chart has completed its first paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaintPhase {
    BeforeFirstPaint,
    AfterFirstPaint,
}

/// Transition timing for one visible bar. Times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarAnimation {
    pub position: usize,
    pub rest_y: f64,
    pub rest_height: f64,
    pub rest_fill: Rgb8,
    pub initial_y: f64,
    pub initial_height: f64,
    pub initial_fill: Rgb8,
    pub entrance_delay: f64,
    pub entrance_duration: f64,
    pub easing: Easing,
    pub fill_transition_delay: f64,
    pub fill_transition_duration: f64,
    pub hover_fill: Rgb8,
}

/// Interpolated bar state at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSample {
    pub y: f64,
    pub height: f64,
    pub fill: Rgb8,
}

impl BarAnimation {
    /// Time at which both geometry and fill have settled.
    #[must_use]
    pub fn settle_time(&self) -> f64 {
        (self.entrance_delay + self.entrance_duration)
            .max(self.fill_transition_delay + self.fill_transition_duration)
    }

    #[must_use]
    pub fn rest(&self) -> BarSample {
        BarSample {
            y: self.rest_y,
            height: self.rest_height,
            fill: self.rest_fill,
        }
    }

    /// State `elapsed` seconds after the entrance started.
    #[must_use]
    pub fn sample(&self, elapsed: f64) -> BarSample {
        let geometry = self
            .easing
            .apply(progress(elapsed, self.entrance_delay, self.entrance_duration));
        let fill = progress(
            elapsed,
            self.fill_transition_delay,
            self.fill_transition_duration,
        );
        BarSample {
            y: self.initial_y + (self.rest_y - self.initial_y) * geometry,
            height: self.initial_height + (self.rest_height - self.initial_height) * geometry,
            fill: self.initial_fill.lerp(self.rest_fill, fill),
        }
    }
}

fn progress(elapsed: f64, delay: f64, duration: f64) -> f64 {
    let local = elapsed - delay;
    if duration <= 0.0 {
        return if local >= 0.0 { 1.0 } else { 0.0 };
    }
    (local / duration).clamp(0.0, 1.0)
}

/// Assigns every visible bar its entrance and fill timing.
///
/// With `animated` off every bar starts at rest with zero-length transitions.
/// `config` must be the same normalized config the layout was built from.
#[must_use]
pub fn plan_animation(
    layout: &ChartLayout,
    config: &ChartConfig,
    phase: PaintPhase,
) -> Vec<BarAnimation> {
    let Some(scale) = layout.scale else {
        return Vec::new();
    };
    let visible = layout.bars.len() as f64;
    let rest_fill = config.bar_color;
    let hover_fill = config.hover_color();

    layout
        .bars
        .iter()
        .map(|bar| {
            if !config.animated {
                return BarAnimation {
                    position: bar.position,
                    rest_y: bar.y,
                    rest_height: bar.height,
                    rest_fill,
                    initial_y: bar.y,
                    initial_height: bar.height,
                    initial_fill: rest_fill,
                    entrance_delay: 0.0,
                    entrance_duration: 0.0,
                    easing: config.easing,
                    fill_transition_delay: 0.0,
                    fill_transition_duration: 0.0,
                    hover_fill,
                };
            }

            let i = bar.position as f64;
            let fill_transition_delay = match phase {
                PaintPhase::BeforeFirstPaint => {
                    FILL_STAGGER_SECS * i + visible * FILL_DELAY_PER_VISIBLE_BAR_SECS
                }
                PaintPhase::AfterFirstPaint => 0.0,
            };
            BarAnimation {
                position: bar.position,
                rest_y: bar.y,
                rest_height: bar.height,
                rest_fill,
                initial_y: layout.baseline_y(),
                initial_height: 0.0,
                initial_fill: rest_fill.darken(ENTRANCE_FILL_DARKEN_PERCENT),
                entrance_delay: i * ENTRANCE_STAGGER_SECS,
                entrance_duration: scale.value_ratio(bar.value),
                easing: config.easing,
                fill_transition_delay,
                fill_transition_duration: FILL_TRANSITION_DURATION_SECS,
                hover_fill,
            }
        })
        .collect()
}

/// Time after which the whole entrance sequence has settled.
#[must_use]
pub fn entrance_total_secs(plan: &[BarAnimation]) -> f64 {
    plan.iter()
        .map(BarAnimation::settle_time)
        .fold(0.0, f64::max)
}
