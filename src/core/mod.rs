pub mod animation;
pub mod color;
pub mod config;
pub mod hover;
pub mod layout;
pub mod padding;
pub mod scale;
pub mod types;
pub mod windowing;

pub use animation::{
    BarAnimation, BarSample, Easing, PaintPhase, entrance_total_secs, plan_animation,
};
pub use color::Rgb8;
pub use config::ChartConfig;
pub use hover::{TooltipAnchor, locate_tooltip};
pub use layout::{
    AxisKind, AxisLine, BarGeometry, ChartLayout, TextAnchor, TickMark, compute_layout,
    layout_chart,
};
pub use padding::{EffectivePadding, resolve_padding};
pub use scale::{BarScale, clamp_spacing, compute_scale};
pub use types::{CanvasExtent, DataPoint, MeasuredExtents};
pub use windowing::{VisibleBar, VisibleSlice, select_window};
