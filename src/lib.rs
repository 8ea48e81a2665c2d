//! barchart-rs: layout and animation-timeline engine for windowed bar charts.
//!
//! The crate turns `(label, value)` points, a chart configuration and
//! measured label extents into exact pixel geometry: bar rectangles, axes,
//! ticks, label anchors and a hover tooltip, plus per-bar entrance timing.
//! Drawing is delegated to a [`render::Renderer`]; label sizes come back from
//! a [`render::TextMeasurer`] and feed one correction pass.
//!
//! `core` is pure and deterministic. `api` wraps it in a per-instance
//! [`BarChart`] that owns measurement, hover and entrance state.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BarChart, LayoutPass};
pub use core::{ChartConfig, ChartLayout, DataPoint};
pub use error::{ChartError, ChartResult};
