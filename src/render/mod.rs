mod frame;
mod measure;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use measure::{EstimatedTextMeasurer, TextExtent, TextMeasurer};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, DashPattern, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code never
/// sees chart data, scales or animation state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
