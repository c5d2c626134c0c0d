mod frame;
mod null_renderer;
mod primitives;

pub use frame::PlotFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{CirclePrimitive, Color, LinePrimitive, TextPrimitive};

use crate::error::PlotResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `PlotFrame`; layout and binning stay
/// out of drawing code.
pub trait Renderer {
    fn render(&mut self, frame: &PlotFrame) -> PlotResult<()>;
}
