//! Display output trait

use crate::display::FrameBuffer;

/// Trait for pushing a composed frame to the panel
///
/// The transfer is async so other tasks keep running while the bus is busy.
#[allow(async_fn_in_trait)]
pub trait FrameSink {
    type Error;

    /// Transfer the whole frame buffer to the display
    async fn flush(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;
}
