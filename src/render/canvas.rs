use std::time::Duration;

use crate::{card::model::CardState, foundation::core::Resolution, foundation::error::GlassResult};

/// Outcome of waiting for a painted frame to settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The surface reported the frame fully painted.
    Ready,
    /// The fallback timeout elapsed without a completion signal; the surface
    /// may still show a stale or partially painted frame.
    TimedOut,
}

/// The live card surface the pipeline drives.
///
/// Implementations own whatever surface actually displays the card: the
/// built-in offscreen renderer, or an adapter over an interactive view. The
/// pipeline only ever pushes state, waits for the paint to settle, and
/// captures pixels; it never reaches into the surface.
pub trait LiveCanvas {
    /// Reflect `state` on the surface.
    fn paint(&mut self, state: &CardState) -> GlassResult<()>;

    /// Block until the last painted frame has settled, or until `fallback`
    /// elapses.
    ///
    /// The fallback bound guarantees forward progress when the surface never
    /// signals completion; a timeout is reported, not fatal, since capture
    /// takes whatever is currently painted.
    fn wait_ready(&mut self, fallback: Duration) -> SettleOutcome;

    /// Encode the currently painted frame as PNG at the given pixel-density
    /// multiplier.
    fn capture(&mut self, resolution: Resolution) -> GlassResult<Vec<u8>>;
}
