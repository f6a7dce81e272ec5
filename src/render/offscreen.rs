use std::time::Duration;

use anyhow::Context;

use crate::{
    card::model::CardState,
    foundation::core::{FrameRGBA, Resolution},
    foundation::error::{GlassError, GlassResult},
    render::canvas::{LiveCanvas, SettleOutcome},
    render::renderer::{CardRenderer, RendererOptions},
};

/// The built-in off-screen card surface.
///
/// Paints synchronously through [`CardRenderer`], so the frame is settled the
/// moment [`LiveCanvas::paint`] returns; `wait_ready` reports ready without
/// consuming the fallback. Capture re-renders the last painted state at the
/// requested multiplier and encodes it as PNG, with fonts embedded as
/// pre-rendered glyphs.
pub struct OffscreenCanvas {
    renderer: CardRenderer,
    last_state: Option<CardState>,
}

impl OffscreenCanvas {
    /// Build an offscreen canvas around the given card font.
    pub fn new(opts: RendererOptions) -> GlassResult<Self> {
        Ok(Self {
            renderer: CardRenderer::new(opts)?,
            last_state: None,
        })
    }

    /// Render the last painted state at the given multiplier without
    /// encoding, for callers that want raw pixels.
    pub fn render_frame(&mut self, resolution: Resolution) -> GlassResult<FrameRGBA> {
        let state = self
            .last_state
            .as_ref()
            .ok_or_else(|| GlassError::capture("no state painted yet"))?
            .clone();
        self.renderer.render(&state, resolution.multiplier())
    }
}

impl LiveCanvas for OffscreenCanvas {
    fn paint(&mut self, state: &CardState) -> GlassResult<()> {
        state.validate()?;
        self.last_state = Some(state.clone());
        Ok(())
    }

    fn wait_ready(&mut self, _fallback: Duration) -> SettleOutcome {
        // Painting is synchronous; the frame is already settled.
        SettleOutcome::Ready
    }

    fn capture(&mut self, resolution: Resolution) -> GlassResult<Vec<u8>> {
        let frame = self.render_frame(resolution)?;
        encode_png(&frame)
    }
}

/// Encode a frame as PNG bytes.
pub fn encode_png(frame: &FrameRGBA) -> GlassResult<Vec<u8>> {
    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut data);
    }

    let mut out = std::io::Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode frame as png")?;
    Ok(out.into_inner())
}

// PNG stores straight alpha.
fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/offscreen.rs"]
mod tests;
