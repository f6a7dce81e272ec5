use crate::foundation::error::{GlassError, GlassResult};

/// RGBA8 brush color carried through Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl TextBrushRgba8 {
    /// White at the given opacity, the card's working palette.
    pub fn white(alpha: u8) -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            a: alpha,
        }
    }
}

/// Stateful helper for building Parley text layouts from raw font bytes.
///
/// Fonts are embedded as pre-rendered glyph outlines at capture time, so a
/// capture never races an external font load.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: Option<String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            family_name: None,
        }
    }

    /// Register the card font from raw bytes.
    ///
    /// Must be called once before any layout; re-registering replaces the
    /// active family. Returns the detected family name.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> GlassResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            GlassError::validation("no font families registered from font bytes")
        })?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| GlassError::validation("registered font family has no name"))?
            .to_string();
        self.family_name = Some(family_name.clone());
        Ok(family_name)
    }

    /// Shape and lay out plain text with the registered family.
    pub fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
        max_width_px: Option<f32>,
    ) -> GlassResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(GlassError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let family_name = self
            .family_name
            .clone()
            .ok_or_else(|| GlassError::validation("no card font registered"))?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        if let Some(w) = max_width_px {
            layout.break_all_lines(Some(w));
            layout.align(
                Some(w),
                parley::Alignment::Start,
                parley::AlignmentOptions::default(),
            );
        } else {
            layout.break_all_lines(None);
        }

        Ok(layout)
    }
}
