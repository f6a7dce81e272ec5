use std::sync::Arc;

use crate::{
    card::gradients,
    card::icons::IconSet,
    card::model::{CardState, CardTemplate, GlassMode, ImageData, ImagePosition, ImageShape},
    foundation::core::FrameRGBA,
    foundation::error::{GlassError, GlassResult},
    render::gradient::fill_linear_135,
    render::text::{TextBrushRgba8, TextLayoutEngine},
};

/// Canvas padding around the glass panel, in layout pixels.
const CANVAS_PADDING: f64 = 32.0;
/// Inner padding of the glass panel.
const PANEL_PADDING: f64 = 28.0;
/// Corner radius of the glass panel.
const PANEL_RADIUS: f64 = 16.0;
/// Corner radius of sub-panels and rectangular subject images.
const INNER_RADIUS: f64 = 12.0;
/// Icon badge edge length in layout pixels.
const ICON_SIZE: f64 = 22.0;

/// Configuration for [`CardRenderer`].
pub struct RendererOptions {
    /// Raw bytes of the font used for all card text.
    pub font_bytes: Vec<u8>,
}

/// Renders a [`CardState`] to premultiplied RGBA8 pixels.
///
/// The renderer is the off-screen equivalent of the interactive card view:
/// background gradient or image, glass panel, per-template text, subject
/// image, icon badge, and brand line. All geometry is computed in 1× layout
/// pixels; the capture multiplier is applied as a uniform transform.
pub struct CardRenderer {
    text: TextLayoutEngine,
    icons: IconSet,
    font: vello_cpu::peniko::FontData,
}

impl CardRenderer {
    /// Build a renderer around the given card font.
    pub fn new(opts: RendererOptions) -> GlassResult<Self> {
        let mut text = TextLayoutEngine::new();
        text.register_font(&opts.font_bytes)?;
        let font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(opts.font_bytes), 0);
        Ok(Self {
            text,
            icons: IconSet::new(),
            font,
        })
    }

    /// Render `state` at the given pixel-density multiplier.
    pub fn render(&mut self, state: &CardState, multiplier: u32) -> GlassResult<FrameRGBA> {
        state.validate()?;
        if multiplier == 0 {
            return Err(GlassError::validation("resolution multiplier must be > 0"));
        }

        let (w, h) = state.aspect_ratio.dims();
        let sw = surface_dim(w * multiplier)?;
        let sh = surface_dim(h * multiplier)?;
        let base = kurbo::Affine::scale(f64::from(multiplier));
        let (wf, hf) = (f64::from(w), f64::from(h));

        let mut ctx = vello_cpu::RenderContext::new(sw, sh);

        self.draw_background(&mut ctx, state, sw, sh, base, wf, hf)?;
        self.draw_glass_panel(&mut ctx, state, base, wf, hf);

        let content = ContentBox::for_canvas(wf, hf);
        match state.template {
            CardTemplate::Quote => self.draw_quote(&mut ctx, state, base, &content)?,
            CardTemplate::Qa => self.draw_qa(&mut ctx, state, base, &content)?,
            CardTemplate::ImageText => self.draw_image_text(&mut ctx, state, base, &content)?,
        }

        self.draw_icon_badge(&mut ctx, state, base, wf, multiplier)?;
        self.draw_brand(&mut ctx, state, base, wf, hf)?;

        let mut pixmap = vello_cpu::Pixmap::new(sw, sh);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(sw),
            height: u32::from(sh),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn draw_background(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        state: &CardState,
        sw: u16,
        sh: u16,
        base: kurbo::Affine,
        wf: f64,
        hf: f64,
    ) -> GlassResult<()> {
        if let Some(img) = &state.background_image {
            let paint = image_paint(img)?;
            let cover = cover_affine(
                f64::from(img.width),
                f64::from(img.height),
                0.0,
                0.0,
                wf,
                hf,
            );
            ctx.set_transform(affine_to_cpu(base * cover));
            ctx.set_paint(paint);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(img.width),
                f64::from(img.height),
            ));
        } else {
            let gradient = gradients::gradient_at(state.gradient_index);
            let mut buf = vec![0u8; usize::from(sw) * usize::from(sh) * 4];
            fill_linear_135(&mut buf, u32::from(sw), u32::from(sh), gradient);
            let pixmap = pixmap_from_premul_bytes(&buf, u32::from(sw), u32::from(sh))?;
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            });
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(sw),
                f64::from(sh),
            ));
        }
        Ok(())
    }

    fn draw_glass_panel(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        state: &CardState,
        base: kurbo::Affine,
        wf: f64,
        hf: f64,
    ) {
        let panel = vello_cpu::kurbo::Rect::new(
            CANVAS_PADDING,
            CANVAS_PADDING,
            wf - CANVAS_PADDING,
            hf - CANVAS_PADDING,
        );
        let fill = match state.glass_mode {
            GlassMode::Light => vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 51),
            GlassMode::Dark => vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 102),
        };

        ctx.set_transform(affine_to_cpu(base));
        ctx.set_paint(fill);
        ctx.fill_path(&rounded_rect_path(panel, PANEL_RADIUS));

        // Hairline highlights along the panel's top and bottom edges.
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 102));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            panel.x0 + PANEL_RADIUS,
            panel.y0,
            panel.x1 - PANEL_RADIUS,
            panel.y0 + 1.0,
        ));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 51));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            panel.x0 + PANEL_RADIUS,
            panel.y1 - 1.0,
            panel.x1 - PANEL_RADIUS,
            panel.y1,
        ));
    }

    fn draw_quote(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        state: &CardState,
        base: kurbo::Affine,
        content: &ContentBox,
    ) -> GlassResult<()> {
        let cw = content.width() as f32;
        let mark = self
            .text
            .layout("\u{201C}", 72.0, TextBrushRgba8::white(77), Some(cw))?;
        let quote = self
            .text
            .layout(&state.quote_text, 24.0, TextBrushRgba8::white(255), Some(cw))?;
        let author = self.text.layout(
            &state.quote_author.to_uppercase(),
            13.0,
            TextBrushRgba8::white(179),
            Some(cw),
        )?;

        let divider_h = 1.0;
        let total = f64::from(mark.height())
            + 4.0
            + f64::from(quote.height())
            + 18.0
            + divider_h
            + 18.0
            + f64::from(author.height());
        let mut y = content.y0 + (content.height() - total).max(0.0) / 2.0;

        self.draw_layout(ctx, &mark, (content.centered_x(&mark), y), base);
        y += f64::from(mark.height()) + 4.0;
        self.draw_layout(ctx, &quote, (content.centered_x(&quote), y), base);
        y += f64::from(quote.height()) + 18.0;

        ctx.set_transform(affine_to_cpu(base));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 77));
        let cx = content.x0 + content.width() / 2.0;
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            cx - 24.0,
            y,
            cx + 24.0,
            y + divider_h,
        ));
        y += divider_h + 18.0;

        self.draw_layout(ctx, &author, (content.centered_x(&author), y), base);
        Ok(())
    }

    fn draw_qa(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        state: &CardState,
        base: kurbo::Affine,
        content: &ContentBox,
    ) -> GlassResult<()> {
        let pad = 16.0;
        let gap = 16.0;
        let inner_w = (content.width() - 2.0 * pad) as f32;

        let q_label =
            self.text
                .layout("QUESTION", 11.0, TextBrushRgba8::white(179), Some(inner_w))?;
        let q_body = self.text.layout(
            &state.question_text,
            18.0,
            TextBrushRgba8::white(255),
            Some(inner_w),
        )?;
        let a_label =
            self.text
                .layout("ANSWER", 11.0, TextBrushRgba8::white(179), Some(inner_w))?;
        let a_body = self.text.layout(
            &state.answer_text,
            15.0,
            TextBrushRgba8::white(255),
            Some(inner_w),
        )?;

        let q_h = 2.0 * pad + f64::from(q_label.height()) + 8.0 + f64::from(q_body.height());
        let a_h = 2.0 * pad + f64::from(a_label.height()) + 8.0 + f64::from(a_body.height());
        let total = q_h + gap + a_h;
        let mut y = content.y0 + (content.height() - total).max(0.0) / 2.0;

        let sub_fill = match state.glass_mode {
            GlassMode::Light => vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 26),
            GlassMode::Dark => vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 38),
        };

        for (label, body, panel_h) in [(&q_label, &q_body, q_h), (&a_label, &a_body, a_h)] {
            ctx.set_transform(affine_to_cpu(base));
            ctx.set_paint(sub_fill);
            let rect = vello_cpu::kurbo::Rect::new(
                content.x0,
                y,
                content.x0 + content.width(),
                y + panel_h,
            );
            ctx.fill_path(&rounded_rect_path(rect, INNER_RADIUS));

            let tx = content.x0 + pad;
            let mut ty = y + pad;
            self.draw_layout(ctx, label, (tx, ty), base);
            ty += f64::from(label.height()) + 8.0;
            self.draw_layout(ctx, body, (tx, ty), base);

            y += panel_h + gap;
        }
        Ok(())
    }

    fn draw_image_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        state: &CardState,
        base: kurbo::Affine,
        content: &ContentBox,
    ) -> GlassResult<()> {
        let gap = 20.0;
        let (image_box, text_box, centered) =
            image_text_boxes(content, state.image_position, state.image_shape, gap);

        self.draw_subject_image(ctx, state, base, image_box)?;

        let tw = text_box.width() as f32;
        let title =
            self.text
                .layout(&state.image_title, 20.0, TextBrushRgba8::white(255), Some(tw))?;
        let desc = self.text.layout(
            &state.image_description,
            14.0,
            TextBrushRgba8::white(179),
            Some(tw),
        )?;

        let divider_h = 2.0;
        let total =
            f64::from(title.height()) + 12.0 + divider_h + 12.0 + f64::from(desc.height());
        let mut y = text_box.y0 + (text_box.height() - total).max(0.0) / 2.0;

        let title_x = if centered {
            text_box.centered_x(&title)
        } else {
            text_box.x0
        };
        self.draw_layout(ctx, &title, (title_x, y), base);
        y += f64::from(title.height()) + 12.0;

        ctx.set_transform(affine_to_cpu(base));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 102));
        let dx = if centered {
            text_box.x0 + text_box.width() / 2.0 - 16.0
        } else {
            text_box.x0
        };
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(dx, y, dx + 32.0, y + divider_h));
        y += divider_h + 12.0;

        let desc_x = if centered {
            text_box.centered_x(&desc)
        } else {
            text_box.x0
        };
        self.draw_layout(ctx, &desc, (desc_x, y), base);
        Ok(())
    }

    fn draw_subject_image(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        state: &CardState,
        base: kurbo::Affine,
        image_box: ContentBox,
    ) -> GlassResult<()> {
        let rect =
            vello_cpu::kurbo::Rect::new(image_box.x0, image_box.y0, image_box.x1, image_box.y1);
        let clip = match state.image_shape {
            ImageShape::Circle => circle_path(rect),
            ImageShape::Rect | ImageShape::Square => rounded_rect_path(rect, INNER_RADIUS),
        };

        let Some(img) = &state.card_image else {
            // Placeholder panel where the subject image would sit.
            let fill = match state.glass_mode {
                GlassMode::Light => vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 26),
                GlassMode::Dark => vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 38),
            };
            ctx.set_transform(affine_to_cpu(base));
            ctx.set_paint(fill);
            ctx.fill_path(&clip);
            return Ok(());
        };

        let paint = image_paint(img)?;
        let cover = cover_affine(
            f64::from(img.width),
            f64::from(img.height),
            image_box.x0,
            image_box.y0,
            image_box.width(),
            image_box.height(),
        );
        ctx.set_transform(affine_to_cpu(base));
        ctx.push_clip_layer(&clip);
        ctx.set_transform(affine_to_cpu(base * cover));
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(img.width),
            f64::from(img.height),
        ));
        ctx.pop_layer();
        Ok(())
    }

    fn draw_icon_badge(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        state: &CardState,
        base: kurbo::Affine,
        wf: f64,
        multiplier: u32,
    ) -> GlassResult<()> {
        let Some(name) = &state.selected_icon else {
            return Ok(());
        };
        let raster_px = (ICON_SIZE as u32) * multiplier;
        let Some(paint) = self.icon_paint(name, raster_px)? else {
            tracing::warn!(icon = %name, "unknown icon name; skipping badge");
            return Ok(());
        };

        let x = wf - CANVAS_PADDING - 16.0 - ICON_SIZE;
        let y = CANVAS_PADDING + 16.0;
        let scale = ICON_SIZE / f64::from(raster_px);
        let placement = base * kurbo::Affine::translate((x, y)) * kurbo::Affine::scale(scale);
        ctx.set_transform(affine_to_cpu(placement));
        ctx.set_paint(paint);
        ctx.push_opacity_layer(0.7);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(raster_px),
            f64::from(raster_px),
        ));
        ctx.pop_layer();
        Ok(())
    }

    fn draw_brand(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        state: &CardState,
        base: kurbo::Affine,
        wf: f64,
        hf: f64,
    ) -> GlassResult<()> {
        if state.brand_name.trim().is_empty() {
            return Ok(());
        }
        let brand = self.text.layout(
            &state.brand_name.to_uppercase(),
            11.0,
            TextBrushRgba8::white(128),
            None,
        )?;
        let x = wf - CANVAS_PADDING - 24.0 - f64::from(brand.width());
        let y = hf - CANVAS_PADDING - 20.0 - f64::from(brand.height());
        self.draw_layout(ctx, &brand, (x, y), base);
        Ok(())
    }

    fn draw_layout(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        layout: &parley::Layout<TextBrushRgba8>,
        origin: (f64, f64),
        base: kurbo::Affine,
    ) {
        ctx.set_transform(affine_to_cpu(base * kurbo::Affine::translate(origin)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    fn icon_paint(&mut self, name: &str, size_px: u32) -> GlassResult<Option<vello_cpu::Image>> {
        let Some(tree) = self.icons.get(name)? else {
            return Ok(None);
        };
        let mut pixmap = resvg::tiny_skia::Pixmap::new(size_px, size_px)
            .ok_or_else(|| GlassError::validation("icon raster size must be > 0"))?;
        let size = tree.size();
        let transform = resvg::tiny_skia::Transform::from_scale(
            size_px as f32 / size.width(),
            size_px as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let vp = pixmap_from_premul_bytes(pixmap.data(), size_px, size_px)?;
        Ok(Some(vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(vp)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        }))
    }
}

/// Axis-aligned layout box in 1× layout pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentBox {
    /// Left edge.
    pub x0: f64,
    /// Top edge.
    pub y0: f64,
    /// Right edge.
    pub x1: f64,
    /// Bottom edge.
    pub y1: f64,
}

impl ContentBox {
    /// The panel interior for a canvas of the given layout size.
    pub fn for_canvas(wf: f64, hf: f64) -> Self {
        let inset = CANVAS_PADDING + PANEL_PADDING;
        Self {
            x0: inset,
            y0: inset,
            x1: wf - inset,
            y1: hf - inset,
        }
    }

    /// Box width.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Box height.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    fn centered_x(&self, layout: &parley::Layout<TextBrushRgba8>) -> f64 {
        self.x0 + (self.width() - f64::from(layout.width())).max(0.0) / 2.0
    }
}

/// Split the content box into subject-image and text boxes for the
/// image+text template. Returns `(image box, text box, centered text)`.
pub fn image_text_boxes(
    content: &ContentBox,
    position: ImagePosition,
    shape: ImageShape,
    gap: f64,
) -> (ContentBox, ContentBox, bool) {
    match position {
        ImagePosition::Top => {
            let (iw, ih) = match shape {
                ImageShape::Rect => (content.width(), 160.0_f64.min(content.height() / 2.0)),
                ImageShape::Square | ImageShape::Circle => (128.0, 128.0),
            };
            let ix0 = content.x0 + (content.width() - iw) / 2.0;
            let image = ContentBox {
                x0: ix0,
                y0: content.y0,
                x1: ix0 + iw,
                y1: content.y0 + ih,
            };
            let text = ContentBox {
                x0: content.x0,
                y0: image.y1 + gap,
                x1: content.x1,
                y1: content.y1,
            };
            (image, text, true)
        }
        ImagePosition::Left | ImagePosition::Right => {
            let iw = match shape {
                ImageShape::Rect => content.width() * 0.4,
                ImageShape::Square | ImageShape::Circle => {
                    (content.width() / 3.0).min(content.height())
                }
            };
            let ih = match shape {
                ImageShape::Rect => content.height(),
                ImageShape::Square | ImageShape::Circle => iw,
            };
            let iy0 = content.y0 + (content.height() - ih) / 2.0;
            let (ix0, tx0, tx1) = if position == ImagePosition::Left {
                (content.x0, content.x0 + iw + gap, content.x1)
            } else {
                (content.x1 - iw, content.x0, content.x1 - iw - gap)
            };
            let image = ContentBox {
                x0: ix0,
                y0: iy0,
                x1: ix0 + iw,
                y1: iy0 + ih,
            };
            let text = ContentBox {
                x0: tx0,
                y0: content.y0,
                x1: tx1,
                y1: content.y1,
            };
            (image, text, false)
        }
    }
}

/// Affine placing an `iw`×`ih` image so it covers the `bw`×`bh` box at
/// `(bx, by)`, cropping the overflow symmetrically.
pub fn cover_affine(iw: f64, ih: f64, bx: f64, by: f64, bw: f64, bh: f64) -> kurbo::Affine {
    let scale = (bw / iw).max(bh / ih);
    let tx = bx + (bw - iw * scale) / 2.0;
    let ty = by + (bh - ih * scale) / 2.0;
    kurbo::Affine::translate((tx, ty)) * kurbo::Affine::scale(scale)
}

fn affine_to_cpu(a: kurbo::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rounded_rect_path(rect: vello_cpu::kurbo::Rect, radius: f64) -> vello_cpu::kurbo::BezPath {
    use vello_cpu::kurbo::Shape;
    vello_cpu::kurbo::RoundedRect::from_rect(rect, radius).to_path(0.1)
}

fn circle_path(rect: vello_cpu::kurbo::Rect) -> vello_cpu::kurbo::BezPath {
    use vello_cpu::kurbo::Shape;
    let r = rect.width().min(rect.height()) / 2.0;
    vello_cpu::kurbo::Circle::new(rect.center(), r).to_path(0.1)
}

fn image_paint(img: &ImageData) -> GlassResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(&img.rgba8_premul, img.width, img.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn pixmap_from_premul_bytes(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> GlassResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| GlassError::validation("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| GlassError::validation("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(GlassError::validation("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

fn surface_dim(px: u32) -> GlassResult<u16> {
    px.try_into()
        .map_err(|_| GlassError::validation("capture surface dimension exceeds u16"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
