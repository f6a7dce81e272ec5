use std::sync::Arc;

use crate::{
    card::gradients,
    foundation::error::{GlassError, GlassResult},
};

/// The active card layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CardTemplate {
    /// Centered quote with author line.
    #[default]
    #[serde(rename = "quote")]
    Quote,
    /// Question and answer sub-panels.
    #[serde(rename = "qa")]
    Qa,
    /// Subject image with title and description.
    #[serde(rename = "image-text")]
    ImageText,
}

impl CardTemplate {
    /// Whether this template renders a subject image inside the glass panel.
    pub fn supports_subject_image(self) -> bool {
        matches!(self, Self::ImageText)
    }
}

/// Output canvas proportions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AspectRatio {
    /// Square.
    #[default]
    #[serde(rename = "1:1")]
    Square,
    /// Landscape.
    #[serde(rename = "16:9")]
    Wide,
    /// Portrait story format.
    #[serde(rename = "9:16")]
    Tall,
    /// Portrait feed format.
    #[serde(rename = "4:5")]
    Portrait,
}

impl AspectRatio {
    /// Base canvas dimensions in pixels at 1x resolution.
    pub fn dims(self) -> (u32, u32) {
        match self {
            Self::Square => (560, 560),
            Self::Wide => (700, 394),
            Self::Tall => (360, 640),
            Self::Portrait => (480, 600),
        }
    }
}

/// Glass panel tint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlassMode {
    /// Translucent white fill.
    #[default]
    Light,
    /// Translucent black fill.
    Dark,
}

/// Subject image placement within the image+text template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    /// Image on the left, text on the right.
    #[default]
    Left,
    /// Image on the right, text on the left.
    Right,
    /// Image above centered text.
    Top,
}

/// Subject image crop shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageShape {
    /// Rounded rectangle.
    #[default]
    Rect,
    /// Rounded square.
    Square,
    /// Circle.
    Circle,
}

/// A decoded raster image in premultiplied RGBA8, shared cheaply.
#[derive(Clone)]
pub struct ImageData {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl std::fmt::Debug for ImageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba8_premul.len())
            .finish()
    }
}

/// The complete description of one card's content and styling.
///
/// A flat, serde-friendly record mutated by both the interactive editor and
/// the bulk pipeline. Exactly one template is active; fields belonging to
/// inactive templates are retained but not rendered. Image fields hold
/// decoded pixels and are skipped during serialization.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardState {
    /// Active layout template.
    pub template: CardTemplate,
    /// Output canvas proportions.
    pub aspect_ratio: AspectRatio,
    /// Glass panel tint.
    pub glass_mode: GlassMode,
    /// Index into the built-in gradient table.
    pub gradient_index: usize,
    /// Full-canvas background image; overrides the gradient when present.
    #[serde(skip)]
    pub background_image: Option<ImageData>,
    /// Subject image for the image+text template.
    #[serde(skip)]
    pub card_image: Option<ImageData>,
    /// Quote template: the quote body.
    pub quote_text: String,
    /// Quote template: the attribution line.
    pub quote_author: String,
    /// Q&A template: the question.
    pub question_text: String,
    /// Q&A template: the answer.
    pub answer_text: String,
    /// Image+text template: the title.
    pub image_title: String,
    /// Image+text template: the description paragraph.
    pub image_description: String,
    /// Name of the built-in icon badge, if any.
    pub selected_icon: Option<String>,
    /// Requested font family name (informational; rendering uses the
    /// renderer's configured font).
    pub font_family: String,
    /// Subject image placement.
    pub image_position: ImagePosition,
    /// Subject image crop shape.
    pub image_shape: ImageShape,
    /// Brand watermark line.
    pub brand_name: String,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            template: CardTemplate::Quote,
            aspect_ratio: AspectRatio::Square,
            glass_mode: GlassMode::Light,
            gradient_index: 5,
            background_image: None,
            card_image: None,
            quote_text: "Stay hungry, stay foolish.".to_string(),
            quote_author: "— Steve Jobs".to_string(),
            question_text: "What is liquid glass?".to_string(),
            answer_text: "A modern translucent design aesthetic.".to_string(),
            image_title: "Creative Vision".to_string(),
            image_description: "Every pixel tells a story.".to_string(),
            selected_icon: None,
            font_family: "Inter".to_string(),
            image_position: ImagePosition::Left,
            image_shape: ImageShape::Rect,
            brand_name: "YourBrand".to_string(),
        }
    }
}

impl CardState {
    /// Validate state invariants before rendering.
    pub fn validate(&self) -> GlassResult<()> {
        if self.gradient_index >= gradients::GRADIENTS.len() {
            return Err(GlassError::validation(format!(
                "gradient index {} out of bounds ({} gradients)",
                self.gradient_index,
                gradients::GRADIENTS.len()
            )));
        }
        if let Some(img) = &self.background_image {
            validate_image("background image", img)?;
        }
        if let Some(img) = &self.card_image {
            validate_image("card image", img)?;
        }
        Ok(())
    }
}

fn validate_image(field: &str, img: &ImageData) -> GlassResult<()> {
    if img.width == 0 || img.height == 0 {
        return Err(GlassError::validation(format!(
            "{field} dimensions must be > 0"
        )));
    }
    if img.rgba8_premul.len() != img.width as usize * img.height as usize * 4 {
        return Err(GlassError::validation(format!(
            "{field} byte length does not match dimensions"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/card/model.rs"]
mod tests;
