use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{card::model::ImageData, foundation::error::GlassResult};

/// One entry of the ordered image sequence.
#[derive(Clone, Debug)]
pub struct ImageSource {
    /// Original file name; the sort key images are indexed by.
    pub file_name: String,
    /// Decoded pixels.
    pub data: ImageData,
}

/// Read every file in `dir` and build the image sequence from it.
///
/// Directory traversal is non-recursive, matching a flat folder upload.
#[tracing::instrument]
pub fn load_images_from_dir(dir: &Path) -> GlassResult<Vec<ImageSource>> {
    let rd = std::fs::read_dir(dir)
        .with_context(|| format!("read image directory '{}'", dir.display()))?;

    let mut entries = Vec::new();
    for entry in rd {
        let entry = entry.with_context(|| format!("list image directory '{}'", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        match std::fs::read(&path) {
            Ok(bytes) => entries.push((name, bytes)),
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping unreadable file");
            }
        }
    }

    Ok(collect_image_files(entries))
}

/// Normalize raw `(file name, bytes)` entries into the image sequence.
///
/// Entries whose bytes do not sniff as a supported image format are filtered
/// out; the rest are sorted ascending by file name (stable) and decoded.
/// Entries that fail to decode are dropped individually, never failing the
/// whole load. The resulting order is the contract images are indexed by.
pub fn collect_image_files(entries: Vec<(String, Vec<u8>)>) -> Vec<ImageSource> {
    let mut files: Vec<(String, Vec<u8>)> = entries
        .into_iter()
        .filter(|(name, bytes)| {
            let is_image = image::guess_format(bytes).is_ok();
            if !is_image {
                tracing::debug!(file = %name, "skipping non-image entry");
            }
            is_image
        })
        .collect();
    files.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut out = Vec::with_capacity(files.len());
    for (name, bytes) in files {
        match decode_image(&bytes) {
            Ok(data) => out.push(ImageSource {
                file_name: name,
                data,
            }),
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "dropping undecodable image");
            }
        }
    }
    out
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> GlassResult<ImageData> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(ImageData {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ingest/images.rs"]
mod tests;
