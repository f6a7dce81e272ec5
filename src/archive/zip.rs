use std::io::Write;

use anyhow::Context;

use crate::foundation::error::{GlassError, GlassResult};

/// Suggested file name for the finalized archive.
pub const ARCHIVE_FILE_NAME: &str = "liquid-glass-cards.zip";

/// In-memory collection of captured cards, finalized into one ZIP.
///
/// Entries are named `card-<position>.png` by the 1-based absolute position
/// in the source sequences (not range-relative), in insertion order.
#[derive(Clone, Debug, Default)]
pub struct CardArchive {
    entries: Vec<(String, Vec<u8>)>,
}

impl CardArchive {
    /// Empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one captured card under its absolute 1-based position.
    pub fn insert(&mut self, position: u32, png_bytes: Vec<u8>) {
        self.entries.push((entry_name(position), png_bytes));
    }

    /// Number of entries collected so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no captures were collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in insertion order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Serialize all entries into a single deflate-compressed ZIP.
    pub fn finalize(&self) -> GlassResult<Vec<u8>> {
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        for (name, bytes) in &self.entries {
            writer
                .start_file(name.as_str(), options)
                .map_err(|e| GlassError::archive(format!("start entry '{name}': {e}")))?;
            writer
                .write_all(bytes)
                .with_context(|| format!("write archive entry '{name}'"))
                .map_err(|e| GlassError::archive(e.to_string()))?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| GlassError::archive(format!("finish zip: {e}")))?;
        Ok(cursor.into_inner())
    }
}

/// Entry name for a 1-based position.
pub fn entry_name(position: u32) -> String {
    format!("card-{position}.png")
}

#[cfg(test)]
#[path = "../../tests/unit/archive/zip.rs"]
mod tests;
