use serde_json::Value;

use crate::{
    card::patch::RecordPatch,
    foundation::error::{GlassError, GlassResult},
};

/// Which input mode currently supplies the record sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordOrigin {
    /// No records loaded yet.
    #[default]
    None,
    /// Records came from an uploaded file.
    File,
    /// Records came from pasted text.
    Pasted,
}

/// Holds the record sequence and arbitrates between its two input modes.
///
/// A file upload is strict: anything but a JSON array is an error and leaves
/// the existing sequence untouched. Pasted text is parsed on every change and
/// is deliberately lenient: a structurally invalid intermediate string is
/// expected while the user is typing and silently preserves the previous
/// successfully-parsed sequence. Whichever mode loads last becomes
/// authoritative and clears the other, so the two can never silently
/// disagree.
#[derive(Clone, Debug, Default)]
pub struct RecordIngest {
    records: Vec<RecordPatch>,
    pasted_text: String,
    origin: RecordOrigin,
}

impl RecordIngest {
    /// Empty ingest state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current record sequence, in source order.
    pub fn records(&self) -> &[RecordPatch] {
        &self.records
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Which input mode is currently authoritative.
    pub fn origin(&self) -> RecordOrigin {
        self.origin
    }

    /// The pasted text as last set, for echoing back into an editor.
    pub fn pasted_text(&self) -> &str {
        &self.pasted_text
    }

    /// Load records from an uploaded file's bytes.
    ///
    /// The content must parse as JSON with a top-level array; any other shape
    /// or a parse failure returns [`GlassError::Ingest`] and leaves the
    /// existing sequence untouched. On success any pasted-text state is
    /// cleared and the file becomes the authoritative source. Returns the
    /// number of records loaded.
    #[tracing::instrument(skip(self, bytes))]
    pub fn load_file_bytes(&mut self, bytes: &[u8]) -> GlassResult<usize> {
        let text = std::str::from_utf8(bytes)
            .map_err(|_| GlassError::ingest("record file is not valid UTF-8"))?;
        let parsed: Value = serde_json::from_str(text)
            .map_err(|e| GlassError::ingest(format!("invalid JSON file: {e}")))?;
        let Value::Array(items) = parsed else {
            return Err(GlassError::ingest("JSON must be an array of objects"));
        };

        self.records = items.into_iter().map(coerce_record).collect();
        self.pasted_text.clear();
        self.origin = RecordOrigin::File;
        Ok(self.records.len())
    }

    /// Update the pasted-text source; called on every edit.
    ///
    /// Whitespace-only text clears the sequence. Text that parses as a JSON
    /// array replaces the sequence and makes the paste authoritative. Any
    /// other text is treated as "not yet valid" and preserves the previous
    /// sequence without erroring.
    pub fn set_pasted_text(&mut self, text: &str) {
        self.pasted_text = text.to_string();

        if text.trim().is_empty() {
            self.records.clear();
            self.origin = RecordOrigin::None;
            return;
        }

        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) {
            self.records = items.into_iter().map(coerce_record).collect();
            self.origin = RecordOrigin::Pasted;
        }
    }

    /// Drop all records and pasted text.
    pub fn clear(&mut self) {
        self.records.clear();
        self.pasted_text.clear();
        self.origin = RecordOrigin::None;
    }
}

// Array entries are untyped at this boundary; non-object entries become empty
// patches rather than failing the whole load.
fn coerce_record(value: Value) -> RecordPatch {
    match value {
        Value::Object(map) => RecordPatch(map),
        other => {
            tracing::warn!(?other, "record entry is not an object; using empty patch");
            RecordPatch::empty()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ingest/records.rs"]
mod tests;
