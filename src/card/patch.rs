use serde_json::Value;

use crate::card::model::CardState;

/// One record from a bulk data source: an arbitrary field→value object
/// merged shallowly onto [`CardState`] for a single generation step.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RecordPatch(
    /// Raw field→value map as parsed from the source.
    pub serde_json::Map<String, Value>,
);

impl RecordPatch {
    /// The empty patch, applied when the record sequence is shorter than the
    /// requested range.
    pub fn empty() -> Self {
        Self(serde_json::Map::new())
    }

    /// Whether the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of applying one [`RecordPatch`]: which keys merged and which were
/// rejected, with the rejection reason.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Keys that merged onto the state.
    pub applied: Vec<String>,
    /// Keys that were discarded, with the reason.
    pub discarded: Vec<(String, DiscardReason)>,
}

/// Why a patch key was not merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscardReason {
    /// The key does not name a card state field.
    UnknownKey,
    /// The value could not be decoded into the field's type.
    InvalidValue,
    /// Image fields are supplied by the image sequence, not by records.
    ImageField,
}

/// Merge a record onto the state, field by field.
///
/// Only keys naming known card state fields are merged; unknown keys and
/// type-mismatched values are discarded and reported instead of silently
/// absorbed. Patch fields always win over prior state.
pub fn apply_patch(state: &mut CardState, patch: &RecordPatch) -> PatchOutcome {
    let mut outcome = PatchOutcome::default();

    for (key, value) in &patch.0 {
        let result = match key.as_str() {
            "template" => set_field(&mut state.template, value),
            "aspectRatio" => set_field(&mut state.aspect_ratio, value),
            "glassMode" => set_field(&mut state.glass_mode, value),
            "gradientIndex" => set_field(&mut state.gradient_index, value),
            "quoteText" => set_field(&mut state.quote_text, value),
            "quoteAuthor" => set_field(&mut state.quote_author, value),
            "questionText" => set_field(&mut state.question_text, value),
            "answerText" => set_field(&mut state.answer_text, value),
            "imageTitle" => set_field(&mut state.image_title, value),
            "imageDescription" => set_field(&mut state.image_description, value),
            "selectedIcon" => set_field(&mut state.selected_icon, value),
            "fontFamily" => set_field(&mut state.font_family, value),
            "imagePosition" => set_field(&mut state.image_position, value),
            "imageShape" => set_field(&mut state.image_shape, value),
            "brandName" => set_field(&mut state.brand_name, value),
            "backgroundImage" | "cardImage" => Err(DiscardReason::ImageField),
            _ => Err(DiscardReason::UnknownKey),
        };

        match result {
            Ok(()) => outcome.applied.push(key.clone()),
            Err(reason) => {
                tracing::debug!(key, ?reason, "discarding patch key");
                outcome.discarded.push((key.clone(), reason));
            }
        }
    }

    outcome
}

fn set_field<T>(slot: &mut T, value: &Value) -> Result<(), DiscardReason>
where
    T: serde::de::DeserializeOwned,
{
    match serde_json::from_value::<T>(value.clone()) {
        Ok(parsed) => {
            *slot = parsed;
            Ok(())
        }
        Err(_) => Err(DiscardReason::InvalidValue),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/patch.rs"]
mod tests;
