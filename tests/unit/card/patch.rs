use super::*;
use crate::card::model::CardTemplate;

fn patch(json: &str) -> RecordPatch {
    serde_json::from_str(json).unwrap()
}

#[test]
fn known_fields_merge_and_win() {
    let mut state = CardState::default();
    let outcome = apply_patch(
        &mut state,
        &patch(r#"{ "quoteText": "A", "brandName": "Acme", "gradientIndex": 3 }"#),
    );

    assert_eq!(state.quote_text, "A");
    assert_eq!(state.brand_name, "Acme");
    assert_eq!(state.gradient_index, 3);
    assert_eq!(outcome.applied.len(), 3);
    assert!(outcome.discarded.is_empty());
}

#[test]
fn template_switches_via_wire_name() {
    let mut state = CardState::default();
    apply_patch(&mut state, &patch(r#"{ "template": "image-text" }"#));
    assert_eq!(state.template, CardTemplate::ImageText);
}

#[test]
fn unknown_keys_are_discarded_and_reported() {
    let mut state = CardState::default();
    let before = state.clone();
    let outcome = apply_patch(&mut state, &patch(r#"{ "nope": 1, "alsoNope": "x" }"#));

    assert_eq!(state.quote_text, before.quote_text);
    assert_eq!(outcome.applied.len(), 0);
    assert_eq!(outcome.discarded.len(), 2);
    assert!(
        outcome
            .discarded
            .iter()
            .all(|(_, r)| *r == DiscardReason::UnknownKey)
    );
}

#[test]
fn type_mismatched_values_are_discarded() {
    let mut state = CardState::default();
    let outcome = apply_patch(&mut state, &patch(r#"{ "gradientIndex": "three" }"#));

    assert_eq!(state.gradient_index, CardState::default().gradient_index);
    assert_eq!(
        outcome.discarded,
        vec![("gradientIndex".to_string(), DiscardReason::InvalidValue)]
    );
}

#[test]
fn image_fields_are_not_patchable_from_records() {
    let mut state = CardState::default();
    let outcome = apply_patch(
        &mut state,
        &patch(r#"{ "backgroundImage": "data:image/png;base64,xyz" }"#),
    );

    assert!(state.background_image.is_none());
    assert_eq!(
        outcome.discarded,
        vec![("backgroundImage".to_string(), DiscardReason::ImageField)]
    );
}

#[test]
fn empty_patch_is_a_no_op() {
    let mut state = CardState::default();
    let before = serde_json::to_value(&state).unwrap();
    let outcome = apply_patch(&mut state, &RecordPatch::empty());
    assert!(outcome.applied.is_empty() && outcome.discarded.is_empty());
    assert_eq!(serde_json::to_value(&state).unwrap(), before);
}
