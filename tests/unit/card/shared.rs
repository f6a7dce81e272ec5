use super::*;

#[test]
fn edits_apply_when_no_batch_is_running() {
    let shared = SharedCardState::new(CardState::default());
    shared.edit(|s| s.quote_text = "edited".to_string()).unwrap();
    assert_eq!(shared.snapshot().quote_text, "edited");
}

#[test]
fn edits_are_rejected_while_the_token_is_held() {
    let shared = SharedCardState::new(CardState::default());
    let guard = shared.lock_for_batch().unwrap();

    assert!(shared.is_batch_active());
    assert!(matches!(
        shared.edit(|s| s.quote_text = "race".to_string()),
        Err(GlassError::Busy(_))
    ));
    // The pipeline's own mutations still go through the guard.
    guard.apply_record(&RecordPatch(
        serde_json::from_str(r#"{ "quoteText": "batch" }"#).unwrap(),
    ));
    assert_eq!(guard.snapshot().quote_text, "batch");
}

#[test]
fn the_token_is_exclusive() {
    let shared = SharedCardState::new(CardState::default());
    let _guard = shared.lock_for_batch().unwrap();
    assert!(matches!(
        shared.lock_for_batch(),
        Err(GlassError::Busy(_))
    ));
}

#[test]
fn dropping_the_guard_releases_the_token() {
    let shared = SharedCardState::new(CardState::default());
    drop(shared.lock_for_batch().unwrap());

    assert!(!shared.is_batch_active());
    shared.edit(|s| s.brand_name = "after".to_string()).unwrap();
    assert_eq!(shared.snapshot().brand_name, "after");
}

#[test]
fn guard_routes_images_to_both_slots() {
    let shared = SharedCardState::new(CardState::default());
    let guard = shared.lock_for_batch().unwrap();
    let img = ImageData {
        width: 1,
        height: 1,
        rgba8_premul: std::sync::Arc::new(vec![0, 0, 0, 255]),
    };

    guard.set_background_image(img.clone());
    guard.set_subject_image(img);

    let snap = guard.snapshot();
    assert!(snap.background_image.is_some());
    assert!(snap.card_image.is_some());
}
