use super::*;

#[test]
fn default_state_is_valid() {
    CardState::default().validate().unwrap();
}

#[test]
fn enums_use_original_wire_names() {
    assert_eq!(
        serde_json::to_value(CardTemplate::ImageText).unwrap(),
        serde_json::json!("image-text")
    );
    assert_eq!(
        serde_json::to_value(AspectRatio::Wide).unwrap(),
        serde_json::json!("16:9")
    );
    assert_eq!(
        serde_json::to_value(GlassMode::Dark).unwrap(),
        serde_json::json!("dark")
    );
}

#[test]
fn state_deserializes_from_partial_camel_case_json() {
    let state: CardState = serde_json::from_str(
        r#"{ "template": "qa", "questionText": "Q?", "gradientIndex": 2 }"#,
    )
    .unwrap();
    assert_eq!(state.template, CardTemplate::Qa);
    assert_eq!(state.question_text, "Q?");
    assert_eq!(state.gradient_index, 2);
    // Untouched fields keep their defaults.
    assert_eq!(state.brand_name, CardState::default().brand_name);
}

#[test]
fn aspect_ratio_dims_match_the_canvas_presets() {
    assert_eq!(AspectRatio::Square.dims(), (560, 560));
    assert_eq!(AspectRatio::Wide.dims(), (700, 394));
    assert_eq!(AspectRatio::Tall.dims(), (360, 640));
    assert_eq!(AspectRatio::Portrait.dims(), (480, 600));
}

#[test]
fn validate_rejects_out_of_range_gradient() {
    let state = CardState {
        gradient_index: gradients::GRADIENTS.len(),
        ..CardState::default()
    };
    assert!(matches!(
        state.validate(),
        Err(GlassError::Validation(_))
    ));
}

#[test]
fn validate_rejects_inconsistent_image_data() {
    let state = CardState {
        background_image: Some(ImageData {
            width: 2,
            height: 2,
            rgba8_premul: std::sync::Arc::new(vec![0; 4]),
        }),
        ..CardState::default()
    };
    assert!(state.validate().is_err());
}

#[test]
fn templates_declare_subject_image_support() {
    assert!(CardTemplate::ImageText.supports_subject_image());
    assert!(!CardTemplate::Quote.supports_subject_image());
    assert!(!CardTemplate::Qa.supports_subject_image());
}
