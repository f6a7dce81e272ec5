use super::*;

#[test]
fn prompts_name_the_template_fields() {
    let quote = ai_prompt(CardTemplate::Quote);
    assert!(quote.contains("quoteText") && quote.contains("quoteAuthor"));

    let qa = ai_prompt(CardTemplate::Qa);
    assert!(qa.contains("questionText") && qa.contains("answerText"));

    let image = ai_prompt(CardTemplate::ImageText);
    assert!(image.contains("imageTitle") && image.contains("imageDescription"));
}

#[test]
fn previews_are_valid_record_arrays() {
    for template in [
        CardTemplate::Quote,
        CardTemplate::Qa,
        CardTemplate::ImageText,
    ] {
        let value: serde_json::Value = serde_json::from_str(preview_json(template)).unwrap();
        assert!(value.is_array());
    }
}
