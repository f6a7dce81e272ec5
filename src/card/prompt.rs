//! Template-specific instructions for external generative text tools.
//!
//! Display-only output: the text is meant to be pasted into a chat assistant
//! to produce a record array, and carries no machine contract.

use crate::card::model::CardTemplate;

/// Natural-language instructions describing the JSON record shape expected
/// for `template`, ready to hand to a generative text tool.
pub fn ai_prompt(template: CardTemplate) -> String {
    let (fields, example) = match template {
        CardTemplate::Quote => (
            "\"quoteText\" (the main quote), \"quoteAuthor\" (the author, e.g., \"— Name\"), \
             and \"brandName\" (the brand watermarking)",
            "[\n  { \"quoteText\": \"Stay hungry, stay foolish.\", \"quoteAuthor\": \"— Steve Jobs\", \"brandName\": \"YourBrand\" }\n]",
        ),
        CardTemplate::Qa => (
            "\"questionText\" (a specific question), \"answerText\" (the detailed answer), \
             and \"brandName\" (the brand watermarking)",
            "[\n  { \"questionText\": \"What is Liquid Glass?\", \"answerText\": \"It is a modern design aesthetic.\", \"brandName\": \"YourBrand\" }\n]",
        ),
        CardTemplate::ImageText => (
            "\"imageTitle\" (a short title), \"imageDescription\" (a descriptive paragraph), \
             and \"brandName\" (the brand watermarking)",
            "[\n  { \"imageTitle\": \"Creative Vision\", \"imageDescription\": \"Every pixel tells a story.\", \"brandName\": \"YourBrand\" }\n]",
        ),
    };

    format!(
        "I need a JSON array of objects. Each object should have the following keys: {fields}. \
         Please generate [INSERT NUMBER] examples. Output ONLY the valid JSON array inside a \
         standard JSON code block so that I can easily one-click copy and paste it. Example:\n{example}"
    )
}

/// A minimal example of the record array for `template`, shown next to the
/// upload controls.
pub fn preview_json(template: CardTemplate) -> &'static str {
    match template {
        CardTemplate::Quote => {
            "[\n  { \"quoteText\": \"Line 1\", \"quoteAuthor\": \"Author 1\", \"brandName\": \"YourBrand\" }\n]"
        }
        CardTemplate::Qa => {
            "[\n  { \"questionText\": \"Q1\", \"answerText\": \"A1\", \"brandName\": \"YourBrand\" }\n]"
        }
        CardTemplate::ImageText => {
            "[\n  { \"imageTitle\": \"Title 1\", \"imageDescription\": \"Desc 1\", \"brandName\": \"YourBrand\" }\n]"
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/prompt.rs"]
mod tests;
