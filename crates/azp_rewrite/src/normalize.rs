use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Markdown emphasis/heading artifacts the model tends to emit even when
    // asked for plain text.
    static ref EMPHASIS: Regex = Regex::new(r"(\*\*|__|\*|`{1,3})").unwrap();
    static ref HEADING: Regex = Regex::new(r"(?m)^#{1,6}\s*").unwrap();
    static ref SPACES: Regex = Regex::new(r"[ \t]{2,}").unwrap();
    static ref BLANK_LINES: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Strips markup artifacts and collapses whitespace in model output before
/// display.
pub fn normalize(text: &str) -> String {
    let text = HEADING.replace_all(text, "");
    let text = EMPHASIS.replace_all(&text, "");
    let text = SPACES.replace_all(&text, " ");
    let text = BLANK_LINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}
