use serde::{Deserialize, Serialize};

/// One fetched article, built per request and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceArticle {
    pub url: String,
    pub extracted_text: String,
    pub publisher_name: String,
    pub publisher_alias: String,
}

impl SourceArticle {
    pub fn word_count(&self) -> usize {
        self.extracted_text.split_whitespace().count()
    }
}

/// Output of the rewrite pipeline.
///
/// When `attribution_required` is true the publisher alias must appear as a
/// whole word in `body_paragraphs[0]` before the result is rendered; when it
/// is false `attribution_line` stays empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body_paragraphs: Vec<String>,
    #[serde(default)]
    pub attribution_required: bool,
    #[serde(default)]
    pub attribution_line: String,
}

impl RewriteResult {
    /// Single-paragraph result used when the model response cannot be
    /// parsed as the structured schema.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            body_paragraphs: vec![text.into()],
            attribution_required: false,
            attribution_line: String::new(),
        }
    }
}
