use std::sync::Arc;

use azp_core::{ChatModel, RewriteResult, SourceArticle};

use crate::attribution;
use crate::chunk;
use crate::classify;
use crate::normalize;
use crate::prompt;

pub const MAX_CHUNK_WORDS: usize = 1000;
const CHUNK_TOKEN_CAP: u32 = 2000;
const FORMAT_MAX_TOKENS: u32 = 2500;

/// Per-chunk paraphrase outcome. A failed model call keeps the input chunk
/// verbatim instead of aborting the pipeline.
enum ChunkOutcome {
    Rewritten(String),
    Original(String),
}

impl ChunkOutcome {
    fn into_text(self) -> String {
        match self {
            ChunkOutcome::Rewritten(t) | ChunkOutcome::Original(t) => t,
        }
    }
}

/// Outcome of the structuring call.
enum DraftOutcome {
    Parsed(RewriteResult),
    FallbackPlain(String),
}

/// The rewrite pipeline: chunk, paraphrase per chunk, impose structure,
/// patch attribution, normalize. Every stage degrades instead of failing,
/// so [`Rewriter::rewrite`] never returns an error.
pub struct Rewriter {
    model: Arc<dyn ChatModel>,
    max_chunk_words: usize,
}

impl Rewriter {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            model,
            max_chunk_words: MAX_CHUNK_WORDS,
        }
    }

    #[cfg(test)]
    fn with_chunk_words(model: Arc<dyn ChatModel>, max_chunk_words: usize) -> Self {
        Self {
            model,
            max_chunk_words,
        }
    }

    pub async fn rewrite(&self, article: &SourceArticle) -> RewriteResult {
        let classification = classify::classify(&article.extracted_text);
        let quote_signal = classify::has_quote_signal(&article.extracted_text.to_lowercase());
        let alias = article.publisher_alias.as_str();
        tracing::debug!(
            "rewriting {} ({} words, {:?})",
            article.url,
            article.word_count(),
            classification
        );

        let chunks = chunk::split_into_chunks(&article.extracted_text, self.max_chunk_words);
        let mut outcomes = Vec::with_capacity(chunks.len());
        for c in chunks {
            outcomes.push(self.paraphrase(c, alias).await);
        }
        let merged = outcomes
            .into_iter()
            .map(ChunkOutcome::into_text)
            .collect::<Vec<_>>()
            .join("\n\n");

        let draft = self
            .structure(
                &merged,
                alias,
                article.word_count(),
                classification.attribution_required(),
            )
            .await;
        let mut result = match draft {
            DraftOutcome::Parsed(r) => r,
            DraftOutcome::FallbackPlain(raw) => RewriteResult::plain(raw),
        };

        // The keyword classifier is authoritative; the model's own flag is
        // advisory at best.
        result.attribution_required = classification.attribution_required();
        attribution::ensure_attribution(&mut result, alias, quote_signal);

        result.title = normalize::normalize(&result.title);
        for paragraph in &mut result.body_paragraphs {
            *paragraph = normalize::normalize(paragraph);
        }
        result.body_paragraphs.retain(|p| !p.is_empty());
        result
    }

    async fn paraphrase(&self, chunk: String, alias: &str) -> ChunkOutcome {
        let words = chunk.split_whitespace().count() as u32;
        let max_tokens = ((words as f64 * 1.4) as u32).min(CHUNK_TOKEN_CAP);
        let user = prompt::paraphrase_prompt(&chunk, alias);
        match self
            .model
            .complete(prompt::PARAPHRASE_SYSTEM, &user, max_tokens)
            .await
        {
            Ok(text) if !text.trim().is_empty() => ChunkOutcome::Rewritten(text.trim().to_string()),
            Ok(_) => {
                tracing::warn!("empty paraphrase response, keeping original chunk");
                ChunkOutcome::Original(chunk)
            }
            Err(e) => {
                tracing::warn!("paraphrase failed, keeping original chunk: {}", e);
                ChunkOutcome::Original(chunk)
            }
        }
    }

    async fn structure(
        &self,
        merged: &str,
        alias: &str,
        approx_words: usize,
        attribution_required: bool,
    ) -> DraftOutcome {
        let user = prompt::format_prompt(merged, alias, approx_words, attribution_required);
        let raw = match self
            .model
            .complete(prompt::FORMAT_SYSTEM, &user, FORMAT_MAX_TOKENS)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("structuring call failed, keeping merged paraphrase: {}", e);
                return DraftOutcome::FallbackPlain(merged.to_string());
            }
        };

        match parse_structured(&raw) {
            Some(result) => DraftOutcome::Parsed(result),
            None => {
                tracing::warn!("model response was not the expected JSON, using plain fallback");
                DraftOutcome::FallbackPlain(raw)
            }
        }
    }
}

/// Parses the fixed JSON schema out of a completion, tolerating a fenced
/// json block or prose around the object.
///
/// An object without any body text does not count as a parse: a refusal
/// like "sorry {}" must fall through to the plain-text fallback instead of
/// producing a blank article.
fn parse_structured(raw: &str) -> Option<RewriteResult> {
    let trimmed = raw.trim();
    if let Ok(result) = serde_json::from_str::<RewriteResult>(trimmed) {
        if has_body(&result) {
            return Some(result);
        }
    }
    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str::<RewriteResult>(&trimmed[start..=end])
        .ok()
        .filter(has_body)
}

fn has_body(result: &RewriteResult) -> bool {
    result.body_paragraphs.iter().any(|p| !p.trim().is_empty())
}
