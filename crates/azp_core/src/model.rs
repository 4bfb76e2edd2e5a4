use async_trait::async_trait;

use crate::Result;

/// The LLM collaborator seam.
///
/// Implementations take a system/user prompt pair and return a single text
/// completion. Callers must tolerate completions that are not valid JSON.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Returns the model identifier, for logging.
    fn name(&self) -> &str;

    /// Requests one completion for the given prompt pair.
    async fn complete(&self, system: &str, user: &str, max_tokens: u32) -> Result<String>;
}
