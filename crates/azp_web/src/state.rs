use std::sync::Arc;

use azp_core::ChatModel;
use azp_rewrite::OpenAiChatModel;

use crate::Config;

/// Shared, immutable per-process state: configuration, the HTTP client for
/// article fetching, and the chat model when a credential is configured.
pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
    pub model: Option<Arc<dyn ChatModel>>,
}

impl AppState {
    /// Builds state from configuration. A missing API key is not a startup
    /// error: the form stays usable and submissions get a flash message.
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::new();
        let model: Option<Arc<dyn ChatModel>> = match &config.openai_api_key {
            Some(key) => match OpenAiChatModel::new(
                http.clone(),
                key.clone(),
                config.model.clone(),
                config.openai_base_url.clone(),
            ) {
                Ok(m) => Some(Arc::new(m)),
                Err(e) => {
                    tracing::warn!("chat model unavailable: {}", e);
                    None
                }
            },
            None => None,
        };
        Self {
            config,
            http,
            model,
        }
    }

    /// State with an explicit model, used by tests to inject a mock.
    pub fn with_model(config: Config, model: Arc<dyn ChatModel>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            model: Some(model),
        }
    }
}
