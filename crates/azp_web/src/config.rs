use azp_rewrite::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Process-wide configuration, read from the environment once at startup
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: non_empty_env("OPENAI_API_KEY"),
            openai_base_url: non_empty_env("AZPRESS_OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_empty_env("AZPRESS_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    pub fn api_key_present(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
