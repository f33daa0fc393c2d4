//! Generation-provider credentials.
//!
//! Credentials are recognized by a literal prefix check on the value;
//! there is no handshake. Loaded once at startup and passed in
//! explicitly, never looked up ambiently per call.

/// Anthropic keys are issued with this prefix; anything else is
/// treated as not configured.
const ANTHROPIC_KEY_PREFIX: &str = "sk-ant-";

/// API credentials for the remote generation providers.
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    /// Anthropic API key (component generation).
    pub anthropic_api_key: Option<String>,
    /// OpenAI API key (site generation).
    pub openai_api_key: Option<String>,
}

impl LlmConfig {
    /// Load credentials from `ANTHROPIC_API_KEY` and `OPENAI_API_KEY`.
    pub fn from_env() -> Self {
        Self {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
        }
    }

    /// The Anthropic key, if present and well-formed.
    pub fn usable_anthropic_key(&self) -> Option<&str> {
        self.anthropic_api_key
            .as_deref()
            .filter(|key| key.starts_with(ANTHROPIC_KEY_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_unusable() {
        assert!(LlmConfig::default().usable_anthropic_key().is_none());
    }

    #[test]
    fn malformed_key_is_unusable() {
        let config = LlmConfig {
            anthropic_api_key: Some("not-a-real-key".to_string()),
            openai_api_key: None,
        };
        assert!(config.usable_anthropic_key().is_none());
    }

    #[test]
    fn prefixed_key_is_usable() {
        let config = LlmConfig {
            anthropic_api_key: Some("sk-ant-abc123".to_string()),
            openai_api_key: None,
        };
        assert_eq!(config.usable_anthropic_key(), Some("sk-ant-abc123"));
    }
}
