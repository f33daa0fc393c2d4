//! Generation dispatcher for the component endpoint.
//!
//! Decides between the remote Anthropic call and the deterministic
//! local template. Failure of the remote path is modeled as the
//! [`GenerationOutcome::Unavailable`] variant rather than an error, so
//! the caller always has a usable outcome to act on.

use serde::Serialize;

use crate::anthropic::AnthropicClient;
use crate::config::LlmConfig;

const COMPONENT_SYSTEM_PROMPT: &str = r#"You are an experienced React/TypeScript developer.
Your job is to generate clean, modern component code.

Rules:
1. Use TypeScript with interfaces for props
2. Use Tailwind CSS for styling
3. The code must be ready to use
4. Do not add unnecessary comments
5. Export the component as default
6. Return ONLY code, no markdown blocks"#;

/// Token accounting reported by the remote provider.
#[derive(Debug, Clone, Serialize)]
pub struct TokenUsage {
    pub input: u64,
    pub output: u64,
}

/// Result of attempting remote component generation.
///
/// `Unavailable` covers both "no usable credential" and "remote call
/// failed"; the reason string is surfaced to the caller as a warning.
#[derive(Debug)]
pub enum GenerationOutcome {
    Generated { content: String, usage: TokenUsage },
    Unavailable { reason: String },
}

/// Attempt remote component generation for a prompt with assembled
/// project context.
///
/// The remote path is taken only when a well-formed Anthropic key is
/// configured. One attempt, no retry; any failure collapses into
/// `Unavailable` with a human-readable reason.
pub async fn generate_component(
    config: &LlmConfig,
    context: &str,
    prompt: &str,
) -> GenerationOutcome {
    let Some(api_key) = config.usable_anthropic_key() else {
        return GenerationOutcome::Unavailable {
            reason: "ANTHROPIC_API_KEY not set".to_string(),
        };
    };

    let client = AnthropicClient::new(api_key.to_string());
    let user = format!("{context}\n\nRequest: {prompt}\n\nCreate a React component.");

    match client.complete(COMPONENT_SYSTEM_PROMPT, &user).await {
        Ok(completion) => {
            tracing::info!(
                input_tokens = completion.input_tokens,
                output_tokens = completion.output_tokens,
                "Component generated remotely"
            );
            GenerationOutcome::Generated {
                content: completion.text,
                usage: TokenUsage {
                    input: completion.input_tokens,
                    output: completion.output_tokens,
                },
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Remote generation failed, caller falls back to template");
            GenerationOutcome::Unavailable {
                reason: format!("API error: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No credential must short-circuit without any network traffic.
    #[tokio::test]
    async fn missing_credential_is_unavailable() {
        let outcome = generate_component(&LlmConfig::default(), "ctx", "button").await;
        match outcome {
            GenerationOutcome::Unavailable { reason } => {
                assert!(reason.contains("ANTHROPIC_API_KEY"));
            }
            GenerationOutcome::Generated { .. } => panic!("expected Unavailable"),
        }
    }

    #[tokio::test]
    async fn malformed_credential_is_unavailable() {
        let config = LlmConfig {
            anthropic_api_key: Some("wrong-prefix".to_string()),
            openai_api_key: None,
        };
        let outcome = generate_component(&config, "ctx", "button").await;
        assert!(matches!(outcome, GenerationOutcome::Unavailable { .. }));
    }
}
