//! Remote-generation clients and the generation dispatcher.
//!
//! Wraps the two third-party text-generation APIs (Anthropic Messages,
//! OpenAI Chat Completions) behind typed [`reqwest`] clients, and
//! decides per request whether a usable credential exists or the
//! deterministic local template must be used instead.

pub mod anthropic;
pub mod config;
pub mod dispatch;
pub mod openai;

pub use config::LlmConfig;
pub use dispatch::{GenerationOutcome, TokenUsage};
