//! REST client for the OpenAI Chat Completions API, used for
//! whole-site scaffolding.
//!
//! The model is asked for a JSON-formatted site description, which is
//! parsed into the typed [`Website`] structure.

use serde::{Deserialize, Serialize};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f64 = 0.7;

const SITE_SYSTEM_PROMPT: &str = r##"You are an expert web designer. Generate a complete, modern, responsive website based on the user's description.
Return a JSON object with this structure:
{
  "title": "Website title",
  "description": "Brief description",
  "sections": [
    {
      "type": "hero/features/pricing/contact/etc",
      "title": "Section title",
      "content": "Section content or description",
      "items": []
    }
  ],
  "colorScheme": {
    "primary": "#hex",
    "secondary": "#hex",
    "background": "#hex"
  }
}

Make it professional, modern, and complete. Include realistic content."##;

/// HTTP client for the OpenAI Chat Completions endpoint.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
}

/// Errors from the OpenAI REST layer.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("OpenAI API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    /// A 2xx response without a message, or one whose content is not
    /// the expected JSON structure.
    #[error("Malformed OpenAI response: {0}")]
    Malformed(String),
}

/// Structured site description returned by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub title: String,
    pub description: String,
    pub sections: Vec<WebsiteSection>,
    pub color_scheme: ColorScheme,
}

/// One ordered section of the generated site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteSection {
    #[serde(rename = "type")]
    pub section_type: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub background: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    response_format: ResponseFormat<'a>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Generate a site description for a prompt. Single attempt, no
    /// retry; the caller surfaces any failure as a hard error.
    pub async fn generate_site(&self, prompt: &str) -> Result<Website, OpenAiError> {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SITE_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(OpenAiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| OpenAiError::Malformed("no choices in response".to_string()))?
            .message
            .content;

        serde_json::from_str(&content).map_err(|e| OpenAiError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_prompt_keeps_hex_color_placeholders() {
        // The schema block quotes "#hex" literals, which must survive in
        // the prompt sent to the model.
        assert_eq!(SITE_SYSTEM_PROMPT.matches(r##""#hex""##).count(), 3);
        assert!(SITE_SYSTEM_PROMPT.ends_with("Include realistic content."));
    }

    #[test]
    fn website_parses_model_output_shape() {
        let json = r##"{
            "title": "Bakery",
            "description": "A local bakery",
            "sections": [
                {"type": "hero", "title": "Welcome", "content": "Fresh bread daily"},
                {"type": "features", "title": "Why us", "content": "", "items": ["Fresh", "Local"]}
            ],
            "colorScheme": {"primary": "#aa0000", "secondary": "#00aa00", "background": "#ffffff"}
        }"##;

        let site: Website = serde_json::from_str(json).unwrap();
        assert_eq!(site.title, "Bakery");
        assert_eq!(site.sections.len(), 2);
        assert_eq!(site.sections[0].section_type, "hero");
        // "items" may be omitted entirely.
        assert!(site.sections[0].items.is_empty());
        assert_eq!(site.sections[1].items.len(), 2);
        assert_eq!(site.color_scheme.primary, "#aa0000");
    }

    #[test]
    fn website_round_trips_with_camel_case_keys() {
        let site = Website {
            title: "T".into(),
            description: "D".into(),
            sections: vec![],
            color_scheme: ColorScheme {
                primary: "#000".into(),
                secondary: "#111".into(),
                background: "#fff".into(),
            },
        };
        let value = serde_json::to_value(&site).unwrap();
        assert!(value.get("colorScheme").is_some());
    }
}
