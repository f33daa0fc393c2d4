//! Handlers for the AI-generation endpoints.
//!
//! Component generation falls back to the deterministic local template
//! whenever the remote provider is unavailable, surfacing the reason as
//! a warning; site generation has no fallback and hard-fails instead.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use webforge_core::component;
use webforge_core::context::{build_project_context, ContextFile};
use webforge_core::error::CoreError;
use webforge_db::repositories::{ProjectFileRepo, ProjectRepo};
use webforge_llm::openai::{OpenAiClient, Website};
use webforge_llm::{dispatch, GenerationOutcome, TokenUsage};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for POST /api/v1/generate/component.
#[derive(Debug, Deserialize)]
pub struct GenerateComponentRequest {
    pub prompt: String,
    pub project_id: String,
}

/// A generated component, from either the remote provider or the
/// local template (in which case `warning` is set and `tokens` absent).
#[derive(Debug, Serialize)]
pub struct GenerateComponentResponse {
    pub component_name: String,
    pub file_path: String,
    pub content: String,
    pub file_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Request body for POST /api/v1/generate/site.
#[derive(Debug, Deserialize)]
pub struct GenerateSiteRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateSiteResponse {
    pub success: bool,
    pub website: Website,
    pub prompt: String,
}

/// POST /api/v1/generate/component
///
/// Assembles the project context, attempts remote generation, and
/// falls back to the local template on any unavailability. Once input
/// validation has passed this endpoint always returns 200.
pub async fn component(
    State(state): State<AppState>,
    Json(input): Json<GenerateComponentRequest>,
) -> AppResult<Json<GenerateComponentResponse>> {
    let prompt = input.prompt.trim();
    if prompt.is_empty() || input.project_id.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "prompt and project_id required".to_string(),
        )));
    }

    let project = ProjectRepo::find_by_id(&state.pool, &input.project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.project_id.clone(),
        }))?;
    let files = ProjectFileRepo::list_by_project(&state.pool, &input.project_id).await?;

    let context_files: Vec<ContextFile> = files
        .into_iter()
        .map(|f| ContextFile {
            path: f.path,
            content: f.content,
        })
        .collect();
    let context = build_project_context(&project.name, &project.description, &context_files);

    let name = component::component_name(prompt);
    let response = match dispatch::generate_component(&state.config.llm, &context, prompt).await {
        GenerationOutcome::Generated { content, usage } => GenerateComponentResponse {
            component_name: name.to_string(),
            file_path: format!("src/components/{name}.tsx"),
            content,
            file_type: "component".to_string(),
            tokens: Some(usage),
            warning: None,
        },
        GenerationOutcome::Unavailable { reason } => {
            let template = component::render_template(prompt);
            GenerateComponentResponse {
                component_name: template.component_name.to_string(),
                file_path: template.file_path,
                content: template.content,
                file_type: "component".to_string(),
                tokens: None,
                warning: Some(format!("{reason}, used template")),
            }
        }
    };

    Ok(Json(response))
}

/// POST /api/v1/generate/site
///
/// Remote-only: requires an OpenAI key to be configured and surfaces
/// any remote failure as a hard error.
pub async fn site(
    State(state): State<AppState>,
    Json(input): Json<GenerateSiteRequest>,
) -> AppResult<Json<GenerateSiteResponse>> {
    let prompt = input.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Prompt is required".to_string(),
        )));
    }

    let api_key = state
        .config
        .llm
        .openai_api_key
        .clone()
        .ok_or_else(|| AppError::Config("OpenAI API key not configured".to_string()))?;

    let website = OpenAiClient::new(api_key)
        .generate_site(prompt)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(GenerateSiteResponse {
        success: true,
        website,
        prompt: prompt.to_string(),
    }))
}
