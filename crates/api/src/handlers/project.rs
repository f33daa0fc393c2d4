//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use webforge_core::error::CoreError;
use webforge_db::models::project::{
    CreateProject, Project, ProjectSummary, ProjectWithFiles, UpdateProject,
};
use webforge_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::owner_id;
use crate::state::AppState;

/// POST /api/v1/projects
///
/// Creates a project plus any inline files atomically. The owner is
/// taken from the `X-User-Id` header.
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    if input.id.trim().is_empty() || input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Missing required fields: id and name".to_string(),
        )));
    }
    for file in &input.files {
        if file.id.trim().is_empty() || file.path.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Inline files require id and path".to_string(),
            )));
        }
    }

    let project = ProjectRepo::create(&state.pool, &input, owner_id(&headers)).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectSummary>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
///
/// Returns the project together with its files ordered by path.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProjectWithFiles>> {
    let project = ProjectRepo::find_with_files(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
///
/// Partial update: only supplied fields change; `updated_at` always
/// advances, even for an empty body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}
