//! Handlers for project files.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use webforge_core::error::CoreError;
use webforge_db::models::project_file::{CreateProjectFile, ProjectFile, UpdateProjectFile};
use webforge_db::repositories::ProjectFileRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/files
///
/// Always 200: a project with zero files yields an empty list.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Vec<ProjectFile>>> {
    let files = ProjectFileRepo::list_by_project(&state.pool, &project_id).await?;
    Ok(Json(files))
}

/// POST /api/v1/projects/{project_id}/files
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(input): Json<CreateProjectFile>,
) -> AppResult<(StatusCode, Json<ProjectFile>)> {
    if input.id.trim().is_empty() || input.path.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Missing required fields: id and path".to_string(),
        )));
    }

    let file = ProjectFileRepo::create(&state.pool, &project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(file)))
}

/// GET /api/v1/files/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProjectFile>> {
    let file = ProjectFileRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "File", id }))?;
    Ok(Json(file))
}

/// PUT /api/v1/files/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProjectFile>,
) -> AppResult<Json<ProjectFile>> {
    let file = ProjectFileRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "File", id }))?;
    Ok(Json(file))
}
