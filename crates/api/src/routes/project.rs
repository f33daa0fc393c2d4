//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{file, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET  /                        -> list
/// POST /                        -> create
/// GET  /{id}                    -> get_by_id (with files)
/// PUT  /{id}                    -> update
/// GET  /{project_id}/files      -> list_by_project
/// POST /{project_id}/files      -> create file
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list).post(project::create))
        .route(
            "/projects/{id}",
            get(project::get_by_id).put(project::update),
        )
        .route(
            "/projects/{project_id}/files",
            get(file::list_by_project).post(file::create),
        )
}
