pub mod file;
pub mod generate;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                          list, create
/// /projects/{id}                     get (with files), update
/// /projects/{project_id}/files       list, create
/// /files/{id}                        get, update
/// /generate/component                component generation (with fallback)
/// /generate/site                     site scaffolding (remote only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(project::router())
        .merge(file::router())
        .merge(generate::router())
}
