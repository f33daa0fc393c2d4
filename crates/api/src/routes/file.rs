//! Route definitions for standalone file access.

use axum::routing::get;
use axum::Router;

use crate::handlers::file;
use crate::state::AppState;

/// Routes mounted at `/files`. No delete exists on this surface.
pub fn router() -> Router<AppState> {
    Router::new().route("/files/{id}", get(file::get_by_id).put(file::update))
}
