//! Project file entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use webforge_core::types::{EntityId, Timestamp};

/// A file row from the `project_files` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectFile {
    pub id: EntityId,
    pub project_id: EntityId,
    pub path: String,
    pub content: String,
    pub file_type: String,
    pub updated_at: Timestamp,
}

/// DTO for creating a file through the standalone file endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectFile {
    pub id: EntityId,
    pub path: String,
    pub content: Option<String>,
    /// Defaults to `component` if omitted.
    #[serde(rename = "type")]
    pub file_type: Option<String>,
}

/// DTO for partially updating a file. All fields are optional; a
/// request with none still bumps `updated_at`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectFile {
    pub content: Option<String>,
    pub path: Option<String>,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
}
