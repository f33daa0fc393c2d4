//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use webforge_core::types::{EntityId, Timestamp};

use crate::models::project_file::ProjectFile;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub status: String,
    pub color: String,
    pub owner_id: String,
    pub url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project row joined with its file count, as returned by the list query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub status: String,
    pub color: String,
    pub owner_id: String,
    pub url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub file_count: i64,
}

/// Aggregate read: a project plus its files ordered by path.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithFiles {
    #[serde(flatten)]
    pub project: Project,
    pub files: Vec<ProjectFile>,
}

/// DTO for creating a new project. The identifier is caller-supplied.
///
/// `owner_id` is not part of the body; it is derived from the
/// `X-User-Id` request header and passed to the repository separately.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub color: Option<String>,
    pub url: Option<String>,
    /// Files inserted atomically with the project.
    #[serde(default)]
    pub files: Vec<InlineProjectFile>,
}

/// A file record supplied inline with project creation.
///
/// `file_type` defaults to `page` here (unlike the standalone file
/// endpoint, which defaults to `component`).
#[derive(Debug, Clone, Deserialize)]
pub struct InlineProjectFile {
    pub id: EntityId,
    pub path: String,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
}

/// DTO for partially updating a project. All fields are optional; a
/// request with none still bumps `updated_at`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub url: Option<String>,
}
