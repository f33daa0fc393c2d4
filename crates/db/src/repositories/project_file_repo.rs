//! Repository for the `project_files` table.

use sqlx::PgPool;

use crate::models::project_file::{CreateProjectFile, ProjectFile, UpdateProjectFile};

const COLUMNS: &str = "id, project_id, path, content, file_type, updated_at";

/// Provides CRUD operations for project files. No delete exists on
/// this surface; rows only disappear via the project FK cascade.
pub struct ProjectFileRepo;

impl ProjectFileRepo {
    /// Insert a new file, returning the created row.
    ///
    /// `content` defaults to empty, `file_type` to `component`. Fails
    /// with a foreign-key violation if the project does not exist.
    pub async fn create(
        pool: &PgPool,
        project_id: &str,
        input: &CreateProjectFile,
    ) -> Result<ProjectFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_files (id, project_id, path, content, file_type)
             VALUES ($1, $2, $3, COALESCE($4, ''), COALESCE($5, 'component'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(&input.id)
            .bind(project_id)
            .bind(&input.path)
            .bind(&input.content)
            .bind(&input.file_type)
            .fetch_one(pool)
            .await
    }

    /// Find a file by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<ProjectFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_files WHERE id = $1");
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's files ordered by path.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: &str,
    ) -> Result<Vec<ProjectFile>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM project_files WHERE project_id = $1 ORDER BY path");
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Partially update a file. Only non-`None` fields in `input` are
    /// applied; `updated_at` is bumped unconditionally.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateProjectFile,
    ) -> Result<Option<ProjectFile>, sqlx::Error> {
        let query = format!(
            "UPDATE project_files SET
                content = COALESCE($2, content),
                path = COALESCE($3, path),
                file_type = COALESCE($4, file_type),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(id)
            .bind(&input.content)
            .bind(&input.path)
            .bind(&input.file_type)
            .fetch_optional(pool)
            .await
    }
}
