//! Repository for the `projects` table.

use sqlx::PgPool;

use crate::models::project::{
    CreateProject, Project, ProjectSummary, ProjectWithFiles, UpdateProject,
};
use crate::repositories::ProjectFileRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, status, color, owner_id, url, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project together with any inline files, returning
    /// the created row.
    ///
    /// All inserts run in one transaction: if any inline file insert
    /// fails, the whole batch rolls back and no rows are created.
    /// Inline files default `file_type` to `page`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        owner_id: &str,
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (id, name, description, status, color, owner_id, url)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 'active'),
                     COALESCE($5, 'from-purple-500 to-pink-500'), $6, $7)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.color)
            .bind(owner_id)
            .bind(&input.url)
            .fetch_one(&mut *tx)
            .await?;

        for file in &input.files {
            sqlx::query(
                "INSERT INTO project_files (id, project_id, path, content, file_type)
                 VALUES ($1, $2, $3, COALESCE($4, ''), COALESCE($5, 'page'))",
            )
            .bind(&file.id)
            .bind(&input.id)
            .bind(&file.path)
            .bind(&file.content)
            .bind(&file.file_type)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(project)
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Aggregate read: a project plus its files ordered by path.
    pub async fn find_with_files(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<ProjectWithFiles>, sqlx::Error> {
        let Some(project) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let files = ProjectFileRepo::list_by_project(pool, id).await?;
        Ok(Some(ProjectWithFiles { project, files }))
    }

    /// List all projects with their file counts, newest-created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        sqlx::query_as::<_, ProjectSummary>(
            "SELECT p.id, p.name, p.description, p.status, p.color, p.owner_id, p.url,
                    p.created_at, p.updated_at, COUNT(pf.id) AS file_count
             FROM projects p
             LEFT JOIN project_files pf ON p.id = pf.project_id
             GROUP BY p.id
             ORDER BY p.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Partially update a project. Only non-`None` fields in `input`
    /// are applied; `updated_at` is bumped unconditionally, so an empty
    /// input still executes as a timestamp-only update.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                url = COALESCE($5, url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }
}
