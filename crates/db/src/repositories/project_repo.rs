//! Repository for the `projects` table and its technology links.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{NewProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, description, long_description, project_type, status, \
     github_url, live_url, start_date, end_date, is_featured, project_group, \
     created_at, updated_at";

/// Provides get-or-create and read operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Fetch the project matching `input.slug`, inserting it first if absent.
    ///
    /// Returns the row and whether it was created by this call.
    pub async fn get_or_create(
        pool: &PgPool,
        input: &NewProject,
    ) -> Result<(Project, bool), sqlx::Error> {
        if let Some(existing) = Self::find_by_slug(pool, &input.slug).await? {
            return Ok((existing, false));
        }

        let query = format!(
            "INSERT INTO projects
                (title, slug, description, long_description, project_type, status,
                 github_url, live_url, start_date, end_date, is_featured, project_group)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.long_description)
            .bind(&input.project_type)
            .bind(&input.status)
            .bind(&input.github_url)
            .bind(&input.live_url)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_featured)
            .bind(&input.project_group)
            .fetch_one(pool)
            .await?;
        Ok((created, true))
    }

    /// Find a project by its unique slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List projects, featured first, then most recent start date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects ORDER BY is_featured DESC, start_date DESC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Link a technology skill to a project. Idempotent.
    pub async fn link_technology(
        pool: &PgPool,
        project_id: DbId,
        skill_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO project_technologies (project_id, skill_id)
             VALUES ($1, $2)
             ON CONFLICT (project_id, skill_id) DO NOTHING",
        )
        .bind(project_id)
        .bind(skill_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count projects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Count technology links for one project.
    pub async fn technology_count(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM project_technologies WHERE project_id = $1")
                .bind(project_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
