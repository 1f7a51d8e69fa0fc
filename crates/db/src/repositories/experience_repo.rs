//! Repository for the `experiences` table and its technology links.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::experience::{Experience, NewExperience};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company, position, location, start_date, end_date, is_current, \
     description, created_at, updated_at";

/// Provides get-or-create and read operations for work experience.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// Fetch the experience matching (`input.company`, `input.position`),
    /// inserting it first if absent.
    ///
    /// Returns the row and whether it was created by this call.
    pub async fn get_or_create(
        pool: &PgPool,
        input: &NewExperience,
    ) -> Result<(Experience, bool), sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM experiences WHERE company = $1 AND position = $2"
        );
        let existing = sqlx::query_as::<_, Experience>(&query)
            .bind(&input.company)
            .bind(&input.position)
            .fetch_optional(pool)
            .await?;
        if let Some(experience) = existing {
            return Ok((experience, false));
        }

        let query = format!(
            "INSERT INTO experiences
                (company, position, location, start_date, end_date, is_current, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Experience>(&query)
            .bind(&input.company)
            .bind(&input.position)
            .bind(&input.location)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_current)
            .bind(&input.description)
            .fetch_one(pool)
            .await?;
        Ok((created, true))
    }

    /// List experiences, most recent start date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experiences ORDER BY start_date DESC");
        sqlx::query_as::<_, Experience>(&query).fetch_all(pool).await
    }

    /// Link a technology skill to an experience. Idempotent.
    pub async fn link_technology(
        pool: &PgPool,
        experience_id: DbId,
        skill_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO experience_technologies (experience_id, skill_id)
             VALUES ($1, $2)
             ON CONFLICT (experience_id, skill_id) DO NOTHING",
        )
        .bind(experience_id)
        .bind(skill_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count experiences.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM experiences")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Count technology links for one experience.
    pub async fn technology_count(pool: &PgPool, experience_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM experience_technologies WHERE experience_id = $1",
        )
        .bind(experience_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
