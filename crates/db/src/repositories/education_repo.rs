//! Repository for the `education` table.

use sqlx::PgPool;

use crate::models::education::{Education, NewEducation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, institution, degree, field_of_study, start_date, end_date, \
     is_current, description, created_at, updated_at";

/// Provides get-or-create and read operations for education entries.
pub struct EducationRepo;

impl EducationRepo {
    /// Fetch the entry matching (`input.institution`, `input.degree`),
    /// inserting it first if absent.
    ///
    /// Returns the row and whether it was created by this call.
    pub async fn get_or_create(
        pool: &PgPool,
        input: &NewEducation,
    ) -> Result<(Education, bool), sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM education WHERE institution = $1 AND degree = $2"
        );
        let existing = sqlx::query_as::<_, Education>(&query)
            .bind(&input.institution)
            .bind(&input.degree)
            .fetch_optional(pool)
            .await?;
        if let Some(education) = existing {
            return Ok((education, false));
        }

        let query = format!(
            "INSERT INTO education
                (institution, degree, field_of_study, start_date, end_date, is_current, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Education>(&query)
            .bind(&input.institution)
            .bind(&input.degree)
            .bind(&input.field_of_study)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_current)
            .bind(&input.description)
            .fetch_one(pool)
            .await?;
        Ok((created, true))
    }

    /// List education entries, most recent start date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education ORDER BY start_date DESC");
        sqlx::query_as::<_, Education>(&query).fetch_all(pool).await
    }

    /// Count education entries.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM education")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
