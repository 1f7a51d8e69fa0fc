//! Repository for the `personal_info` table.

use sqlx::PgPool;

use crate::models::personal_info::{NewPersonalInfo, PersonalInfo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, title, bio, short_bio, email, phone, location, \
     linkedin_url, github_url, meta_title, meta_description, created_at, updated_at";

/// Provides get-or-create and read operations for personal information.
pub struct PersonalInfoRepo;

impl PersonalInfoRepo {
    /// Fetch the row matching `input.name`, inserting it first if absent.
    ///
    /// Returns the row and whether it was created by this call.
    pub async fn get_or_create(
        pool: &PgPool,
        input: &NewPersonalInfo,
    ) -> Result<(PersonalInfo, bool), sqlx::Error> {
        if let Some(existing) = Self::find_by_name(pool, &input.name).await? {
            return Ok((existing, false));
        }

        let query = format!(
            "INSERT INTO personal_info
                (name, title, bio, short_bio, email, phone, location,
                 linkedin_url, github_url, meta_title, meta_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, PersonalInfo>(&query)
            .bind(&input.name)
            .bind(&input.title)
            .bind(&input.bio)
            .bind(&input.short_bio)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.location)
            .bind(&input.linkedin_url)
            .bind(&input.github_url)
            .bind(&input.meta_title)
            .bind(&input.meta_description)
            .fetch_one(pool)
            .await?;
        Ok((created, true))
    }

    /// Find personal information by name.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<PersonalInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personal_info WHERE name = $1");
        sqlx::query_as::<_, PersonalInfo>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Count personal information rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM personal_info")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
