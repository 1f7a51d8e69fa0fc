//! Repository for the `skills` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{NewSkill, Skill};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, category_id, proficiency_level, years_experience, is_featured, \
     created_at, updated_at";

/// Provides get-or-create and read operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// Fetch the skill matching (`input.name`, `input.category_id`),
    /// inserting it first if absent.
    ///
    /// Returns the row and whether it was created by this call.
    pub async fn get_or_create(
        pool: &PgPool,
        input: &NewSkill,
    ) -> Result<(Skill, bool), sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills WHERE name = $1 AND category_id = $2"
        );
        let existing = sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await?;
        if let Some(skill) = existing {
            return Ok((skill, false));
        }

        let query = format!(
            "INSERT INTO skills (name, category_id, proficiency_level, years_experience, is_featured)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(input.category_id)
            .bind(input.proficiency_level)
            .bind(input.years_experience)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await?;
        Ok((created, true))
    }

    /// Find a skill by name alone, used to resolve technology references.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE name = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List skills in a category, featured first, then by name.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills WHERE category_id = $1
             ORDER BY is_featured DESC, name ASC"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Count skills.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM skills")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
