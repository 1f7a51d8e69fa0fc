//! Repository for the `skill_categories` table.

use sqlx::PgPool;

use crate::models::skill::{NewSkillCategory, SkillCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, icon, color, sort_order, created_at, updated_at";

/// Provides get-or-create and read operations for skill categories.
pub struct SkillCategoryRepo;

impl SkillCategoryRepo {
    /// Fetch the category matching `input.name`, inserting it first if absent.
    ///
    /// Returns the row and whether it was created by this call.
    pub async fn get_or_create(
        pool: &PgPool,
        input: &NewSkillCategory,
    ) -> Result<(SkillCategory, bool), sqlx::Error> {
        if let Some(existing) = Self::find_by_name(pool, &input.name).await? {
            return Ok((existing, false));
        }

        let query = format!(
            "INSERT INTO skill_categories (name, description, icon, color, sort_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, SkillCategory>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.color)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await?;
        Ok((created, true))
    }

    /// Find a category by name.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<SkillCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skill_categories WHERE name = $1");
        sqlx::query_as::<_, SkillCategory>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all categories in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<SkillCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skill_categories ORDER BY sort_order ASC");
        sqlx::query_as::<_, SkillCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Count skill categories.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM skill_categories")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
