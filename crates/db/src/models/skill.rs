//! Skill category and skill entity models and insert DTOs.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `skill_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillCategory {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a skill category. Natural key: `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSkillCategory {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub sort_order: i32,
}

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub category_id: DbId,
    /// Ordinal proficiency, 1-10.
    pub proficiency_level: i16,
    pub years_experience: f32,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a skill. Natural key: (`name`, `category_id`).
#[derive(Debug, Clone, Deserialize)]
pub struct NewSkill {
    pub name: String,
    pub category_id: DbId,
    pub proficiency_level: i16,
    pub years_experience: f32,
    pub is_featured: bool,
}
