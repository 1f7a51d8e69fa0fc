//! Personal information entity model and insert DTO.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `personal_info` table. Effectively a singleton.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PersonalInfo {
    pub id: DbId,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub short_bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub meta_title: String,
    pub meta_description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting personal information. Natural key: `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub short_bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub meta_title: String,
    pub meta_description: String,
}
