//! Project entity model and insert DTO.

use chrono::NaiveDate;
use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub long_description: String,
    /// Underscore token, e.g. `backend` or `data`.
    pub project_type: String,
    /// Underscore token, e.g. `completed` or `in_progress`.
    pub status: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_featured: bool,
    /// `personal` or `professional`; `NULL` means personal by default.
    pub project_group: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a project. Natural key: `slug`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub long_description: String,
    pub project_type: String,
    pub status: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_featured: bool,
    pub project_group: Option<String>,
}
