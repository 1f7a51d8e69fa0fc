//! Work experience entity model and insert DTO.

use chrono::NaiveDate;
use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `experiences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Experience {
    pub id: DbId,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: NaiveDate,
    /// `None` while the position is current.
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an experience. Natural key: (`company`, `position`).
#[derive(Debug, Clone, Deserialize)]
pub struct NewExperience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: String,
}
