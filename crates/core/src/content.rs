//! Portfolio document model.
//!
//! Serde types for the `portfolio_data.json` document that drives the page
//! handlers. The document has four top-level keys: `personal_info`,
//! `skills` (category name -> skill list), `projects`, and `experience`.
//!
//! Experience dates arrive as `YYYY-MM-DD` strings and are parsed into
//! [`chrono::NaiveDate`] at load time; an absent or empty string means "no
//! date". Project dates are displayed verbatim and stay strings.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The full portfolio document.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    /// Skill lists keyed by category name (`backend`, `data`, `devops`).
    pub skills: BTreeMap<String, Vec<SkillEntry>>,
    pub projects: Vec<ProjectEntry>,
    pub experience: Vec<ExperienceEntry>,
}

impl PortfolioData {
    /// Fixed fallback document served when the real one cannot be loaded.
    ///
    /// The sentinel `"Error"` name makes the failure visible in rendered
    /// pages without ever failing a request.
    pub fn fallback() -> Self {
        let mut skills = BTreeMap::new();
        for category in ["backend", "data", "devops"] {
            skills.insert(category.to_string(), Vec::new());
        }

        Self {
            personal_info: PersonalInfo {
                name: "Error".to_string(),
                title: "Portfolio".to_string(),
                summary: "Error loading data".to_string(),
                ..PersonalInfo::default()
            },
            skills,
            projects: Vec::new(),
            experience: Vec::new(),
        }
    }

    /// Skill list for a category, or an empty list if the key is missing.
    pub fn skills_in(&self, category: &str) -> Vec<SkillEntry> {
        self.skills.get(category).cloned().unwrap_or_default()
    }
}

/// Biographical and contact details. One per document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub short_bio: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
}

/// One skill inside a category list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkillEntry {
    pub name: String,
    /// Ordinal proficiency, 1-10.
    pub proficiency_level: u8,
    pub years_experience: f32,
    #[serde(default)]
    pub is_featured: bool,
}

/// One project record.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectEntry {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    /// Underscore token, e.g. `backend` or `data`.
    pub project_type: String,
    /// Underscore token, e.g. `completed` or `in_progress`.
    pub status: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// `personal` (the default when absent) or `professional`.
    #[serde(default)]
    pub group: Option<String>,
}

/// One work-history record.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "iso_date::deserialize")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "iso_date::deserialize")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Parse the document from its JSON text.
pub fn parse(raw: &str) -> Result<PortfolioData, serde_json::Error> {
    serde_json::from_str(raw)
}

/// `YYYY-MM-DD` string fields where absent or empty means `None`.
///
/// A present, non-empty, malformed string is an error: the whole document
/// load fails and the caller falls back to [`PortfolioData::fallback`].
mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_document() -> &'static str {
        r#"{
            "personal_info": {"name": "Jane Doe", "title": "Engineer"},
            "skills": {"backend": [{"name": "Rust", "proficiency_level": 8, "years_experience": 3.0}]},
            "projects": [],
            "experience": [
                {"company": "Acme", "position": "Dev", "start_date": "2022-09-01", "end_date": ""}
            ]
        }"#
    }

    #[test]
    fn parses_experience_dates() {
        let data = parse(minimal_document()).unwrap();
        let exp = &data.experience[0];
        assert_eq!(
            exp.start_date,
            Some(NaiveDate::from_ymd_opt(2022, 9, 1).unwrap())
        );
        assert_eq!(exp.end_date, None);
    }

    #[test]
    fn malformed_date_fails_parse() {
        let raw = r#"{
            "personal_info": {"name": "Jane Doe", "title": "Engineer"},
            "skills": {},
            "projects": [],
            "experience": [{"company": "Acme", "position": "Dev", "start_date": "last summer"}]
        }"#;
        assert!(parse(raw).is_err());
    }

    #[test]
    fn missing_top_level_key_fails_parse() {
        assert!(parse(r#"{"personal_info": {"name": "J", "title": "E"}}"#).is_err());
    }

    #[test]
    fn fallback_document_shape() {
        let data = PortfolioData::fallback();
        assert_eq!(data.personal_info.name, "Error");
        assert_eq!(data.personal_info.title, "Portfolio");
        assert_eq!(data.personal_info.summary, "Error loading data");
        assert!(data.projects.is_empty());
        assert!(data.experience.is_empty());
        for category in ["backend", "data", "devops"] {
            assert!(data.skills.contains_key(category));
            assert!(data.skills_in(category).is_empty());
        }
    }

    #[test]
    fn skills_in_missing_category_is_empty() {
        let data = parse(minimal_document()).unwrap();
        assert_eq!(data.skills_in("backend").len(), 1);
        assert!(data.skills_in("devops").is_empty());
    }

    #[test]
    fn project_group_defaults_to_none() {
        let raw = r#"{
            "personal_info": {"name": "J", "title": "E"},
            "skills": {},
            "projects": [{
                "id": 1, "title": "T", "slug": "t", "description": "d",
                "project_type": "backend", "status": "completed"
            }],
            "experience": []
        }"#;
        let data = parse(raw).unwrap();
        assert_eq!(data.projects[0].group, None);
        assert!(!data.projects[0].featured);
    }
}
