//! Handlers for the portfolio pages.
//!
//! Each handler is a pure function of the loaded portfolio document:
//! load, apply a small filter or slice, and wrap the result in a
//! [`PageResponse`] envelope. The document is read from disk on every
//! request; a load failure of any kind serves the fallback document so
//! pages never error out on bad data.

use axum::extract::{Path, State};
use axum::Json;
use portfolio_core::content::{
    ExperienceEntry, PersonalInfo, PortfolioData, ProjectEntry, SkillEntry,
};
use portfolio_core::error::CoreError;
use portfolio_core::{loader, text};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::PageResponse;
use crate::state::AppState;

/// How many projects the homepage highlights. Positional, not ranked.
const FEATURED_PROJECT_COUNT: usize = 3;

/// Load the portfolio document, serving the fallback on any failure.
fn load_portfolio(state: &AppState) -> PortfolioData {
    let path = loader::resolve_data_path(&state.config.data_path);
    loader::try_load(&path).unwrap_or_else(|err| {
        tracing::warn!(
            error = %err,
            path = %path.display(),
            "Failed to load portfolio data, serving fallback"
        );
        PortfolioData::fallback()
    })
}

/// A project enriched with display labels for its underscore tokens.
#[derive(Debug, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: ProjectEntry,
    pub type_label: String,
    pub status_label: String,
}

impl From<ProjectEntry> for ProjectView {
    fn from(project: ProjectEntry) -> Self {
        let type_label = text::status_label(&project.project_type);
        let status_label = text::status_label(&project.status);
        Self {
            project,
            type_label,
            status_label,
        }
    }
}

/// Split projects into the personal and professional partitions.
///
/// A missing `group` means personal; `professional` must be explicit.
/// Any other group value lands in neither partition.
fn partition_projects(projects: &[ProjectEntry]) -> (Vec<ProjectView>, Vec<ProjectView>) {
    let personal = projects
        .iter()
        .filter(|p| p.group.as_deref().unwrap_or("personal") == "personal")
        .cloned()
        .map(ProjectView::from)
        .collect();
    let professional = projects
        .iter()
        .filter(|p| p.group.as_deref() == Some("professional"))
        .cloned()
        .map(ProjectView::from)
        .collect();
    (personal, professional)
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HomeContext {
    pub personal_info: PersonalInfo,
    /// Title split on `|`, e.g. `["Software Engineer", "Backend Developer"]`.
    pub roles: Vec<String>,
    pub featured_projects: Vec<ProjectEntry>,
    pub backend_skills: Vec<SkillEntry>,
    pub data_skills: Vec<SkillEntry>,
    pub devops_skills: Vec<SkillEntry>,
    pub recent_experience: Option<ExperienceEntry>,
}

/// GET /
pub async fn home(State(state): State<AppState>) -> Json<PageResponse<HomeContext>> {
    let data = load_portfolio(&state);

    let featured_projects = data
        .projects
        .iter()
        .take(FEATURED_PROJECT_COUNT)
        .cloned()
        .collect();
    let recent_experience = data.experience.first().cloned();
    let roles = text::split_list(&data.personal_info.title, '|');

    Json(PageResponse::new(
        "home.html",
        HomeContext {
            roles,
            featured_projects,
            backend_skills: data.skills_in("backend"),
            data_skills: data.skills_in("data"),
            devops_skills: data.skills_in("devops"),
            recent_experience,
            personal_info: data.personal_info,
        },
    ))
}

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AboutContext {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<ExperienceEntry>,
}

/// GET /about
pub async fn about(State(state): State<AppState>) -> Json<PageResponse<AboutContext>> {
    let data = load_portfolio(&state);

    Json(PageResponse::new(
        "about.html",
        AboutContext {
            experiences: data.experience,
            personal_info: data.personal_info,
        },
    ))
}

// ---------------------------------------------------------------------------
// Projects listing
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ProjectsContext {
    pub personal_info: PersonalInfo,
    pub personal_projects: Vec<ProjectView>,
    pub professional_projects: Vec<ProjectView>,
}

/// GET /projects
pub async fn projects(State(state): State<AppState>) -> Json<PageResponse<ProjectsContext>> {
    let data = load_portfolio(&state);

    let (personal_projects, professional_projects) = partition_projects(&data.projects);

    Json(PageResponse::new(
        "projects.html",
        ProjectsContext {
            personal_projects,
            professional_projects,
            personal_info: data.personal_info,
        },
    ))
}

// ---------------------------------------------------------------------------
// Project detail
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ProjectDetailContext {
    pub personal_info: PersonalInfo,
    pub project: ProjectView,
}

/// GET /projects/{id}
pub async fn project_detail(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> AppResult<Json<PageResponse<ProjectDetailContext>>> {
    let data = load_portfolio(&state);

    let project = data
        .projects
        .iter()
        .find(|p| p.id == project_id)
        .cloned()
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    Ok(Json(PageResponse::new(
        "project_detail.html",
        ProjectDetailContext {
            project: ProjectView::from(project),
            personal_info: data.personal_info,
        },
    )))
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SkillsContext {
    pub personal_info: PersonalInfo,
    pub backend_skills: Vec<SkillEntry>,
    pub data_skills: Vec<SkillEntry>,
    pub devops_skills: Vec<SkillEntry>,
}

/// GET /skills
pub async fn skills(State(state): State<AppState>) -> Json<PageResponse<SkillsContext>> {
    let data = load_portfolio(&state);

    Json(PageResponse::new(
        "skills.html",
        SkillsContext {
            backend_skills: data.skills_in("backend"),
            data_skills: data.skills_in("data"),
            devops_skills: data.skills_in("devops"),
            personal_info: data.personal_info,
        },
    ))
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ContactContext {
    pub personal_info: PersonalInfo,
}

/// GET /contact
pub async fn contact(State(state): State<AppState>) -> Json<PageResponse<ContactContext>> {
    let data = load_portfolio(&state);

    Json(PageResponse::new(
        "contact.html",
        ContactContext {
            personal_info: data.personal_info,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: i64, group: Option<&str>) -> ProjectEntry {
        ProjectEntry {
            id,
            title: format!("Project {id}"),
            slug: format!("project-{id}"),
            description: String::new(),
            long_description: String::new(),
            project_type: "backend".to_string(),
            status: "in_progress".to_string(),
            technologies: Vec::new(),
            github_url: None,
            live_url: None,
            start_date: None,
            end_date: None,
            featured: false,
            group: group.map(str::to_string),
        }
    }

    #[test]
    fn absent_group_is_personal() {
        let (personal, professional) = partition_projects(&[project(1, None)]);
        assert_eq!(personal.len(), 1);
        assert!(professional.is_empty());
    }

    #[test]
    fn professional_group_is_explicit() {
        let (personal, professional) = partition_projects(&[project(1, Some("professional"))]);
        assert!(personal.is_empty());
        assert_eq!(professional.len(), 1);
    }

    #[test]
    fn unknown_group_lands_nowhere() {
        let (personal, professional) = partition_projects(&[project(1, Some("other"))]);
        assert!(personal.is_empty());
        assert!(professional.is_empty());
    }

    #[test]
    fn partitions_preserve_order() {
        let projects = [
            project(1, None),
            project(2, Some("professional")),
            project(3, Some("personal")),
            project(4, Some("professional")),
        ];
        let (personal, professional) = partition_projects(&projects);
        let personal_ids: Vec<_> = personal.iter().map(|v| v.project.id).collect();
        let professional_ids: Vec<_> = professional.iter().map(|v| v.project.id).collect();
        assert_eq!(personal_ids, vec![1, 3]);
        assert_eq!(professional_ids, vec![2, 4]);
    }

    #[test]
    fn project_view_labels() {
        let view = ProjectView::from(project(1, None));
        assert_eq!(view.type_label, "Backend");
        assert_eq!(view.status_label, "In Progress");
    }
}
