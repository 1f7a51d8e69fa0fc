//! One-shot, idempotent population of the portfolio database.
//!
//! Every write goes through a get-or-create repository keyed by the
//! entity's natural identifier, so re-running [`run`] creates nothing new.
//! Technology links are resolved by skill-name lookup; a reference to a
//! skill that was never seeded is skipped rather than failing the run.
//! There is no transaction across the whole run: an interrupted seed is
//! repaired by simply running it again.

use chrono::NaiveDate;
use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::education::NewEducation;
use crate::models::experience::NewExperience;
use crate::models::personal_info::NewPersonalInfo;
use crate::models::project::NewProject;
use crate::models::skill::{NewSkill, NewSkillCategory};
use crate::repositories::{
    EducationRepo, ExperienceRepo, PersonalInfoRepo, ProjectRepo, SkillCategoryRepo, SkillRepo,
};

/// What a seed run actually did. All counters are this-run only.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub personal_info_created: bool,
    pub categories_created: usize,
    pub skills_created: usize,
    pub experiences_created: usize,
    pub education_created: usize,
    pub projects_created: usize,
    pub technologies_linked: usize,
    pub technologies_skipped: usize,
}

/// Seed the database with the fixed CV dataset.
pub async fn run(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
    let mut report = SeedReport::default();

    let (_, created) = PersonalInfoRepo::get_or_create(pool, &personal_info()).await?;
    report.personal_info_created = created;
    if created {
        tracing::info!("Created personal information");
    } else {
        tracing::info!("Personal information already exists");
    }

    for (category, skills) in skill_groups() {
        let (category_row, created) = SkillCategoryRepo::get_or_create(pool, &category).await?;
        if created {
            report.categories_created += 1;
        }
        for (name, proficiency_level, years_experience, is_featured) in skills {
            let skill = NewSkill {
                name: name.to_string(),
                category_id: category_row.id,
                proficiency_level,
                years_experience,
                is_featured,
            };
            let (_, created) = SkillRepo::get_or_create(pool, &skill).await?;
            if created {
                report.skills_created += 1;
            }
        }
    }
    tracing::info!(
        categories = report.categories_created,
        skills = report.skills_created,
        "Seeded skill catalog"
    );

    for (experience, technologies) in experiences() {
        let (row, created) = ExperienceRepo::get_or_create(pool, &experience).await?;
        if created {
            report.experiences_created += 1;
            let (linked, skipped) =
                link_experience_technologies(pool, row.id, &technologies).await?;
            report.technologies_linked += linked;
            report.technologies_skipped += skipped;
        }
    }

    for education in education_entries() {
        let (_, created) = EducationRepo::get_or_create(pool, &education).await?;
        if created {
            report.education_created += 1;
        }
    }

    for (project, technologies) in projects() {
        let (row, created) = ProjectRepo::get_or_create(pool, &project).await?;
        if created {
            report.projects_created += 1;
            let (linked, skipped) = link_project_technologies(pool, row.id, &technologies).await?;
            report.technologies_linked += linked;
            report.technologies_skipped += skipped;
        }
    }

    tracing::info!(
        experiences = report.experiences_created,
        education = report.education_created,
        projects = report.projects_created,
        links = report.technologies_linked,
        skipped = report.technologies_skipped,
        "Portfolio seed complete"
    );
    Ok(report)
}

/// Link named technologies to an experience, skipping unknown skill names.
///
/// Returns `(linked, skipped)` counts.
pub async fn link_experience_technologies(
    pool: &PgPool,
    experience_id: DbId,
    names: &[&str],
) -> Result<(usize, usize), sqlx::Error> {
    let mut linked = 0;
    let mut skipped = 0;
    for name in names {
        match SkillRepo::find_by_name(pool, name).await? {
            Some(skill) => {
                if ExperienceRepo::link_technology(pool, experience_id, skill.id).await? {
                    linked += 1;
                }
            }
            None => {
                tracing::debug!(technology = name, "Skipping unknown technology reference");
                skipped += 1;
            }
        }
    }
    Ok((linked, skipped))
}

/// Link named technologies to a project, skipping unknown skill names.
///
/// Returns `(linked, skipped)` counts.
pub async fn link_project_technologies(
    pool: &PgPool,
    project_id: DbId,
    names: &[&str],
) -> Result<(usize, usize), sqlx::Error> {
    let mut linked = 0;
    let mut skipped = 0;
    for name in names {
        match SkillRepo::find_by_name(pool, name).await? {
            Some(skill) => {
                if ProjectRepo::link_technology(pool, project_id, skill.id).await? {
                    linked += 1;
                }
            }
            None => {
                tracing::debug!(technology = name, "Skipping unknown technology reference");
                skipped += 1;
            }
        }
    }
    Ok((linked, skipped))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn personal_info() -> NewPersonalInfo {
    NewPersonalInfo {
        name: "Kamil Stańkowski".to_string(),
        title: "Software Engineer | Backend Developer | Data Engineer".to_string(),
        bio: "Dynamic and detail-oriented Back End and Data Engineer with over 5 years of \
              experience in software engineering, specializing in building robust backend \
              systems and data processing solutions. Proficient in a range of programming \
              languages and tools, committed to leveraging big data technologies to enhance \
              business operations."
            .to_string(),
        short_bio: "Software Engineer specializing in Backend, Data Engineering, and DevOps \
                    with 5+ years of experience."
            .to_string(),
        email: "kamilstankowski98@gmail.com".to_string(),
        phone: "660 235 016".to_string(),
        location: "Warsaw, Poland".to_string(),
        linkedin_url: "https://www.linkedin.com/in/kamil-sta%C5%84kowski-8b1a661b9/".to_string(),
        github_url: "https://github.com/m2gnvm".to_string(),
        meta_title: "Kamil Stańkowski - Software Engineer".to_string(),
        meta_description: "Software Engineer specializing in Backend, Data Engineering, and \
                           DevOps. 5+ years experience with Python, Django, FastAPI, PySpark, \
                           Kafka, Docker, and Kubernetes."
            .to_string(),
    }
}

/// Skill tuples are (name, proficiency 1-10, years of experience, featured).
type SkillSpec = (&'static str, i16, f32, bool);

fn skill_groups() -> Vec<(NewSkillCategory, Vec<SkillSpec>)> {
    vec![
        (
            NewSkillCategory {
                name: "Backend Development".to_string(),
                description: "Server-side development, APIs, and backend systems".to_string(),
                icon: "fas fa-server".to_string(),
                color: "#007bff".to_string(),
                sort_order: 1,
            },
            vec![
                ("Python", 9, 5.0, true),
                ("Django", 8, 4.0, true),
                ("FastAPI", 8, 2.0, true),
                ("RESTful API", 8, 4.0, true),
                ("PostgreSQL", 7, 4.0, false),
                ("MySQL", 7, 3.0, false),
                ("Redis", 6, 2.0, false),
                ("PHP", 6, 2.0, false),
            ],
        ),
        (
            NewSkillCategory {
                name: "Data Engineering".to_string(),
                description: "Big data processing, ETL pipelines, and data analytics".to_string(),
                icon: "fas fa-database".to_string(),
                color: "#28a745".to_string(),
                sort_order: 2,
            },
            vec![
                ("PySpark", 8, 3.0, true),
                ("Kafka", 7, 2.0, true),
                ("Hadoop", 6, 2.0, true),
                ("MongoDB", 7, 3.0, false),
                ("Pandas", 8, 4.0, false),
                ("NumPy", 7, 4.0, false),
                ("Airflow", 6, 2.0, false),
            ],
        ),
        (
            NewSkillCategory {
                name: "DevOps & Cloud".to_string(),
                description: "Containerization, orchestration, and cloud platforms".to_string(),
                icon: "fas fa-cloud".to_string(),
                color: "#17a2b8".to_string(),
                sort_order: 3,
            },
            vec![
                ("Docker", 8, 3.0, true),
                ("Kubernetes", 6, 1.0, true),
                ("Linux", 7, 5.0, true),
                ("AWS", 6, 2.0, false),
                ("Git", 8, 5.0, false),
                ("Selenium", 6, 2.0, false),
            ],
        ),
    ]
}

fn experiences() -> Vec<(NewExperience, Vec<&'static str>)> {
    vec![
        (
            NewExperience {
                company: "Cyfrowy Polsat S.A.".to_string(),
                position: "Back-End | BI Developer".to_string(),
                location: "Warsaw, Poland".to_string(),
                start_date: date(2024, 12, 1),
                end_date: None,
                is_current: true,
                description: "Design and develop BI pipelines to process and analyze data from \
                              the Polsat Box Go platform. Build REST endpoints to distribute \
                              and expose business data. Create data models and reporting \
                              solutions to support business intelligence needs."
                    .to_string(),
            },
            vec![
                "Python",
                "PostgreSQL",
                "PySpark",
                "Kafka",
                "Redis",
                "MongoDB",
                "Docker",
                "RESTful API",
            ],
        ),
        (
            NewExperience {
                company: "REDS S.A.".to_string(),
                position: "Back-End | Data Engineer".to_string(),
                location: "Warsaw, Poland".to_string(),
                start_date: date(2022, 9, 1),
                end_date: Some(date(2024, 11, 30)),
                is_current: false,
                description: "Built real-time data processing pipelines with PySpark for \
                              ingesting and transforming streaming data. Designed and \
                              documented data models and flows to improve architecture. \
                              Developed an end-to-end data warehouse integrating Kafka and \
                              PySpark for analytics. Delivered ETL pipelines to process and \
                              analyze railway telemetry in near real-time."
                    .to_string(),
            },
            vec!["PySpark", "Kafka", "Hadoop", "Airflow"],
        ),
        (
            NewExperience {
                company: "Abis Sp. z o.o.".to_string(),
                position: "Software Engineer".to_string(),
                location: "Warsaw, Poland".to_string(),
                start_date: date(2020, 6, 1),
                end_date: Some(date(2022, 8, 31)),
                is_current: false,
                description: "Develop backend systems and optimize database infrastructure. \
                              Build reporting platforms and analytical dashboards. Design and \
                              maintain MySQL databases and schemas. Automate workflows with \
                              Python scripts and PyQt applications. Support PHP-based web \
                              development and system integrations."
                    .to_string(),
            },
            vec!["MySQL", "Python", "PyQt", "PHP", "Linux"],
        ),
        (
            NewExperience {
                company: "Giganci Programowania".to_string(),
                position: "Programming Teacher".to_string(),
                location: "Warsaw, Poland".to_string(),
                start_date: date(2020, 3, 1),
                end_date: Some(date(2022, 6, 30)),
                is_current: false,
                description: "Taught programming concepts and best practices to students. \
                              Developed curriculum and learning materials for various \
                              programming languages and frameworks."
                    .to_string(),
            },
            vec!["Python", "Django", "JavaScript"],
        ),
    ]
}

fn education_entries() -> Vec<NewEducation> {
    vec![
        NewEducation {
            institution: "Warsaw University of Life Sciences".to_string(),
            degree: "Master of Science".to_string(),
            field_of_study: "Computer Science and Econometrics".to_string(),
            start_date: date(2023, 10, 1),
            end_date: None,
            is_current: true,
            description: "Specialization: Big Data".to_string(),
        },
        NewEducation {
            institution: "Military University of Technology".to_string(),
            degree: "Master of Science in Engineering".to_string(),
            field_of_study: "Electronics and Telecommunication".to_string(),
            start_date: date(2022, 3, 1),
            end_date: Some(date(2024, 7, 31)),
            is_current: false,
            description: "Specialization: Safety Systems Engineering".to_string(),
        },
        NewEducation {
            institution: "Warsaw University of Technology".to_string(),
            degree: "Bachelor of Science in Engineering".to_string(),
            field_of_study: "Electronics".to_string(),
            start_date: date(2017, 10, 1),
            end_date: Some(date(2022, 2, 28)),
            is_current: false,
            description: "Specialization: Electronics and Computer Engineering".to_string(),
        },
    ]
}

fn projects() -> Vec<(NewProject, Vec<&'static str>)> {
    vec![
        (
            NewProject {
                title: "Elemental Circle Game Backend".to_string(),
                slug: "elemental-circle-game".to_string(),
                description: "A strategic card game with elemental combat system built with \
                              FastAPI, PostgreSQL, and Redis using a hybrid architecture for \
                              optimal performance."
                    .to_string(),
                long_description: "This project showcases advanced backend development skills \
                                   including real-time multiplayer functionality, hybrid \
                                   database architecture, and scalable system design. The game \
                                   features WebSocket support for live gameplay, JWT-based \
                                   authentication, and a sophisticated elemental combat system."
                    .to_string(),
                project_type: "backend".to_string(),
                status: "completed".to_string(),
                github_url: Some("https://github.com/m2gnvm/elemental-circle-game".to_string()),
                live_url: None,
                start_date: date(2024, 1, 1),
                end_date: Some(date(2024, 6, 30)),
                is_featured: true,
                project_group: None,
            },
            vec!["Python", "FastAPI", "PostgreSQL", "Redis", "Docker"],
        ),
        (
            NewProject {
                title: "Railway Eco-Driving Advisory System".to_string(),
                slug: "railway-eco-driving-system".to_string(),
                description: "Real-time data processing system for railway telemetry with \
                              PySpark and Kafka integration."
                    .to_string(),
                long_description: "Developed an end-to-end data warehouse integrating Kafka and \
                                   PySpark for analytics. Built real-time data processing \
                                   pipelines for ingesting and transforming streaming data from \
                                   railway systems. Implemented ETL pipelines to process and \
                                   analyze railway telemetry in near real-time."
                    .to_string(),
                project_type: "data".to_string(),
                status: "completed".to_string(),
                github_url: None,
                live_url: None,
                start_date: date(2022, 9, 1),
                end_date: Some(date(2024, 11, 30)),
                is_featured: true,
                project_group: Some("professional".to_string()),
            },
            vec!["PySpark", "Kafka", "Hadoop", "Airflow"],
        ),
        (
            NewProject {
                title: "ABIS.PL Backend Platform".to_string(),
                slug: "abis-backend-platform".to_string(),
                description: "Comprehensive backend system with reporting platforms and \
                              analytical dashboards."
                    .to_string(),
                long_description: "Developed and maintained the backend infrastructure for the \
                                   ABIS.PL platform. Built reporting platforms and analytical \
                                   dashboards for business intelligence. Optimized database \
                                   infrastructure and automated workflows with Python scripts."
                    .to_string(),
                project_type: "backend".to_string(),
                status: "completed".to_string(),
                github_url: None,
                live_url: None,
                start_date: date(2020, 6, 1),
                end_date: Some(date(2022, 8, 31)),
                is_featured: false,
                project_group: Some("professional".to_string()),
            },
            vec!["Python", "MySQL", "PHP", "Linux"],
        ),
    ]
}
