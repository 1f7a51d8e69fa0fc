//! `portfolio-seeder` -- one-shot database population.
//!
//! Connects to PostgreSQL, applies migrations, and idempotently seeds the
//! portfolio dataset. Safe to re-run: existing rows are left untouched,
//! and an interrupted run is repaired by running again.
//!
//! # Environment variables
//!
//! | Variable       | Required | Description                  |
//! |----------------|----------|------------------------------|
//! | `DATABASE_URL` | yes      | PostgreSQL connection string |

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_seeder=info,portfolio_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable is required")?;

    let pool = portfolio_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    portfolio_db::health_check(&pool)
        .await
        .context("Database health check failed")?;

    portfolio_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    let report = portfolio_db::seed::run(&pool).await.context("Seeding failed")?;

    tracing::info!(
        personal_info_created = report.personal_info_created,
        categories = report.categories_created,
        skills = report.skills_created,
        experiences = report.experiences_created,
        education = report.education_created,
        projects = report.projects_created,
        technologies_linked = report.technologies_linked,
        technologies_skipped = report.technologies_skipped,
        "Successfully populated portfolio with CV data"
    );

    Ok(())
}
