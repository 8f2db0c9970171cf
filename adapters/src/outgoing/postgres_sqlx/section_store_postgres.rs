use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::instrument;

use atelier_application::{
    error::{AppError, AppResult},
    ports::outgoing::section_store::SectionStorePort,
};
use domain::section::Section;

use super::utils::PostgresExecutor;

pub struct PostgresSectionStoreAdapter {
    pool: PgPool,
    executor: PostgresExecutor,
}

impl PostgresSectionStoreAdapter {
    pub fn new(pool: PgPool, query_timeout_secs: u64) -> Self {
        Self {
            pool,
            executor: PostgresExecutor::new(query_timeout_secs),
        }
    }
}

fn row_to_section(row: &PgRow) -> AppResult<Section> {
    let db_err = |e: sqlx::Error| AppError::DatabaseError {
        message: format!("Malformed sections row: {e}"),
    };

    Ok(Section {
        slug: row.try_get("slug").map_err(db_err)?,
        title: row.try_get("title").map_err(db_err)?,
        description: row.try_get("description").map_err(db_err)?,
    })
}

#[async_trait::async_trait]
impl SectionStorePort for PostgresSectionStoreAdapter {
    #[instrument(skip(self, section))]
    async fn upsert(&self, section: &Section) -> AppResult<Section> {
        self.executor
            .execute_with_timeout(
                || {
                    sqlx::query(
                        r"
                        INSERT INTO sections (slug, title, description)
                        VALUES ($1, $2, $3)
                        ON CONFLICT (slug) DO UPDATE SET
                            title = EXCLUDED.title,
                            description = EXCLUDED.description
                        ",
                    )
                    .bind(&section.slug)
                    .bind(&section.title)
                    .bind(&section.description)
                    .execute(&self.pool)
                },
                "Failed to upsert section",
            )
            .await?;

        Ok(section.clone())
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Section>> {
        let row = self
            .executor
            .execute_with_timeout(
                || {
                    sqlx::query("SELECT slug, title, description FROM sections WHERE slug = $1")
                        .bind(slug)
                        .fetch_optional(&self.pool)
                },
                &format!("Failed to load section '{slug}'"),
            )
            .await?;

        row.as_ref().map(row_to_section).transpose()
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> AppResult<Vec<Section>> {
        let rows = self
            .executor
            .execute_with_timeout(
                || {
                    sqlx::query("SELECT slug, title, description FROM sections ORDER BY slug")
                        .fetch_all(&self.pool)
                },
                "Failed to list sections",
            )
            .await?;

        rows.iter().map(row_to_section).collect()
    }
}
