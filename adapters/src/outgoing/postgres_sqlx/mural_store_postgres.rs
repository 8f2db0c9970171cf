use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::instrument;

use atelier_application::{
    error::{AppError, AppResult},
    ports::outgoing::mural_store::MuralStorePort,
};
use domain::mural::{Mural, MuralId};

use super::utils::PostgresExecutor;

pub struct PostgresMuralStoreAdapter {
    pool: PgPool,
    executor: PostgresExecutor,
}

impl PostgresMuralStoreAdapter {
    pub fn new(pool: PgPool, query_timeout_secs: u64) -> Self {
        Self {
            pool,
            executor: PostgresExecutor::new(query_timeout_secs),
        }
    }
}

const MURAL_COLUMNS: &str =
    "id, title, description, location, year, display_order, images, created_at";

fn row_to_mural(row: &PgRow) -> AppResult<Mural> {
    let db_err = |e: sqlx::Error| AppError::DatabaseError {
        message: format!("Malformed murals row: {e}"),
    };

    Ok(Mural {
        id: MuralId::from_uuid(row.try_get("id").map_err(db_err)?),
        title: row.try_get("title").map_err(db_err)?,
        description: row.try_get("description").map_err(db_err)?,
        location: row.try_get("location").map_err(db_err)?,
        year: row.try_get("year").map_err(db_err)?,
        display_order: row.try_get("display_order").map_err(db_err)?,
        images: row.try_get("images").map_err(db_err)?,
        created_at: row.try_get("created_at").map_err(db_err)?,
    })
}

#[async_trait::async_trait]
impl MuralStorePort for PostgresMuralStoreAdapter {
    #[instrument(skip(self, mural))]
    async fn insert(&self, mural: &Mural) -> AppResult<Mural> {
        self.executor
            .execute_with_timeout(
                || {
                    sqlx::query(
                        r"
                        INSERT INTO murals
                            (id, title, description, location, year, display_order, images, created_at)
                        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                        ",
                    )
                    .bind(mural.id.as_uuid())
                    .bind(&mural.title)
                    .bind(&mural.description)
                    .bind(&mural.location)
                    .bind(mural.year)
                    .bind(mural.display_order)
                    .bind(&mural.images)
                    .bind(mural.created_at)
                    .execute(&self.pool)
                },
                "Failed to insert mural",
            )
            .await?;

        Ok(mural.clone())
    }

    #[instrument(skip(self, mural))]
    async fn update(&self, mural: &Mural) -> AppResult<Mural> {
        self.executor
            .execute_with_timeout(
                || {
                    sqlx::query(
                        r"
                        UPDATE murals
                        SET title = $2, description = $3, location = $4, year = $5,
                            display_order = $6
                        WHERE id = $1
                        ",
                    )
                    .bind(mural.id.as_uuid())
                    .bind(&mural.title)
                    .bind(&mural.description)
                    .bind(&mural.location)
                    .bind(mural.year)
                    .bind(mural.display_order)
                    .execute(&self.pool)
                },
                "Failed to update mural",
            )
            .await?;

        Ok(mural.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MuralId) -> AppResult<()> {
        self.executor
            .execute_with_timeout(
                || {
                    sqlx::query("DELETE FROM murals WHERE id = $1")
                        .bind(id.as_uuid())
                        .execute(&self.pool)
                },
                &format!("Failed to delete mural {}", id.as_uuid()),
            )
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MuralId) -> AppResult<Option<Mural>> {
        let sql = format!("SELECT {MURAL_COLUMNS} FROM murals WHERE id = $1");
        let row = self
            .executor
            .execute_with_timeout(
                || {
                    sqlx::query(&sql)
                        .bind(id.as_uuid())
                        .fetch_optional(&self.pool)
                },
                &format!("Failed to load mural {}", id.as_uuid()),
            )
            .await?;

        row.as_ref().map(row_to_mural).transpose()
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> AppResult<Vec<Mural>> {
        let sql = format!("SELECT {MURAL_COLUMNS} FROM murals ORDER BY created_at");
        let rows = self
            .executor
            .execute_with_timeout(
                || sqlx::query(&sql).fetch_all(&self.pool),
                "Failed to list murals",
            )
            .await?;

        rows.iter().map(row_to_mural).collect()
    }

    #[instrument(skip(self, images))]
    async fn update_images(&self, id: MuralId, images: &[String]) -> AppResult<()> {
        self.executor
            .execute_with_timeout(
                || {
                    sqlx::query("UPDATE murals SET images = $2 WHERE id = $1")
                        .bind(id.as_uuid())
                        .bind(images)
                        .execute(&self.pool)
                },
                &format!("Failed to update images for mural {}", id.as_uuid()),
            )
            .await?;
        Ok(())
    }
}
