use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::instrument;

use domain::artwork::{ArtPiece, ArtPieceId, ArtworkStatus};
use domain::color::{Palette, palette_from_css, palette_to_css};
use atelier_application::{
    error::{AppError, AppResult},
    ports::outgoing::art_store::ArtStorePort,
};

use super::utils::{PostgresExecutor, is_unique_violation};

pub struct PostgresArtStoreAdapter {
    pool: PgPool,
    executor: PostgresExecutor,
}

impl PostgresArtStoreAdapter {
    pub fn new(pool: PgPool, query_timeout_secs: u64) -> Self {
        Self {
            pool,
            executor: PostgresExecutor::new(query_timeout_secs),
        }
    }
}

const ART_PIECE_COLUMNS: &str = "id, slug, name, description, dimensions, price, year, status, \
                                 video_url, main_image, images, palette, created_at";

fn row_to_art_piece(row: &PgRow) -> AppResult<ArtPiece> {
    let db_err = |e: sqlx::Error| AppError::DatabaseError {
        message: format!("Malformed art_pieces row: {e}"),
    };

    let status_raw: String = row.try_get("status").map_err(db_err)?;
    let palette_raw: Vec<String> = row.try_get("palette").map_err(db_err)?;

    Ok(ArtPiece {
        id: ArtPieceId::from_uuid(row.try_get("id").map_err(db_err)?),
        slug: row.try_get("slug").map_err(db_err)?,
        name: row.try_get("name").map_err(db_err)?,
        description: row.try_get("description").map_err(db_err)?,
        dimensions: row.try_get("dimensions").map_err(db_err)?,
        price: row.try_get("price").map_err(db_err)?,
        year: row.try_get("year").map_err(db_err)?,
        status: ArtworkStatus::parse(&status_raw)?,
        video_url: row.try_get("video_url").map_err(db_err)?,
        main_image: row.try_get("main_image").map_err(db_err)?,
        images: row.try_get("images").map_err(db_err)?,
        palette: palette_from_css(&palette_raw)?,
        created_at: row.try_get("created_at").map_err(db_err)?,
    })
}

#[async_trait::async_trait]
impl ArtStorePort for PostgresArtStoreAdapter {
    #[instrument(skip(self, piece))]
    async fn insert(&self, piece: &ArtPiece) -> AppResult<ArtPiece> {
        let slug = piece.slug.clone();
        self.executor
            .execute_with_timeout_map_err(
                || {
                    sqlx::query(
                        r"
                        INSERT INTO art_pieces
                            (id, slug, name, description, dimensions, price, year, status,
                             video_url, main_image, images, palette, created_at)
                        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                        ",
                    )
                    .bind(piece.id.as_uuid())
                    .bind(&piece.slug)
                    .bind(&piece.name)
                    .bind(&piece.description)
                    .bind(&piece.dimensions)
                    .bind(piece.price)
                    .bind(piece.year)
                    .bind(piece.status.as_str())
                    .bind(&piece.video_url)
                    .bind(&piece.main_image)
                    .bind(&piece.images)
                    .bind(palette_to_css(&piece.palette))
                    .bind(piece.created_at)
                    .execute(&self.pool)
                },
                |e| {
                    if is_unique_violation(&e) {
                        AppError::Conflict {
                            message: format!("slug '{slug}' is already taken"),
                        }
                    } else {
                        AppError::DatabaseError {
                            message: format!("Failed to insert art piece: {e}"),
                        }
                    }
                },
            )
            .await?;

        Ok(piece.clone())
    }

    #[instrument(skip(self, piece))]
    async fn update(&self, piece: &ArtPiece) -> AppResult<ArtPiece> {
        let slug = piece.slug.clone();
        self.executor
            .execute_with_timeout_map_err(
                || {
                    sqlx::query(
                        r"
                        UPDATE art_pieces
                        SET slug = $2, name = $3, description = $4, dimensions = $5,
                            price = $6, year = $7, status = $8, video_url = $9
                        WHERE id = $1
                        ",
                    )
                    .bind(piece.id.as_uuid())
                    .bind(&piece.slug)
                    .bind(&piece.name)
                    .bind(&piece.description)
                    .bind(&piece.dimensions)
                    .bind(piece.price)
                    .bind(piece.year)
                    .bind(piece.status.as_str())
                    .bind(&piece.video_url)
                    .execute(&self.pool)
                },
                |e| {
                    if is_unique_violation(&e) {
                        AppError::Conflict {
                            message: format!("slug '{slug}' is already taken"),
                        }
                    } else {
                        AppError::DatabaseError {
                            message: format!("Failed to update art piece: {e}"),
                        }
                    }
                },
            )
            .await?;

        Ok(piece.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ArtPieceId) -> AppResult<()> {
        self.executor
            .execute_with_timeout(
                || {
                    sqlx::query("DELETE FROM art_pieces WHERE id = $1")
                        .bind(id.as_uuid())
                        .execute(&self.pool)
                },
                &format!("Failed to delete art piece {}", id.as_uuid()),
            )
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ArtPieceId) -> AppResult<Option<ArtPiece>> {
        let sql = format!("SELECT {ART_PIECE_COLUMNS} FROM art_pieces WHERE id = $1");
        let row = self
            .executor
            .execute_with_timeout(
                || {
                    sqlx::query(&sql)
                        .bind(id.as_uuid())
                        .fetch_optional(&self.pool)
                },
                &format!("Failed to load art piece {}", id.as_uuid()),
            )
            .await?;

        row.as_ref().map(row_to_art_piece).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<ArtPiece>> {
        let sql = format!("SELECT {ART_PIECE_COLUMNS} FROM art_pieces WHERE slug = $1");
        let row = self
            .executor
            .execute_with_timeout(
                || sqlx::query(&sql).bind(slug).fetch_optional(&self.pool),
                &format!("Failed to load art piece '{slug}'"),
            )
            .await?;

        row.as_ref().map(row_to_art_piece).transpose()
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> AppResult<Vec<ArtPiece>> {
        let sql = format!("SELECT {ART_PIECE_COLUMNS} FROM art_pieces ORDER BY created_at");
        let rows = self
            .executor
            .execute_with_timeout(
                || sqlx::query(&sql).fetch_all(&self.pool),
                "Failed to list art pieces",
            )
            .await?;

        rows.iter().map(row_to_art_piece).collect()
    }

    #[instrument(skip(self, images))]
    async fn update_images(&self, id: ArtPieceId, images: &[String]) -> AppResult<()> {
        self.executor
            .execute_with_timeout(
                || {
                    sqlx::query("UPDATE art_pieces SET images = $2 WHERE id = $1")
                        .bind(id.as_uuid())
                        .bind(images)
                        .execute(&self.pool)
                },
                &format!("Failed to update images for art piece {}", id.as_uuid()),
            )
            .await?;
        Ok(())
    }

    #[instrument(skip(self, main_image, palette))]
    async fn update_main_image(
        &self,
        id: ArtPieceId,
        main_image: &str,
        palette: &Palette,
    ) -> AppResult<()> {
        self.executor
            .execute_with_timeout(
                || {
                    sqlx::query("UPDATE art_pieces SET main_image = $2, palette = $3 WHERE id = $1")
                        .bind(id.as_uuid())
                        .bind(main_image)
                        .bind(palette_to_css(palette))
                        .execute(&self.pool)
                },
                &format!("Failed to update main image for art piece {}", id.as_uuid()),
            )
            .await?;
        Ok(())
    }
}
