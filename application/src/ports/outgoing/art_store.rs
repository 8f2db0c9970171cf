use std::sync::Arc;

use crate::error::AppResult;
use domain::artwork::{ArtPiece, ArtPieceId};
use domain::color::Palette;

/// Persistence boundary for art pieces. Listing order is the store's
/// insertion order; callers apply their own sorting.
#[async_trait::async_trait]
pub trait ArtStorePort: Send + Sync {
    async fn insert(&self, piece: &ArtPiece) -> AppResult<ArtPiece>;
    async fn update(&self, piece: &ArtPiece) -> AppResult<ArtPiece>;
    async fn delete(&self, id: ArtPieceId) -> AppResult<()>;
    async fn find_by_id(&self, id: ArtPieceId) -> AppResult<Option<ArtPiece>>;
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<ArtPiece>>;
    async fn list_all(&self) -> AppResult<Vec<ArtPiece>>;
    async fn update_images(&self, id: ArtPieceId, images: &[String]) -> AppResult<()>;
    async fn update_main_image(
        &self,
        id: ArtPieceId,
        main_image: &str,
        palette: &Palette,
    ) -> AppResult<()>;
}

pub type DynArtStorePort = Arc<dyn ArtStorePort>;
