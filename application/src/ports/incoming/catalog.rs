use crate::catalog::commands::ArtPieceDraft;
use crate::error::AppResult;
use domain::artwork::{ArtPiece, ArtPieceId};
use domain::gallery::{GalleryFilter, SortDirection, SortKey};

/// Admin-side catalog management. All operations assume an
/// authenticated session; handlers enforce that before calling in.
#[async_trait::async_trait]
pub trait CatalogUseCase: Send + Sync {
    async fn create_piece(&self, draft: ArtPieceDraft) -> AppResult<ArtPiece>;
    async fn update_piece(&self, id: ArtPieceId, draft: ArtPieceDraft) -> AppResult<ArtPiece>;
    async fn delete_piece(&self, id: ArtPieceId) -> AppResult<()>;
    async fn get_piece(&self, id: ArtPieceId) -> AppResult<ArtPiece>;
    async fn list_pieces(
        &self,
        filter: GalleryFilter,
        sort_key: SortKey,
        direction: SortDirection,
    ) -> AppResult<Vec<ArtPiece>>;
    async fn reorder_image(&self, id: ArtPieceId, from: usize, to: usize) -> AppResult<ArtPiece>;
    async fn remove_image(&self, id: ArtPieceId, index: usize) -> AppResult<ArtPiece>;
}
