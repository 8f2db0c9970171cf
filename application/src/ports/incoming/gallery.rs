use crate::error::AppResult;
use domain::artwork::ArtPiece;
use domain::section::Section;

/// Public read surface. No authentication, no mutation.
#[async_trait::async_trait]
pub trait GalleryQueryUseCase: Send + Sync {
    /// All pieces in display order: available first, then commission,
    /// then sold, newest first within each group.
    async fn public_gallery(&self) -> AppResult<Vec<ArtPiece>>;
    async fn piece_by_slug(&self, slug: &str) -> AppResult<ArtPiece>;
    async fn sections(&self) -> AppResult<Vec<Section>>;
}
