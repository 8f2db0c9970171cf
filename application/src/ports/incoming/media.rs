use crate::error::AppResult;
use domain::artwork::ArtPieceId;
use domain::color::Palette;
use domain::crop::CropRegion;
use domain::mural::MuralId;

/// Outcome of a main-image upload: where the processed image landed
/// and the palette derived from the original upload.
#[derive(Debug, Clone)]
pub struct PreparedMainImage {
    pub public_url: String,
    pub palette: Palette,
}

#[async_trait::async_trait]
pub trait MediaUseCase: Send + Sync {
    /// Crops the upload to a circle, re-encodes as PNG, stores it
    /// under the piece's slug and persists the resulting URL and
    /// palette on the piece. The crop lands on `region` when the
    /// client sent one, otherwise on the centered square.
    async fn upload_main_image(
        &self,
        id: ArtPieceId,
        file_name: &str,
        bytes: Vec<u8>,
        region: Option<CropRegion>,
    ) -> AppResult<PreparedMainImage>;

    /// Stores an additional gallery image unmodified and appends its
    /// URL to the piece's image list.
    async fn upload_gallery_image(
        &self,
        id: ArtPieceId,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> AppResult<String>;

    async fn upload_mural_image(
        &self,
        id: MuralId,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> AppResult<String>;
}
