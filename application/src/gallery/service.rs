use crate::error::{AppError, AppResult};
use crate::ports::incoming::gallery::GalleryQueryUseCase;
use crate::ports::outgoing::art_store::DynArtStorePort;
use crate::ports::outgoing::section_store::DynSectionStorePort;
use domain::artwork::ArtPiece;
use domain::gallery::public_gallery_order;
use domain::section::Section;

pub struct GalleryQueryService {
    art_store: DynArtStorePort,
    section_store: DynSectionStorePort,
}

impl GalleryQueryService {
    #[must_use]
    pub fn new(art_store: DynArtStorePort, section_store: DynSectionStorePort) -> Self {
        Self {
            art_store,
            section_store,
        }
    }
}

#[async_trait::async_trait]
impl GalleryQueryUseCase for GalleryQueryService {
    async fn public_gallery(&self) -> AppResult<Vec<ArtPiece>> {
        let pieces = self.art_store.list_all().await?;
        Ok(public_gallery_order(&pieces))
    }

    async fn piece_by_slug(&self, slug: &str) -> AppResult<ArtPiece> {
        self.art_store
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound {
                message: format!("no art piece with slug '{slug}'"),
            })
    }

    async fn sections(&self) -> AppResult<Vec<Section>> {
        self.section_store.list_all().await
    }
}
