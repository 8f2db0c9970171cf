use time::OffsetDateTime;
use tracing::info;

use crate::catalog::commands::ArtPieceDraft;
use crate::error::{AppError, AppResult};
use crate::ports::incoming::catalog::CatalogUseCase;
use crate::ports::outgoing::art_store::DynArtStorePort;
use domain::artwork::{ArtPiece, ArtPieceId};
use domain::error::DomainError;
use domain::gallery::{self, GalleryFilter, SortDirection, SortKey};

pub struct CatalogService {
    art_store: DynArtStorePort,
}

impl CatalogService {
    #[must_use]
    pub fn new(art_store: DynArtStorePort) -> Self {
        Self { art_store }
    }

    async fn require_piece(&self, id: ArtPieceId) -> AppResult<ArtPiece> {
        self.art_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                message: format!("art piece {} not found", id.as_uuid()),
            })
    }
}

#[async_trait::async_trait]
impl CatalogUseCase for CatalogService {
    async fn create_piece(&self, draft: ArtPieceDraft) -> AppResult<ArtPiece> {
        let slug = draft.resolve_slug()?;
        if self.art_store.find_by_slug(&slug).await?.is_some() {
            return Err(AppError::Conflict {
                message: format!("slug '{slug}' is already taken"),
            });
        }

        let piece = ArtPiece {
            id: ArtPieceId::new(),
            slug,
            name: draft.name,
            description: draft.description,
            dimensions: draft.dimensions,
            price: draft.price,
            year: draft.year,
            status: draft.status,
            video_url: draft.video_url,
            main_image: String::new(),
            images: Vec::new(),
            palette: Vec::new(),
            created_at: OffsetDateTime::now_utc(),
        };

        let created = self.art_store.insert(&piece).await?;
        info!(slug = %created.slug, "created art piece");
        Ok(created)
    }

    async fn update_piece(&self, id: ArtPieceId, draft: ArtPieceDraft) -> AppResult<ArtPiece> {
        let existing = self.require_piece(id).await?;
        let slug = draft.resolve_slug()?;

        if slug != existing.slug {
            if let Some(other) = self.art_store.find_by_slug(&slug).await? {
                if other.id != id {
                    return Err(AppError::Conflict {
                        message: format!("slug '{slug}' is already taken"),
                    });
                }
            }
        }

        let piece = ArtPiece {
            slug,
            name: draft.name,
            description: draft.description,
            dimensions: draft.dimensions,
            price: draft.price,
            year: draft.year,
            status: draft.status,
            video_url: draft.video_url,
            ..existing
        };

        self.art_store.update(&piece).await
    }

    async fn delete_piece(&self, id: ArtPieceId) -> AppResult<()> {
        self.require_piece(id).await?;
        self.art_store.delete(id).await
    }

    async fn get_piece(&self, id: ArtPieceId) -> AppResult<ArtPiece> {
        self.require_piece(id).await
    }

    async fn list_pieces(
        &self,
        filter: GalleryFilter,
        sort_key: SortKey,
        direction: SortDirection,
    ) -> AppResult<Vec<ArtPiece>> {
        let pieces = self.art_store.list_all().await?;
        Ok(gallery::filter_and_sort(&pieces, &filter, sort_key, direction))
    }

    async fn reorder_image(&self, id: ArtPieceId, from: usize, to: usize) -> AppResult<ArtPiece> {
        let mut piece = self.require_piece(id).await?;
        piece.move_image(from, to)?;
        self.art_store.update_images(id, &piece.images).await?;
        Ok(piece)
    }

    async fn remove_image(&self, id: ArtPieceId, index: usize) -> AppResult<ArtPiece> {
        let mut piece = self.require_piece(id).await?;
        if index >= piece.images.len() {
            return Err(DomainError::InvalidImageIndex(format!(
                "remove {index} outside 0..{}",
                piece.images.len()
            ))
            .into());
        }
        piece.images.remove(index);
        self.art_store.update_images(id, &piece.images).await?;
        Ok(piece)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::outgoing::art_store::ArtStorePort;
    use domain::artwork::ArtworkStatus;
    use domain::color::Palette;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryArtStore {
        pieces: Mutex<HashMap<ArtPieceId, ArtPiece>>,
    }

    #[async_trait::async_trait]
    impl ArtStorePort for InMemoryArtStore {
        async fn insert(&self, piece: &ArtPiece) -> AppResult<ArtPiece> {
            self.pieces
                .lock()
                .unwrap()
                .insert(piece.id, piece.clone());
            Ok(piece.clone())
        }

        async fn update(&self, piece: &ArtPiece) -> AppResult<ArtPiece> {
            self.pieces
                .lock()
                .unwrap()
                .insert(piece.id, piece.clone());
            Ok(piece.clone())
        }

        async fn delete(&self, id: ArtPieceId) -> AppResult<()> {
            self.pieces.lock().unwrap().remove(&id);
            Ok(())
        }

        async fn find_by_id(&self, id: ArtPieceId) -> AppResult<Option<ArtPiece>> {
            Ok(self.pieces.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_slug(&self, slug: &str) -> AppResult<Option<ArtPiece>> {
            Ok(self
                .pieces
                .lock()
                .unwrap()
                .values()
                .find(|p| p.slug == slug)
                .cloned())
        }

        async fn list_all(&self) -> AppResult<Vec<ArtPiece>> {
            let mut all: Vec<ArtPiece> = self.pieces.lock().unwrap().values().cloned().collect();
            all.sort_by_key(|p| p.created_at);
            Ok(all)
        }

        async fn update_images(&self, id: ArtPieceId, images: &[String]) -> AppResult<()> {
            if let Some(piece) = self.pieces.lock().unwrap().get_mut(&id) {
                piece.images = images.to_vec();
            }
            Ok(())
        }

        async fn update_main_image(
            &self,
            id: ArtPieceId,
            main_image: &str,
            palette: &Palette,
        ) -> AppResult<()> {
            if let Some(piece) = self.pieces.lock().unwrap().get_mut(&id) {
                piece.main_image = main_image.to_string();
                piece.palette = palette.clone();
            }
            Ok(())
        }
    }

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(InMemoryArtStore::default()))
    }

    fn draft(name: &str) -> ArtPieceDraft {
        ArtPieceDraft {
            slug: None,
            name: name.to_string(),
            description: String::new(),
            dimensions: None,
            price: None,
            year: None,
            status: ArtworkStatus::Available,
            video_url: None,
        }
    }

    #[tokio::test]
    async fn create_derives_slug_and_starts_without_media() {
        let service = service();
        let piece = service.create_piece(draft("Næturhiminn")).await.unwrap();
        assert_eq!(piece.slug, "naeturhiminn");
        assert!(piece.main_image.is_empty());
        assert!(piece.images.is_empty());
        assert!(piece.palette.is_empty());
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_conflict() {
        let service = service();
        service.create_piece(draft("Same Name")).await.unwrap();
        let err = service.create_piece(draft("Same Name")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn update_keeps_media_fields() {
        let service = service();
        let piece = service.create_piece(draft("Original")).await.unwrap();
        service
            .art_store
            .update_main_image(piece.id, "https://cdn/main.png", &Vec::new())
            .await
            .unwrap();

        let mut changed = draft("Renamed");
        changed.price = Some(1200.0);
        let updated = service.update_piece(piece.id, changed).await.unwrap();

        assert_eq!(updated.slug, "renamed");
        assert_eq!(updated.price, Some(1200.0));
        assert_eq!(updated.main_image, "https://cdn/main.png");
        assert_eq!(updated.created_at, piece.created_at);
    }

    #[tokio::test]
    async fn reorder_and_remove_images() {
        let service = service();
        let piece = service.create_piece(draft("With Images")).await.unwrap();
        service
            .art_store
            .update_images(
                piece.id,
                &["a".to_string(), "b".to_string(), "c".to_string()],
            )
            .await
            .unwrap();

        let piece = service.reorder_image(piece.id, 2, 0).await.unwrap();
        assert_eq!(piece.images, ["c", "a", "b"]);

        let piece = service.remove_image(piece.id, 1).await.unwrap();
        assert_eq!(piece.images, ["c", "b"]);

        let err = service.remove_image(piece.id, 5).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(_)));
    }

    #[tokio::test]
    async fn missing_piece_is_not_found() {
        let service = service();
        let err = service.get_piece(ArtPieceId::new()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
