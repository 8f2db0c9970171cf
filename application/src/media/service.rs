use time::OffsetDateTime;
use tracing::info;

use crate::config::MediaSettings;
use crate::error::{AppError, AppResult};
use crate::ports::incoming::media::{MediaUseCase, PreparedMainImage};
use crate::ports::outgoing::art_store::DynArtStorePort;
use crate::ports::outgoing::blocking_task::{BlockingTaskError, DynImagePipelinePort};
use crate::ports::outgoing::mural_store::DynMuralStorePort;
use crate::ports::outgoing::object_storage::DynObjectStoragePort;
use domain::artwork::{ArtPiece, ArtPieceId};
use domain::crop::{CropRegion, png_file_name};
use domain::mural::{Mural, MuralId};
use domain::slug::sanitize_filename;

pub struct MediaService {
    art_store: DynArtStorePort,
    mural_store: DynMuralStorePort,
    storage: DynObjectStoragePort,
    pipeline: DynImagePipelinePort,
    settings: MediaSettings,
}

impl MediaService {
    #[must_use]
    pub fn new(
        art_store: DynArtStorePort,
        mural_store: DynMuralStorePort,
        storage: DynObjectStoragePort,
        pipeline: DynImagePipelinePort,
        settings: MediaSettings,
    ) -> Self {
        Self {
            art_store,
            mural_store,
            storage,
            pipeline,
            settings,
        }
    }

    fn check_size(&self, bytes: &[u8]) -> AppResult<()> {
        if bytes.len() > self.settings.max_upload_bytes {
            return Err(AppError::ValidationError {
                message: format!(
                    "upload of {} bytes exceeds the {} byte limit",
                    bytes.len(),
                    self.settings.max_upload_bytes
                ),
            });
        }
        Ok(())
    }

    async fn require_piece(&self, id: ArtPieceId) -> AppResult<ArtPiece> {
        self.art_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                message: format!("art piece {} not found", id.as_uuid()),
            })
    }

    async fn require_mural(&self, id: MuralId) -> AppResult<Mural> {
        self.mural_store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                message: format!("mural {} not found", id.as_uuid()),
            })
    }
}

fn task_error(err: BlockingTaskError) -> AppError {
    AppError::TaskError {
        message: err.message,
    }
}

#[async_trait::async_trait]
impl MediaUseCase for MediaService {
    async fn upload_main_image(
        &self,
        id: ArtPieceId,
        file_name: &str,
        bytes: Vec<u8>,
        region: Option<CropRegion>,
    ) -> AppResult<PreparedMainImage> {
        self.check_size(&bytes)?;
        let piece = self.require_piece(id).await?;

        // palette comes from the untouched upload, not the crop
        let palette = self
            .pipeline
            .extract_palette(bytes.clone(), self.settings.palette_size)
            .await
            .map_err(task_error)?;
        let png = self
            .pipeline
            .crop_to_circle_png(bytes, region)
            .await
            .map_err(task_error)?;

        let key = format!(
            "main/{}-{}",
            piece.slug,
            png_file_name(&sanitize_filename(file_name))
        );
        let public_url = self.storage.upload(&key, "image/png", png).await?;

        self.art_store
            .update_main_image(id, &public_url, &palette)
            .await?;

        info!(slug = %piece.slug, key = %key, "stored main image");
        Ok(PreparedMainImage {
            public_url,
            palette,
        })
    }

    async fn upload_gallery_image(
        &self,
        id: ArtPieceId,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> AppResult<String> {
        self.check_size(&bytes)?;
        let mut piece = self.require_piece(id).await?;

        // position is 1-based in the object key
        let key = format!(
            "gallery/{}-{}-{}",
            piece.slug,
            piece.images.len() + 1,
            sanitize_filename(file_name)
        );
        let public_url = self.storage.upload(&key, content_type, bytes).await?;

        piece.images.push(public_url.clone());
        self.art_store.update_images(id, &piece.images).await?;

        info!(slug = %piece.slug, key = %key, "stored gallery image");
        Ok(public_url)
    }

    async fn upload_mural_image(
        &self,
        id: MuralId,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> AppResult<String> {
        self.check_size(&bytes)?;
        let mut mural = self.require_mural(id).await?;

        let key = format!(
            "murals/{}-{}",
            OffsetDateTime::now_utc().unix_timestamp(),
            sanitize_filename(file_name)
        );
        let public_url = self.storage.upload(&key, content_type, bytes).await?;

        mural.images.push(public_url.clone());
        self.mural_store.update_images(id, &mural.images).await?;

        info!(mural = %id.as_uuid(), key = %key, "stored mural image");
        Ok(public_url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::outgoing::art_store::ArtStorePort;
    use crate::ports::outgoing::blocking_task::ImagePipelinePort;
    use crate::ports::outgoing::mural_store::MuralStorePort;
    use crate::ports::outgoing::object_storage::ObjectStoragePort;
    use domain::artwork::ArtworkStatus;
    use domain::color::{Palette, RgbColor};
    use std::collections::HashMap;
    use std::future::Future;
    use std::pin::Pin;
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
            self.insert(piece).await
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
            Ok(self.pieces.lock().unwrap().values().cloned().collect())
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

    #[derive(Default)]
    struct InMemoryMuralStore {
        murals: Mutex<HashMap<MuralId, Mural>>,
    }

    #[async_trait::async_trait]
    impl MuralStorePort for InMemoryMuralStore {
        async fn insert(&self, mural: &Mural) -> AppResult<Mural> {
            self.murals
                .lock()
                .unwrap()
                .insert(mural.id, mural.clone());
            Ok(mural.clone())
        }

        async fn update(&self, mural: &Mural) -> AppResult<Mural> {
            self.insert(mural).await
        }

        async fn delete(&self, id: MuralId) -> AppResult<()> {
            self.murals.lock().unwrap().remove(&id);
            Ok(())
        }

        async fn find_by_id(&self, id: MuralId) -> AppResult<Option<Mural>> {
            Ok(self.murals.lock().unwrap().get(&id).cloned())
        }

        async fn list_all(&self) -> AppResult<Vec<Mural>> {
            Ok(self.murals.lock().unwrap().values().cloned().collect())
        }

        async fn update_images(&self, id: MuralId, images: &[String]) -> AppResult<()> {
            if let Some(mural) = self.murals.lock().unwrap().get_mut(&id) {
                mural.images = images.to_vec();
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingStorage {
        uploads: Mutex<Vec<(String, String)>>,
    }

    #[async_trait::async_trait]
    impl ObjectStoragePort for RecordingStorage {
        async fn upload(
            &self,
            key: &str,
            content_type: &str,
            _bytes: Vec<u8>,
        ) -> AppResult<String> {
            self.uploads
                .lock()
                .unwrap()
                .push((key.to_string(), content_type.to_string()));
            Ok(self.public_url(key))
        }

        async fn delete(&self, _key: &str) -> AppResult<()> {
            Ok(())
        }

        fn public_url(&self, key: &str) -> String {
            format!("https://cdn.test/{key}")
        }
    }

    #[derive(Default)]
    struct StubPipeline {
        seen_regions: Mutex<Vec<Option<CropRegion>>>,
    }

    impl ImagePipelinePort for StubPipeline {
        fn crop_to_circle_png(
            &self,
            _image_data: Vec<u8>,
            region: Option<CropRegion>,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, BlockingTaskError>> + Send + 'static>>
        {
            self.seen_regions.lock().unwrap().push(region);
            Box::pin(async { Ok(vec![0x89, 0x50, 0x4e, 0x47]) })
        }

        fn extract_palette(
            &self,
            _image_data: Vec<u8>,
            color_count: usize,
        ) -> Pin<Box<dyn Future<Output = Result<Palette, BlockingTaskError>> + Send + 'static>>
        {
            Box::pin(async move { Ok(vec![RgbColor::new(1, 2, 3); color_count]) })
        }
    }

    struct Fixture {
        service: MediaService,
        art_store: Arc<InMemoryArtStore>,
        mural_store: Arc<InMemoryMuralStore>,
        storage: Arc<RecordingStorage>,
        pipeline: Arc<StubPipeline>,
    }

    fn fixture() -> Fixture {
        let art_store = Arc::new(InMemoryArtStore::default());
        let mural_store = Arc::new(InMemoryMuralStore::default());
        let storage = Arc::new(RecordingStorage::default());
        let pipeline = Arc::new(StubPipeline::default());
        let service = MediaService::new(
            art_store.clone(),
            mural_store.clone(),
            storage.clone(),
            pipeline.clone(),
            MediaSettings::new(5, 1024),
        );
        Fixture {
            service,
            art_store,
            mural_store,
            storage,
            pipeline,
        }
    }

    async fn seed_piece(store: &InMemoryArtStore, slug: &str) -> ArtPiece {
        let piece = ArtPiece {
            id: ArtPieceId::new(),
            slug: slug.to_string(),
            name: slug.to_string(),
            description: String::new(),
            dimensions: None,
            price: None,
            year: None,
            status: ArtworkStatus::Available,
            video_url: None,
            main_image: String::new(),
            images: Vec::new(),
            palette: Vec::new(),
            created_at: OffsetDateTime::now_utc(),
        };
        store.insert(&piece).await.unwrap()
    }

    #[tokio::test]
    async fn main_image_is_cropped_keyed_and_persisted() {
        let fx = fixture();
        let piece = seed_piece(&fx.art_store, "northern-lights").await;

        let prepared = fx
            .service
            .upload_main_image(piece.id, "My Photo.JPG", vec![1, 2, 3], None)
            .await
            .unwrap();

        let uploads = fx.storage.uploads.lock().unwrap().clone();
        assert_eq!(
            uploads,
            [(
                "main/northern-lights-my-photo.png".to_string(),
                "image/png".to_string()
            )]
        );
        assert_eq!(prepared.palette.len(), 5);

        let stored = fx.art_store.find_by_id(piece.id).await.unwrap().unwrap();
        assert_eq!(
            stored.main_image,
            "https://cdn.test/main/northern-lights-my-photo.png"
        );
        assert_eq!(stored.palette.len(), 5);
    }

    #[tokio::test]
    async fn chosen_crop_region_reaches_the_pipeline() {
        let fx = fixture();
        let piece = seed_piece(&fx.art_store, "lagoon").await;
        let region = CropRegion::new(40, 12, 300, 300).unwrap();

        fx.service
            .upload_main_image(piece.id, "lagoon.jpg", vec![1, 2, 3], Some(region))
            .await
            .unwrap();
        fx.service
            .upload_main_image(piece.id, "lagoon.jpg", vec![1, 2, 3], None)
            .await
            .unwrap();

        let seen = fx.pipeline.seen_regions.lock().unwrap().clone();
        assert_eq!(seen, [Some(region), None]);
    }

    #[tokio::test]
    async fn gallery_images_key_by_position() {
        let fx = fixture();
        let piece = seed_piece(&fx.art_store, "harbor").await;

        fx.service
            .upload_gallery_image(piece.id, "first.jpg", "image/jpeg", vec![1])
            .await
            .unwrap();
        fx.service
            .upload_gallery_image(piece.id, "second.jpg", "image/jpeg", vec![2])
            .await
            .unwrap();

        let keys: Vec<String> = fx
            .storage
            .uploads
            .lock()
            .unwrap()
            .iter()
            .map(|(key, _)| key.clone())
            .collect();
        assert_eq!(keys, ["gallery/harbor-1-first.jpg", "gallery/harbor-2-second.jpg"]);

        let stored = fx.art_store.find_by_id(piece.id).await.unwrap().unwrap();
        assert_eq!(stored.images.len(), 2);
    }

    #[tokio::test]
    async fn mural_images_key_by_timestamp() {
        let fx = fixture();
        let mural = Mural {
            id: MuralId::new(),
            title: "wall".to_string(),
            description: String::new(),
            location: None,
            year: None,
            display_order: 0,
            images: Vec::new(),
            created_at: OffsetDateTime::now_utc(),
        };
        fx.mural_store.insert(&mural).await.unwrap();

        fx.service
            .upload_mural_image(mural.id, "Wide Shot.png", "image/png", vec![1])
            .await
            .unwrap();

        let uploads = fx.storage.uploads.lock().unwrap().clone();
        let (key, _) = uploads.first().unwrap();
        assert!(key.starts_with("murals/"));
        assert!(key.ends_with("-wide-shot.png"));
    }

    #[tokio::test]
    async fn oversized_upload_rejected() {
        let fx = fixture();
        let piece = seed_piece(&fx.art_store, "big").await;
        let err = fx
            .service
            .upload_main_image(piece.id, "big.png", vec![0; 2048], None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError { .. }));
        assert!(fx.storage.uploads.lock().unwrap().is_empty());
    }
}
