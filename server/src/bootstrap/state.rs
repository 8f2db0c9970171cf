use sqlx::{PgPool, postgres::PgPoolOptions};
use std::sync::Arc;

use atelier_adapters::outgoing::{
    email_sender::{console_email_sender::ConsoleEmailSender, smtp_email_sender::SmtpEmailSender},
    http_storage::supabase_storage::SupabaseStorageAdapter,
    image_rs::png_codec_image::ImagePngAdapter,
    palette_kmeans::kmeans_extractor::KmeansPaletteExtractor,
    passwords::argon2::Argon2PasswordHasher,
    postgres_sqlx::{
        art_store_postgres::PostgresArtStoreAdapter, mural_store_postgres::PostgresMuralStoreAdapter,
        section_store_postgres::PostgresSectionStoreAdapter,
    },
    tokio_spawn::image_pipeline_tokio::TokioImagePipelineAdapter,
};
use atelier_adapters::shared::app_state::AppState as AdaptersAppState;
use atelier_application::config::MediaSettings;
use atelier_application::error::AppError;
use atelier_application::infrastructure_config::{Config, EmailBackend};
use atelier_application::ports::incoming::{
    catalog::CatalogUseCase, content::ContentUseCase, gallery::GalleryQueryUseCase,
    media::MediaUseCase, orders::OrderUseCase,
};
use atelier_application::ports::outgoing::{
    art_store::DynArtStorePort, blocking_task::DynImagePipelinePort,
    email_sender::DynEmailSenderPort, mural_store::DynMuralStorePort,
    object_storage::DynObjectStoragePort, password_hasher::DynPasswordHasherPort,
    section_store::DynSectionStorePort,
};
use atelier_application::{
    catalog::service::CatalogService, content::service::ContentService,
    gallery::service::GalleryQueryService, media::service::MediaService,
    order::service::OrderService,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    db_pool: PgPool,
    pub catalog_service: Arc<dyn CatalogUseCase + Send + Sync>,
    pub gallery_query_service: Arc<dyn GalleryQueryUseCase + Send + Sync>,
    pub content_service: Arc<dyn ContentUseCase + Send + Sync>,
    pub media_service: Arc<dyn MediaUseCase + Send + Sync>,
    pub order_service: Arc<dyn OrderUseCase + Send + Sync>,
    password_hasher: DynPasswordHasherPort,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let db_pool = Self::create_database_connection(&config).await?;

        let art_store: DynArtStorePort = Arc::new(PostgresArtStoreAdapter::new(
            db_pool.clone(),
            config.db.query_timeout_secs,
        ));
        let mural_store: DynMuralStorePort = Arc::new(PostgresMuralStoreAdapter::new(
            db_pool.clone(),
            config.db.query_timeout_secs,
        ));
        let section_store: DynSectionStorePort = Arc::new(PostgresSectionStoreAdapter::new(
            db_pool.clone(),
            config.db.query_timeout_secs,
        ));

        let password_hasher: DynPasswordHasherPort = Arc::new(
            Argon2PasswordHasher::from_config_or_default(&config.auth.argon2),
        );

        let catalog_service = Arc::new(CatalogService::new(Arc::clone(&art_store)));
        let gallery_query_service = Arc::new(GalleryQueryService::new(
            Arc::clone(&art_store),
            Arc::clone(&section_store),
        ));
        let content_service = Arc::new(ContentService::new(
            Arc::clone(&mural_store),
            Arc::clone(&section_store),
        ));
        let media_service = Self::create_media_service(&config, &art_store, &mural_store)?;
        let order_service = Self::create_order_service(&config)?;

        Ok(Self {
            config,
            db_pool,
            catalog_service,
            gallery_query_service,
            content_service,
            media_service,
            order_service,
            password_hasher,
        })
    }

    async fn create_database_connection(config: &Config) -> Result<PgPool, AppError> {
        PgPoolOptions::new()
            .max_connections(config.db.pool_size)
            .connect(config.db.database_url())
            .await
            .map_err(|e| AppError::DatabaseError {
                message: format!("Failed to connect to database: {e}"),
            })
    }

    fn create_media_service(
        config: &Config,
        art_store: &DynArtStorePort,
        mural_store: &DynMuralStorePort,
    ) -> Result<Arc<dyn MediaUseCase + Send + Sync>, AppError> {
        let storage: DynObjectStoragePort = Arc::new(SupabaseStorageAdapter::new(&config.storage)?);
        let pipeline: DynImagePipelinePort = Arc::new(TokioImagePipelineAdapter::new(
            Arc::new(ImagePngAdapter::new()),
            Arc::new(KmeansPaletteExtractor::new()),
        ));
        let settings = MediaSettings::new(config.media.palette_size, config.media.max_upload_bytes);

        Ok(Arc::new(MediaService::new(
            Arc::clone(art_store),
            Arc::clone(mural_store),
            storage,
            pipeline,
            settings,
        )))
    }

    fn create_order_service(config: &Config) -> Result<Arc<dyn OrderUseCase + Send + Sync>, AppError> {
        let email_sender: DynEmailSenderPort = match config.auth.email.email_backend {
            EmailBackend::Console => Arc::new(ConsoleEmailSender::new()),
            EmailBackend::Smtp => Arc::new(SmtpEmailSender::new(&config.auth.email.smtp)?),
        };

        Ok(Arc::new(OrderService::new(
            email_sender,
            config.auth.order_recipient.clone(),
        )))
    }

    pub fn db_pool(&self) -> &PgPool {
        &self.db_pool
    }

    pub fn to_adapters_state(self) -> (AdaptersAppState, DynPasswordHasherPort) {
        let adapters_state = AdaptersAppState::new(
            self.config,
            self.catalog_service,
            self.gallery_query_service,
            self.content_service,
            self.media_service,
            self.order_service,
        );

        (adapters_state, self.password_hasher)
    }
}
