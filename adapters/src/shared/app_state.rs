use std::sync::Arc;

use atelier_application::infrastructure_config::Config;
use atelier_application::ports::incoming::{
    catalog::CatalogUseCase, content::ContentUseCase, gallery::GalleryQueryUseCase,
    media::MediaUseCase, orders::OrderUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog_service: Arc<dyn CatalogUseCase + Send + Sync>,
    pub gallery_query_service: Arc<dyn GalleryQueryUseCase + Send + Sync>,
    pub content_service: Arc<dyn ContentUseCase + Send + Sync>,
    pub media_service: Arc<dyn MediaUseCase + Send + Sync>,
    pub order_service: Arc<dyn OrderUseCase + Send + Sync>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        catalog_service: Arc<dyn CatalogUseCase + Send + Sync>,
        gallery_query_service: Arc<dyn GalleryQueryUseCase + Send + Sync>,
        content_service: Arc<dyn ContentUseCase + Send + Sync>,
        media_service: Arc<dyn MediaUseCase + Send + Sync>,
        order_service: Arc<dyn OrderUseCase + Send + Sync>,
    ) -> Self {
        Self {
            config,
            catalog_service,
            gallery_query_service,
            content_service,
            media_service,
            order_service,
        }
    }
}
