use std::sync::Arc;

use crate::error::AppResult;
use domain::section::Section;

#[async_trait::async_trait]
pub trait SectionStorePort: Send + Sync {
    async fn upsert(&self, section: &Section) -> AppResult<Section>;
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Section>>;
    async fn list_all(&self) -> AppResult<Vec<Section>>;
}

pub type DynSectionStorePort = Arc<dyn SectionStorePort>;
