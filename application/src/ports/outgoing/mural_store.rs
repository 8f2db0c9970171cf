use std::sync::Arc;

use crate::error::AppResult;
use domain::mural::{Mural, MuralId};

#[async_trait::async_trait]
pub trait MuralStorePort: Send + Sync {
    async fn insert(&self, mural: &Mural) -> AppResult<Mural>;
    async fn update(&self, mural: &Mural) -> AppResult<Mural>;
    async fn delete(&self, id: MuralId) -> AppResult<()>;
    async fn find_by_id(&self, id: MuralId) -> AppResult<Option<Mural>>;
    async fn list_all(&self) -> AppResult<Vec<Mural>>;
    async fn update_images(&self, id: MuralId, images: &[String]) -> AppResult<()>;
}

pub type DynMuralStorePort = Arc<dyn MuralStorePort>;
