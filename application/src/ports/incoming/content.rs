use crate::content::commands::MuralDraft;
use crate::error::AppResult;
use domain::mural::{Mural, MuralId};
use domain::section::Section;

#[async_trait::async_trait]
pub trait ContentUseCase: Send + Sync {
    async fn list_murals(&self) -> AppResult<Vec<Mural>>;
    async fn get_mural(&self, id: MuralId) -> AppResult<Mural>;
    async fn create_mural(&self, draft: MuralDraft) -> AppResult<Mural>;
    async fn update_mural(&self, id: MuralId, draft: MuralDraft) -> AppResult<Mural>;
    async fn delete_mural(&self, id: MuralId) -> AppResult<()>;
    async fn reorder_mural_image(&self, id: MuralId, from: usize, to: usize) -> AppResult<Mural>;
    async fn remove_mural_image(&self, id: MuralId, index: usize) -> AppResult<Mural>;
    async fn upsert_section(&self, section: Section) -> AppResult<Section>;
}
