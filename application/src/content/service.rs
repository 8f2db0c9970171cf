use time::OffsetDateTime;
use tracing::info;

use crate::content::commands::MuralDraft;
use crate::error::{AppError, AppResult};
use crate::ports::incoming::content::ContentUseCase;
use crate::ports::outgoing::mural_store::DynMuralStorePort;
use crate::ports::outgoing::section_store::DynSectionStorePort;
use domain::error::DomainError;
use domain::mural::{Mural, MuralId};
use domain::section::Section;

pub struct ContentService {
    mural_store: DynMuralStorePort,
    section_store: DynSectionStorePort,
}

impl ContentService {
    #[must_use]
    pub fn new(mural_store: DynMuralStorePort, section_store: DynSectionStorePort) -> Self {
        Self {
            mural_store,
            section_store,
        }
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

#[async_trait::async_trait]
impl ContentUseCase for ContentService {
    async fn list_murals(&self) -> AppResult<Vec<Mural>> {
        let mut murals = self.mural_store.list_all().await?;
        // newest year first, manual order within a year
        murals.sort_by(|a, b| {
            b.year
                .unwrap_or(0)
                .cmp(&a.year.unwrap_or(0))
                .then(a.display_order.cmp(&b.display_order))
        });
        Ok(murals)
    }

    async fn get_mural(&self, id: MuralId) -> AppResult<Mural> {
        self.require_mural(id).await
    }

    async fn create_mural(&self, draft: MuralDraft) -> AppResult<Mural> {
        draft.validate()?;
        let mural = Mural {
            id: MuralId::new(),
            title: draft.title,
            description: draft.description,
            location: draft.location,
            year: draft.year,
            display_order: draft.display_order,
            images: Vec::new(),
            created_at: OffsetDateTime::now_utc(),
        };
        let created = self.mural_store.insert(&mural).await?;
        info!(title = %created.title, "created mural");
        Ok(created)
    }

    async fn update_mural(&self, id: MuralId, draft: MuralDraft) -> AppResult<Mural> {
        draft.validate()?;
        let existing = self.require_mural(id).await?;
        let mural = Mural {
            title: draft.title,
            description: draft.description,
            location: draft.location,
            year: draft.year,
            display_order: draft.display_order,
            ..existing
        };
        self.mural_store.update(&mural).await
    }

    async fn delete_mural(&self, id: MuralId) -> AppResult<()> {
        self.require_mural(id).await?;
        self.mural_store.delete(id).await
    }

    async fn reorder_mural_image(&self, id: MuralId, from: usize, to: usize) -> AppResult<Mural> {
        let mut mural = self.require_mural(id).await?;
        mural.move_image(from, to)?;
        self.mural_store.update_images(id, &mural.images).await?;
        Ok(mural)
    }

    async fn remove_mural_image(&self, id: MuralId, index: usize) -> AppResult<Mural> {
        let mut mural = self.require_mural(id).await?;
        if index >= mural.images.len() {
            return Err(DomainError::InvalidImageIndex(format!(
                "remove {index} outside 0..{}",
                mural.images.len()
            ))
            .into());
        }
        mural.images.remove(index);
        self.mural_store.update_images(id, &mural.images).await?;
        Ok(mural)
    }

    async fn upsert_section(&self, section: Section) -> AppResult<Section> {
        if section.slug.trim().is_empty() {
            return Err(AppError::ValidationError {
                message: "section slug is required".to_string(),
            });
        }
        self.section_store.upsert(&section).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::outgoing::mural_store::MuralStorePort;
    use crate::ports::outgoing::section_store::SectionStorePort;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

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
            self.murals
                .lock()
                .unwrap()
                .insert(mural.id, mural.clone());
            Ok(mural.clone())
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
    struct InMemorySectionStore {
        sections: Mutex<HashMap<String, Section>>,
    }

    #[async_trait::async_trait]
    impl SectionStorePort for InMemorySectionStore {
        async fn upsert(&self, section: &Section) -> AppResult<Section> {
            self.sections
                .lock()
                .unwrap()
                .insert(section.slug.clone(), section.clone());
            Ok(section.clone())
        }

        async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Section>> {
            Ok(self.sections.lock().unwrap().get(slug).cloned())
        }

        async fn list_all(&self) -> AppResult<Vec<Section>> {
            Ok(self.sections.lock().unwrap().values().cloned().collect())
        }
    }

    fn service() -> ContentService {
        ContentService::new(
            Arc::new(InMemoryMuralStore::default()),
            Arc::new(InMemorySectionStore::default()),
        )
    }

    fn draft(title: &str, year: Option<i32>, display_order: i32) -> MuralDraft {
        MuralDraft {
            title: title.to_string(),
            description: String::new(),
            location: None,
            year,
            display_order,
        }
    }

    #[tokio::test]
    async fn murals_list_year_desc_then_display_order() {
        let service = service();
        service.create_mural(draft("b", Some(2023), 2)).await.unwrap();
        service.create_mural(draft("a", Some(2023), 1)).await.unwrap();
        service.create_mural(draft("c", Some(2025), 1)).await.unwrap();

        let titles: Vec<String> = service
            .list_murals()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn blank_title_rejected() {
        let service = service();
        let err = service.create_mural(draft("   ", None, 0)).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn update_preserves_images() {
        let service = service();
        let mural = service.create_mural(draft("wall", Some(2024), 0)).await.unwrap();
        service
            .mural_store
            .update_images(mural.id, &["x".to_string()])
            .await
            .unwrap();

        let updated = service
            .update_mural(mural.id, draft("wall, renamed", Some(2024), 0))
            .await
            .unwrap();
        assert_eq!(updated.images, ["x"]);
    }

    #[tokio::test]
    async fn section_upsert_replaces() {
        let service = service();
        let section = Section {
            slug: "about".to_string(),
            title: "About".to_string(),
            description: "v1".to_string(),
        };
        service.upsert_section(section.clone()).await.unwrap();

        let replaced = Section {
            description: "v2".to_string(),
            ..section
        };
        service.upsert_section(replaced).await.unwrap();

        let all = service.section_store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all.first().unwrap().description, "v2");
    }
}
