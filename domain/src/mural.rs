use uuid::Uuid;

use crate::artwork::move_image;
use crate::error::DomainResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MuralId(pub Uuid);

impl MuralId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MuralId {
    fn default() -> Self {
        Self::new()
    }
}

/// Location-based work (mural, exhibition piece, offering). Publicly
/// listed by year descending, then `display_order` ascending within a
/// year.
#[derive(Debug, Clone)]
pub struct Mural {
    pub id: MuralId,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub year: Option<i32>,
    pub display_order: i32,
    pub images: Vec<String>,
    pub created_at: time::OffsetDateTime,
}

impl Mural {
    pub fn move_image(&mut self, from: usize, to: usize) -> DomainResult<()> {
        move_image(&mut self.images, from, to)
    }
}
