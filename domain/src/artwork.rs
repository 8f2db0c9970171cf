use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "docs")]
use utoipa::ToSchema;
use uuid::Uuid;

use crate::color::Palette;
use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtPieceId(pub Uuid);

impl ArtPieceId {
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

impl Default for ArtPieceId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkStatus {
    Available,
    Commission,
    Sold,
}

impl ArtworkStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Commission => "commission",
            Self::Sold => "sold",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "available" => Ok(Self::Available),
            "commission" => Ok(Self::Commission),
            "sold" => Ok(Self::Sold),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ArtworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One displayable artwork. `images` is the ordered public gallery
/// strip, `main_image` the circular-cropped cover. Source of truth
/// lives in the database; instances here are per-request snapshots.
#[derive(Debug, Clone)]
pub struct ArtPiece {
    pub id: ArtPieceId,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub dimensions: Option<String>,
    pub price: Option<f64>,
    pub year: Option<i32>,
    pub status: ArtworkStatus,
    pub video_url: Option<String>,
    pub main_image: String,
    pub images: Vec<String>,
    pub palette: Palette,
    pub created_at: time::OffsetDateTime,
}

impl ArtPiece {
    /// Manual reorder from the admin list editor: the image at `from`
    /// is reinserted at `to`, shifting everything between.
    pub fn move_image(&mut self, from: usize, to: usize) -> DomainResult<()> {
        move_image(&mut self.images, from, to)
    }
}

/// Index-move over an ordered image list, independent of whatever UI
/// drag mechanism produced the indices.
pub fn move_image(images: &mut Vec<String>, from: usize, to: usize) -> DomainResult<()> {
    let len = images.len();
    if from >= len || to >= len {
        return Err(DomainError::InvalidImageIndex(format!(
            "move {from} -> {to} outside 0..{len}"
        )));
    }
    if from == to {
        return Ok(());
    }
    let image = images.remove(from);
    images.insert(to, image);
    Ok(())
}
