use serde::Serialize;
use time::format_description::well_known::Rfc3339;
#[cfg(feature = "docs")]
use utoipa::ToSchema;
use uuid::Uuid;

use domain::artwork::ArtPiece;
use domain::color::palette_to_css;
use domain::mural::Mural;
use domain::section::Section;

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Standard API response wrapper with success indicator, optional error message, and optional data payload",
    example = json!({
        "ok": true,
        "data": { "slug": "vetrarsol" }
    })
))]
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    #[must_use]
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
            data: None,
        }
    }

    #[must_use]
    pub fn success_with_data(data: T) -> Self {
        Self {
            ok: true,
            error: None,
            data: Some(data),
        }
    }
}

fn rfc3339(value: time::OffsetDateTime) -> String {
    value.format(&Rfc3339).unwrap_or_default()
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtPieceResponse {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub dimensions: Option<String>,
    pub price: Option<f64>,
    pub year: Option<i32>,
    #[cfg_attr(feature = "docs", schema(example = "available"))]
    pub status: String,
    pub video_url: Option<String>,
    pub main_image: String,
    pub images: Vec<String>,
    /// CSS `rgb(r,g,b)` strings, most dominant first.
    pub palette: Vec<String>,
    pub created_at: String,
}

impl From<ArtPiece> for ArtPieceResponse {
    fn from(piece: ArtPiece) -> Self {
        Self {
            id: *piece.id.as_uuid(),
            slug: piece.slug,
            name: piece.name,
            description: piece.description,
            dimensions: piece.dimensions,
            price: piece.price,
            year: piece.year,
            status: piece.status.as_str().to_string(),
            video_url: piece.video_url,
            main_image: piece.main_image,
            images: piece.images,
            palette: palette_to_css(&piece.palette),
            created_at: rfc3339(piece.created_at),
        }
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MuralResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub year: Option<i32>,
    pub display_order: i32,
    pub images: Vec<String>,
    pub created_at: String,
}

impl From<Mural> for MuralResponse {
    fn from(mural: Mural) -> Self {
        Self {
            id: *mural.id.as_uuid(),
            title: mural.title,
            description: mural.description,
            location: mural.location,
            year: mural.year,
            display_order: mural.display_order,
            images: mural.images,
            created_at: rfc3339(mural.created_at),
        }
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Serialize)]
pub struct SectionResponse {
    pub slug: String,
    pub title: String,
    pub description: String,
}

impl From<Section> for SectionResponse {
    fn from(section: Section) -> Self {
        Self {
            slug: section.slug,
            title: section.title,
            description: section.description,
        }
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<String>>,
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Serialize)]
pub struct AuthUserResponse {
    #[cfg_attr(feature = "docs", schema(example = "artist@example.com"))]
    pub email: String,
}

#[cfg(feature = "docs")]
#[derive(Serialize, ToSchema)]
#[schema(title = "ApiResponseValue")]
pub struct ApiResponseValue {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
