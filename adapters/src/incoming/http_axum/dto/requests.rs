use serde::Deserialize;
#[cfg(feature = "docs")]
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[cfg_attr(feature = "docs", schema(example = "artist@example.com"))]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArtPieceUpsertRequest {
    /// Optional explicit slug; derived from the name when omitted.
    pub slug: Option<String>,
    #[cfg_attr(feature = "docs", schema(example = "Vetrarsól"))]
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub dimensions: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    pub year: Option<i32>,
    #[cfg_attr(feature = "docs", schema(example = "available"))]
    pub status: String,
    #[validate(url(message = "Invalid video URL"))]
    pub video_url: Option<String>,
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MuralUpsertRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub location: Option<String>,
    pub year: Option<i32>,
    #[serde(default)]
    pub display_order: i32,
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SectionUpsertRequest {
    #[validate(length(min = 1, max = 100, message = "Slug is required"))]
    pub slug: String,
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequestBody {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub message: Option<String>,
    #[validate(length(min = 1, max = 200, message = "Art piece name is required"))]
    pub art_piece_name: String,
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MoveImageRequest {
    pub from: usize,
    pub to: usize,
}

/// Query string for the admin catalog list. Unset fields fall back to
/// showing everything, newest first.
#[cfg_attr(feature = "docs", derive(IntoParams))]
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}
