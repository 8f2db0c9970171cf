use axum::{
    Json,
    extract::{Path, State},
};

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ApiResponseValue;
use crate::incoming::http_axum::{
    dto::responses::{ApiResponse, ArtPieceResponse, SectionResponse},
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/art-pieces",
    responses(
        (status = 200, description = "All pieces in public display order: available, then commission, then sold, newest first within each group", body = ApiResponseValue)
    ),
    tag = "gallery",
    summary = "Public gallery listing"
))]
pub async fn list_public_gallery(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ArtPieceResponse>>>, HttpError> {
    let pieces = state.gallery_query_service.public_gallery().await?;
    let responses = pieces.into_iter().map(ArtPieceResponse::from).collect();
    Ok(Json(ApiResponse::success_with_data(responses)))
}

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/art-pieces/{slug}",
    params(("slug" = String, Path, description = "URL slug of the piece")),
    responses(
        (status = 200, description = "The requested piece", body = ApiResponseValue),
        (status = 404, description = "No piece with that slug", body = ApiResponseValue)
    ),
    tag = "gallery",
    summary = "Single piece by slug"
))]
pub async fn get_piece_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ArtPieceResponse>>, HttpError> {
    let piece = state.gallery_query_service.piece_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success_with_data(piece.into())))
}

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/sections",
    responses(
        (status = 200, description = "Editable site sections", body = ApiResponseValue)
    ),
    tag = "gallery",
    summary = "Site sections"
))]
pub async fn list_sections(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SectionResponse>>>, HttpError> {
    let sections = state.gallery_query_service.sections().await?;
    let responses = sections.into_iter().map(SectionResponse::from).collect();
    Ok(Json(ApiResponse::success_with_data(responses)))
}
