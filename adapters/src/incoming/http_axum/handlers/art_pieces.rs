use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ApiResponseValue;
use crate::incoming::http_axum::{
    dto::{
        requests::{ArtPieceUpsertRequest, ListQuery, MoveImageRequest},
        responses::{ApiResponse, ArtPieceResponse},
    },
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;
use atelier_application::catalog::commands::ArtPieceDraft;
use atelier_application::error::AppError;
use domain::artwork::{ArtPieceId, ArtworkStatus};
use domain::gallery::{GalleryFilter, SortDirection, SortKey, StatusFilter};

fn to_draft(request: ArtPieceUpsertRequest) -> Result<ArtPieceDraft, HttpError> {
    if let Err(e) = request.validate() {
        return Err(HttpError(AppError::ValidationError {
            message: e.to_string(),
        }));
    }
    let status = ArtworkStatus::parse(&request.status).map_err(AppError::from)?;
    Ok(ArtPieceDraft {
        slug: request.slug,
        name: request.name,
        description: request.description,
        dimensions: request.dimensions,
        price: request.price,
        year: request.year,
        status,
        video_url: request.video_url,
    })
}

fn parse_list_query(
    query: &ListQuery,
) -> Result<(GalleryFilter, SortKey, SortDirection), HttpError> {
    let status = match query.status.as_deref() {
        None => StatusFilter::All,
        Some(value) => StatusFilter::parse(value).map_err(AppError::from)?,
    };
    let filter = GalleryFilter {
        search: query.search.clone().filter(|s| !s.trim().is_empty()),
        status,
    };

    let sort_key = match query.sort.as_deref() {
        None | Some("created_at") => SortKey::CreatedAt,
        Some("name") => SortKey::Name,
        Some("price") => SortKey::Price,
        Some("year") => SortKey::Year,
        Some(other) => {
            return Err(HttpError(AppError::ValidationError {
                message: format!("unknown sort key '{other}'"),
            }));
        }
    };

    let direction = match query.direction.as_deref() {
        Some("asc") => SortDirection::Asc,
        // newest first is the admin default
        None | Some("desc") => SortDirection::Desc,
        Some(other) => {
            return Err(HttpError(AppError::ValidationError {
                message: format!("unknown sort direction '{other}'"),
            }));
        }
    };

    Ok((filter, sort_key, direction))
}

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/admin/art-pieces",
    params(ListQuery),
    responses(
        (status = 200, description = "Filtered and sorted catalog", body = ApiResponseValue),
        (status = 401, description = "Not logged in", body = ApiResponseValue)
    ),
    tag = "catalog",
    summary = "Admin catalog listing"
))]
pub async fn list_art_pieces(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<ArtPieceResponse>>>, HttpError> {
    let (filter, sort_key, direction) = parse_list_query(&query)?;
    let pieces = state
        .catalog_service
        .list_pieces(filter, sort_key, direction)
        .await?;
    let responses = pieces.into_iter().map(ArtPieceResponse::from).collect();
    Ok(Json(ApiResponse::success_with_data(responses)))
}

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/admin/art-pieces",
    request_body = ArtPieceUpsertRequest,
    responses(
        (status = 201, description = "Piece created", body = ApiResponseValue),
        (status = 409, description = "Slug already taken", body = ApiResponseValue),
        (status = 422, description = "Invalid piece data", body = ApiResponseValue)
    ),
    tag = "catalog",
    summary = "Create an art piece"
))]
pub async fn create_art_piece(
    State(state): State<AppState>,
    Json(request): Json<ArtPieceUpsertRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let draft = to_draft(request)?;
    let piece = state.catalog_service.create_piece(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_data(ArtPieceResponse::from(
            piece,
        ))),
    ))
}

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/admin/art-pieces/{id}",
    params(("id" = Uuid, Path, description = "Piece id")),
    responses(
        (status = 200, description = "The requested piece", body = ApiResponseValue),
        (status = 404, description = "Unknown piece", body = ApiResponseValue)
    ),
    tag = "catalog",
    summary = "Single piece by id"
))]
pub async fn get_art_piece(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ArtPieceResponse>>, HttpError> {
    let piece = state
        .catalog_service
        .get_piece(ArtPieceId::from_uuid(id))
        .await?;
    Ok(Json(ApiResponse::success_with_data(piece.into())))
}

#[cfg_attr(feature = "docs", utoipa::path(
    put,
    path = "/admin/art-pieces/{id}",
    params(("id" = Uuid, Path, description = "Piece id")),
    request_body = ArtPieceUpsertRequest,
    responses(
        (status = 200, description = "Piece updated", body = ApiResponseValue),
        (status = 404, description = "Unknown piece", body = ApiResponseValue),
        (status = 409, description = "Slug already taken", body = ApiResponseValue)
    ),
    tag = "catalog",
    summary = "Update an art piece"
))]
pub async fn update_art_piece(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ArtPieceUpsertRequest>,
) -> Result<Json<ApiResponse<ArtPieceResponse>>, HttpError> {
    let draft = to_draft(request)?;
    let piece = state
        .catalog_service
        .update_piece(ArtPieceId::from_uuid(id), draft)
        .await?;
    Ok(Json(ApiResponse::success_with_data(piece.into())))
}

#[cfg_attr(feature = "docs", utoipa::path(
    delete,
    path = "/admin/art-pieces/{id}",
    params(("id" = Uuid, Path, description = "Piece id")),
    responses(
        (status = 200, description = "Piece deleted", body = ApiResponseValue),
        (status = 404, description = "Unknown piece", body = ApiResponseValue)
    ),
    tag = "catalog",
    summary = "Delete an art piece"
))]
pub async fn delete_art_piece(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, HttpError> {
    state
        .catalog_service
        .delete_piece(ArtPieceId::from_uuid(id))
        .await?;
    Ok(Json(ApiResponse::success()))
}

#[cfg_attr(feature = "docs", utoipa::path(
    put,
    path = "/admin/art-pieces/{id}/images/order",
    params(("id" = Uuid, Path, description = "Piece id")),
    request_body = MoveImageRequest,
    responses(
        (status = 200, description = "Image moved", body = ApiResponseValue),
        (status = 400, description = "Index out of range", body = ApiResponseValue)
    ),
    tag = "catalog",
    summary = "Reorder a gallery image"
))]
pub async fn reorder_art_piece_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MoveImageRequest>,
) -> Result<Json<ApiResponse<ArtPieceResponse>>, HttpError> {
    let piece = state
        .catalog_service
        .reorder_image(ArtPieceId::from_uuid(id), request.from, request.to)
        .await?;
    Ok(Json(ApiResponse::success_with_data(piece.into())))
}

#[cfg_attr(feature = "docs", utoipa::path(
    delete,
    path = "/admin/art-pieces/{id}/images/{index}",
    params(
        ("id" = Uuid, Path, description = "Piece id"),
        ("index" = usize, Path, description = "Position in the image list")
    ),
    responses(
        (status = 200, description = "Image removed", body = ApiResponseValue),
        (status = 400, description = "Index out of range", body = ApiResponseValue)
    ),
    tag = "catalog",
    summary = "Remove a gallery image"
))]
pub async fn remove_art_piece_image(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<ApiResponse<ArtPieceResponse>>, HttpError> {
    let piece = state
        .catalog_service
        .remove_image(ArtPieceId::from_uuid(id), index)
        .await?;
    Ok(Json(ApiResponse::success_with_data(piece.into())))
}
