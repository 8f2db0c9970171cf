use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ApiResponseValue;
use crate::incoming::http_axum::{
    dto::{
        requests::{MoveImageRequest, MuralUpsertRequest},
        responses::{ApiResponse, MuralResponse},
    },
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;
use atelier_application::content::commands::MuralDraft;
use atelier_application::error::AppError;
use domain::mural::MuralId;

fn to_draft(request: MuralUpsertRequest) -> Result<MuralDraft, HttpError> {
    if let Err(e) = request.validate() {
        return Err(HttpError(AppError::ValidationError {
            message: e.to_string(),
        }));
    }
    Ok(MuralDraft {
        title: request.title,
        description: request.description,
        location: request.location,
        year: request.year,
        display_order: request.display_order,
    })
}

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/murals",
    responses(
        (status = 200, description = "Murals, newest year first", body = ApiResponseValue)
    ),
    tag = "murals",
    summary = "Public mural listing"
))]
pub async fn list_murals(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MuralResponse>>>, HttpError> {
    let murals = state.content_service.list_murals().await?;
    let responses = murals.into_iter().map(MuralResponse::from).collect();
    Ok(Json(ApiResponse::success_with_data(responses)))
}

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/admin/murals",
    request_body = MuralUpsertRequest,
    responses(
        (status = 201, description = "Mural created", body = ApiResponseValue),
        (status = 422, description = "Invalid mural data", body = ApiResponseValue)
    ),
    tag = "murals",
    summary = "Create a mural"
))]
pub async fn create_mural(
    State(state): State<AppState>,
    Json(request): Json<MuralUpsertRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let draft = to_draft(request)?;
    let mural = state.content_service.create_mural(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_data(MuralResponse::from(mural))),
    ))
}

#[cfg_attr(feature = "docs", utoipa::path(
    put,
    path = "/admin/murals/{id}",
    params(("id" = Uuid, Path, description = "Mural id")),
    request_body = MuralUpsertRequest,
    responses(
        (status = 200, description = "Mural updated", body = ApiResponseValue),
        (status = 404, description = "Unknown mural", body = ApiResponseValue)
    ),
    tag = "murals",
    summary = "Update a mural"
))]
pub async fn update_mural(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MuralUpsertRequest>,
) -> Result<Json<ApiResponse<MuralResponse>>, HttpError> {
    let draft = to_draft(request)?;
    let mural = state
        .content_service
        .update_mural(MuralId::from_uuid(id), draft)
        .await?;
    Ok(Json(ApiResponse::success_with_data(mural.into())))
}

#[cfg_attr(feature = "docs", utoipa::path(
    delete,
    path = "/admin/murals/{id}",
    params(("id" = Uuid, Path, description = "Mural id")),
    responses(
        (status = 200, description = "Mural deleted", body = ApiResponseValue),
        (status = 404, description = "Unknown mural", body = ApiResponseValue)
    ),
    tag = "murals",
    summary = "Delete a mural"
))]
pub async fn delete_mural(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, HttpError> {
    state
        .content_service
        .delete_mural(MuralId::from_uuid(id))
        .await?;
    Ok(Json(ApiResponse::success()))
}

#[cfg_attr(feature = "docs", utoipa::path(
    put,
    path = "/admin/murals/{id}/images/order",
    params(("id" = Uuid, Path, description = "Mural id")),
    request_body = MoveImageRequest,
    responses(
        (status = 200, description = "Image moved", body = ApiResponseValue),
        (status = 400, description = "Index out of range", body = ApiResponseValue)
    ),
    tag = "murals",
    summary = "Reorder a mural image"
))]
pub async fn reorder_mural_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MoveImageRequest>,
) -> Result<Json<ApiResponse<MuralResponse>>, HttpError> {
    let mural = state
        .content_service
        .reorder_mural_image(MuralId::from_uuid(id), request.from, request.to)
        .await?;
    Ok(Json(ApiResponse::success_with_data(mural.into())))
}

#[cfg_attr(feature = "docs", utoipa::path(
    delete,
    path = "/admin/murals/{id}/images/{index}",
    params(
        ("id" = Uuid, Path, description = "Mural id"),
        ("index" = usize, Path, description = "Position in the image list")
    ),
    responses(
        (status = 200, description = "Image removed", body = ApiResponseValue),
        (status = 400, description = "Index out of range", body = ApiResponseValue)
    ),
    tag = "murals",
    summary = "Remove a mural image"
))]
pub async fn remove_mural_image(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<ApiResponse<MuralResponse>>, HttpError> {
    let mural = state
        .content_service
        .remove_mural_image(MuralId::from_uuid(id), index)
        .await?;
    Ok(Json(ApiResponse::success_with_data(mural.into())))
}
