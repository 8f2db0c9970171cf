use axum::{Json, extract::State};
use validator::Validate;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ApiResponseValue;
use crate::incoming::http_axum::{
    dto::{
        requests::SectionUpsertRequest,
        responses::{ApiResponse, SectionResponse},
    },
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;
use atelier_application::error::AppError;
use domain::section::Section;

#[cfg_attr(feature = "docs", utoipa::path(
    put,
    path = "/admin/sections",
    request_body = SectionUpsertRequest,
    responses(
        (status = 200, description = "Section created or replaced", body = ApiResponseValue),
        (status = 422, description = "Invalid section data", body = ApiResponseValue)
    ),
    tag = "sections",
    summary = "Upsert a site section"
))]
pub async fn upsert_section(
    State(state): State<AppState>,
    Json(request): Json<SectionUpsertRequest>,
) -> Result<Json<ApiResponse<SectionResponse>>, HttpError> {
    if let Err(e) = request.validate() {
        return Err(HttpError(AppError::ValidationError {
            message: e.to_string(),
        }));
    }

    let section = Section {
        slug: request.slug,
        title: request.title,
        description: request.description,
    };
    let saved = state.content_service.upsert_section(section).await?;
    Ok(Json(ApiResponse::success_with_data(saved.into())))
}
