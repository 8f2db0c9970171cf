use axum::{Json, extract::State};

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ApiResponseValue;
use crate::incoming::http_axum::{dto::responses::ApiResponse, error_mapper::HttpError};
use crate::shared::app_state::AppState;

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = ApiResponseValue,
         example = json!({
             "ok": true,
             "data": { "environment": "production", "pieces": 42 }
         })
        )
    ),
    tag = "system",
    summary = "Health check",
    operation_id = "health_check"
))]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<serde_json::Value>>, HttpError> {
    // exercises the database through the read path
    let pieces = state.gallery_query_service.public_gallery().await?;

    Ok(Json(ApiResponse::success_with_data(serde_json::json!({
        "environment": state.config.environment.env,
        "pieces": pieces.len(),
    }))))
}
