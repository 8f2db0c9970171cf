use axum::{Json, extract::State};
use validator::Validate;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ApiResponseValue;
use crate::incoming::http_axum::{
    dto::{requests::OrderRequestBody, responses::ApiResponse},
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;
use atelier_application::error::AppError;
use domain::order::OrderRequest;

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/order",
    request_body = OrderRequestBody,
    responses(
        (status = 200, description = "Inquiry forwarded to the artist", body = ApiResponseValue),
        (status = 422, description = "Missing name, email or piece name", body = ApiResponseValue),
        (status = 500, description = "Email delivery failed", body = ApiResponseValue)
    ),
    tag = "orders",
    summary = "Submit a purchase inquiry"
))]
pub async fn submit_order(
    State(state): State<AppState>,
    Json(request): Json<OrderRequestBody>,
) -> Result<Json<ApiResponse<serde_json::Value>>, HttpError> {
    if let Err(e) = request.validate() {
        return Err(HttpError(AppError::ValidationError {
            message: e.to_string(),
        }));
    }

    let order = OrderRequest {
        customer_name: request.name,
        customer_email: request.email,
        message: request.message,
        art_piece_name: request.art_piece_name,
    };
    state.order_service.submit_order_request(order).await?;
    Ok(Json(ApiResponse::success()))
}
