use axum::{Json, extract::State, response::IntoResponse};
use axum_login::AuthSession;
use validator::Validate;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ApiResponseValue;
use crate::{
    incoming::http_axum::{
        auth::backend::{AuthBackend, Credentials},
        dto::{
            requests::LoginRequest,
            responses::{ApiResponse, AuthUserResponse},
        },
        error_mapper::HttpError,
    },
    shared::app_state::AppState,
};
use atelier_application::error::AppError;

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Admin logged in, session cookie set", body = ApiResponseValue),
        (status = 401, description = "Wrong email or password", body = ApiResponseValue),
        (status = 422, description = "Malformed credentials", body = ApiResponseValue)
    ),
    tag = "auth",
    summary = "Login with the admin credentials"
))]
pub async fn login_handler(
    State(_state): State<AppState>,
    mut auth_session: AuthSession<AuthBackend>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    if let Err(e) = request.validate() {
        return Err(HttpError(AppError::ValidationError {
            message: e.to_string(),
        }));
    }

    let credentials = Credentials {
        email: request.email,
        password: request.password,
    };

    let user = auth_session
        .authenticate(credentials)
        .await
        .map_err(|_| HttpError(AppError::InternalServerError))?
        .ok_or(HttpError(AppError::Unauthorized))?;

    auth_session
        .login(&user)
        .await
        .map_err(|_| HttpError(AppError::InternalServerError))?;

    Ok(Json(ApiResponse::success_with_data(AuthUserResponse {
        email: user.email,
    })))
}

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Session destroyed", body = ApiResponseValue)
    ),
    tag = "auth",
    summary = "Logout and clear the session"
))]
pub async fn logout_handler(
    mut auth_session: AuthSession<AuthBackend>,
) -> Result<impl IntoResponse, HttpError> {
    auth_session
        .logout()
        .await
        .map_err(|_| HttpError(AppError::InternalServerError))?;

    Ok(Json(ApiResponse::<serde_json::Value>::success()))
}

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Currently authenticated admin", body = ApiResponseValue),
        (status = 401, description = "No active session", body = ApiResponseValue)
    ),
    tag = "auth",
    summary = "Current session info"
))]
pub async fn me_handler(
    auth_session: AuthSession<AuthBackend>,
) -> Result<impl IntoResponse, HttpError> {
    let user = auth_session.user.ok_or(HttpError(AppError::Unauthorized))?;

    Ok(Json(ApiResponse::success_with_data(AuthUserResponse {
        email: user.email,
    })))
}
