use axum::{extract::Request, middleware::Next, response::Response};
use axum_login::AuthSession;

use crate::incoming::http_axum::{auth::backend::AuthBackend, error_mapper::HttpError};
use atelier_application::error::AppError;

/// The only account the backend can authenticate is the admin, so a
/// logged-in session is sufficient.
pub async fn require_admin(
    auth_session: AuthSession<AuthBackend>,
    request: Request,
    next: Next,
) -> Result<Response, HttpError> {
    if auth_session.user.is_none() {
        return Err(HttpError(AppError::Unauthorized));
    }

    Ok(next.run(request).await)
}
