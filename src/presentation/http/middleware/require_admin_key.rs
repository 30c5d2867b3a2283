// src/presentation/http/middleware/require_admin_key.rs
use crate::application::error::ApplicationError;
use crate::infrastructure::sources::ADMIN_KEY_HEADER;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Guard for the `/api/v1` surface: the caller must present the platform
/// admin key in the `x-admin-key` header.
pub async fn require_admin_key(req: Request<Body>, next: Next) -> Response {
    let presented = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let Some(presented) = presented else {
        return HttpError::from_error(ApplicationError::unauthorized(format!(
            "missing {ADMIN_KEY_HEADER} header"
        )))
        .into_response();
    };

    // Clone the cache handle so the request can be moved into `next`.
    let admin_key = match req.extensions().get::<HttpState>() {
        Some(state) => std::sync::Arc::clone(&state.admin_key),
        None => {
            return HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
            .into_response();
        }
    };

    match admin_key.verify(&presented).await {
        Ok(true) => next.run(req).await,
        Ok(false) => {
            HttpError::from_error(ApplicationError::unauthorized("invalid admin key"))
                .into_response()
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}
