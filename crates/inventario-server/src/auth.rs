use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use crate::api::error_response;
use crate::state::AppState;

/// Static bearer-token middleware for the `/api` routes.
///
/// The expected token is a single process-wide secret loaded at startup.
/// Missing header, wrong scheme or mismatched token all fail closed with the
/// same 401 body, before any database access happens.
pub async fn bearer_auth_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|token| token == state.api_token.as_str())
        .unwrap_or(false);

    if !authorized {
        tracing::warn!(
            path = %req.uri().path(),
            "Request rejected: missing or invalid bearer token"
        );
        return error_response(StatusCode::UNAUTHORIZED, "Não autorizado");
    }

    next.run(req).await
}
