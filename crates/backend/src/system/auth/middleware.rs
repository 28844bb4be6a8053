use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

/// Middleware that requires a bearer token to be present
///
/// The token itself is issued and validated outside this service; only its
/// presence is checked here.
pub async fn require_token(req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let has_token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| !token.trim().is_empty())
        .unwrap_or(false);

    if !has_token {
        tracing::debug!("Rejected {} without bearer token", req.uri().path());
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(req).await)
}
