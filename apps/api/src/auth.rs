use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::errors::AppError;
use crate::state::AppState;

/// Middleware guarding back-office routes. The admin key is verified
/// server-side against `Config::admin_access_key`; there is no client-side
/// cookie flag to trust.
pub async fn require_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match bearer_token(&headers) {
        Some(token) if token == state.config.admin_access_key => Ok(next.run(request).await),
        _ => {
            tracing::warn!("admin key missing or invalid, request denied");
            Err(AppError::Unauthorized)
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(
            bearer_token(&headers_with("Bearer sekrit")),
            Some("sekrit")
        );
    }

    #[test]
    fn rejects_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn rejects_non_bearer_scheme() {
        assert_eq!(bearer_token(&headers_with("Basic sekrit")), None);
    }

    #[test]
    fn rejects_empty_token() {
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
    }
}
