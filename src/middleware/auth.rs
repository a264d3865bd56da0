use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use crate::auth::{self, Principal};

/// Resolves the bearer token, when there is a usable one, into a `Principal`
/// request extension. Requests are never rejected here: without a principal
/// the access policy denies user writes further down.
pub async fn principal_middleware(mut request: Request, next: Next) -> Response {
    if let Some(principal) = resolve_principal(request.headers()) {
        request.extensions_mut().insert(principal);
    }

    next.run(request).await
}

fn resolve_principal(headers: &HeaderMap) -> Option<Principal> {
    let token = match extract_jwt_from_headers(headers) {
        Ok(Some(token)) => token,
        Ok(None) => return None,
        Err(reason) => {
            tracing::debug!("Ignoring Authorization header: {}", reason);
            return None;
        }
    };

    match auth::validate_jwt(&token) {
        Ok(claims) => Some(Principal::from(claims)),
        Err(e) => {
            tracing::debug!("Ignoring bearer token: {}", e);
            None
        }
    }
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<Option<String>, String> {
    let Some(auth_header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(Some(token.trim().to_string())),
        Some(_) => Err("Empty JWT token".to_string()),
        None => Err("Authorization header must use Bearer token format".to_string()),
    }
}
