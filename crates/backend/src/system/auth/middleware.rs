use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};

/// Извлечь bearer-токен из заголовка Authorization
fn bearer_token(req: &Request<Body>) -> Result<&str, StatusCode> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)
}

/// Middleware that requires admin privileges
pub async fn require_admin(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let claims = super::jwt::validate_token(bearer_token(&req)?).map_err(|e| {
        tracing::warn!("Rejected token for {}: {}", req.uri().path(), e);
        StatusCode::UNAUTHORIZED
    })?;

    if !claims.is_admin {
        return Err(StatusCode::FORBIDDEN);
    }

    // Claims доступны обработчикам через CurrentUser
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
