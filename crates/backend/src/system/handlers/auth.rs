use axum::{extract::Json, http::StatusCode};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::{jwt, password, settings};

/// Проверить учётные данные администратора из конфигурации
fn verify_credentials(username: &str, password_plain: &str) -> anyhow::Result<bool> {
    let settings = settings()?;
    if username.trim() != settings.admin_username {
        return Ok(false);
    }
    Ok(password::verify_password(
        password_plain,
        &settings.admin_password_hash,
    )?)
}

/// POST /api/system/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    let valid = verify_credentials(&request.username, &request.password).map_err(|e| {
        tracing::error!("Credential check failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    if !valid {
        tracing::warn!("Failed login attempt for '{}'", request.username);
        return Err(StatusCode::UNAUTHORIZED);
    }

    let username = request.username.trim().to_string();
    let access_token = jwt::generate_access_token(&username, true).map_err(|e| {
        tracing::error!("Failed to issue token: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    tracing::info!("Admin '{}' logged in", username);

    Ok(Json(LoginResponse {
        access_token,
        user: UserInfo {
            username,
            is_admin: true,
        },
    }))
}

/// GET /api/system/auth/me (protected by require_admin)
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Json<UserInfo> {
    Json(UserInfo {
        username: claims.sub,
        is_admin: claims.is_admin,
    })
}
