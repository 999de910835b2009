pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

use once_cell::sync::OnceCell;

/// Параметры аутентификации после инициализации (секрет и хэш заполнены)
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub admin_username: String,
    pub admin_password_hash: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth settings are not initialized")]
    NotInitialized,
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("password hash error: {0}")]
    Hash(String),
}

static AUTH_SETTINGS: OnceCell<AuthSettings> = OnceCell::new();

pub fn install_settings(settings: AuthSettings) -> anyhow::Result<()> {
    AUTH_SETTINGS
        .set(settings)
        .map_err(|_| anyhow::anyhow!("Auth settings already installed"))
}

pub fn settings() -> Result<&'static AuthSettings, AuthError> {
    AUTH_SETTINGS.get().ok_or(AuthError::NotInitialized)
}
