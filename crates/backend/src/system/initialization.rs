use anyhow::Result;

use crate::shared::config::AuthConfig;
use crate::system::auth::{jwt, password, AuthSettings};

/// Пароль администратора, если в config.toml нет хэша
const ADMIN_PASSWORD_ENV_VAR: &str = "TREASURY_ADMIN_PASSWORD";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Дополнить секцию [auth] недостающими значениями.
///
/// Без `jwt_secret` генерируется случайный секрет (токены живут до перезапуска).
/// Без `admin_password_hash` пароль берётся из `TREASURY_ADMIN_PASSWORD`,
/// иначе используется пароль по умолчанию с предупреждением в логе.
pub fn resolve_auth_settings(auth: &AuthConfig) -> Result<AuthSettings> {
    let jwt_secret = if auth.jwt_secret.trim().is_empty() {
        tracing::warn!("auth.jwt_secret is empty, generated a random secret for this run");
        jwt::generate_jwt_secret()
    } else {
        auth.jwt_secret.clone()
    };

    let admin_password_hash = if auth.admin_password_hash.trim().is_empty() {
        let password = match std::env::var(ADMIN_PASSWORD_ENV_VAR) {
            Ok(p) if !p.is_empty() => p,
            _ => {
                tracing::warn!("═══════════════════════════════════════════════");
                tracing::warn!("  No admin password configured!");
                tracing::warn!("  Username: {}", auth.admin_username);
                tracing::warn!("  Password: {}", DEFAULT_ADMIN_PASSWORD);
                tracing::warn!("  Set auth.admin_password_hash in config.toml");
                tracing::warn!("═══════════════════════════════════════════════");
                DEFAULT_ADMIN_PASSWORD.to_string()
            }
        };
        password::hash_password(&password)?
    } else {
        auth.admin_password_hash.clone()
    };

    Ok(AuthSettings {
        jwt_secret,
        admin_username: auth.admin_username.clone(),
        admin_password_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_values_are_kept() {
        let hash = password::hash_password("s3cret").unwrap();
        let settings = resolve_auth_settings(&AuthConfig {
            jwt_secret: "fixed".into(),
            admin_username: "direction".into(),
            admin_password_hash: hash.clone(),
        })
        .unwrap();
        assert_eq!(settings.jwt_secret, "fixed");
        assert_eq!(settings.admin_username, "direction");
        assert_eq!(settings.admin_password_hash, hash);
    }

    #[test]
    fn test_missing_secret_is_generated() {
        let settings = resolve_auth_settings(&AuthConfig {
            jwt_secret: "  ".into(),
            admin_username: "admin".into(),
            admin_password_hash: password::hash_password("x").unwrap(),
        })
        .unwrap();
        assert!(!settings.jwt_secret.trim().is_empty());
    }
}
