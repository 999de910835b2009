use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

use super::{settings, AuthError};

const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 24;

/// Подписать токен доступа заданным секретом (HS256)
pub fn encode_access_token(username: &str, is_admin: bool, secret: &str) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: username.to_string(),
        is_admin,
        exp: (now + chrono::Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Проверить подпись и срок действия, вернуть claims
pub fn decode_access_token(token: &str, secret: &str) -> Result<TokenClaims, AuthError> {
    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Generate JWT access token with 24 hours lifetime
pub fn generate_access_token(username: &str, is_admin: bool) -> Result<String, AuthError> {
    encode_access_token(username, is_admin, &settings()?.jwt_secret)
}

/// Validate JWT token and extract claims
pub fn validate_token(token: &str) -> Result<TokenClaims, AuthError> {
    decode_access_token(token, &settings()?.jwt_secret)
}

/// Generate a random JWT secret (256 bits), used when config.toml has none
pub fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let token = encode_access_token("admin", true, "secret-a").unwrap();
        let claims = decode_access_token(&token, "secret-a").unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.is_admin);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = encode_access_token("admin", true, "secret-a").unwrap();
        assert!(matches!(
            decode_access_token(&token, "secret-b"),
            Err(AuthError::Token(_))
        ));
    }

    #[test]
    fn test_generated_secrets_differ() {
        let a = generate_jwt_secret();
        assert_eq!(a.len(), 44);
        assert_ne!(a, generate_jwt_secret());
    }
}
