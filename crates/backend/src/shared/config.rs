use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Переменная окружения с явным путём к config.toml
pub const CONFIG_ENV_VAR: &str = "TREASURY_CONFIG";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

/// Учётная запись администратора и секрет подписи токенов.
/// Пустые значения заполняются при старте (см. `system::initialization`).
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    /// Хэш пароля в формате PHC (`$argon2id$...`)
    #[serde(default)]
    pub admin_password_hash: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            admin_username: default_admin_username(),
            admin_password_hash: String::new(),
        }
    }
}

fn default_admin_username() -> String {
    "admin".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[database]
path = "target/db/treasury.db"

[auth]
admin_username = "admin"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Path from `TREASURY_CONFIG`
/// 2. Next to the executable (for production)
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
        tracing::info!("Loading config from {}: {}", CONFIG_ENV_VAR, explicit);
        return parse_config_file(Path::new(&explicit));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return parse_config_file(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config_file(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
    parse_config(&contents)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(db_path);
        }
    }

    PathBuf::from(&config.database.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "target/db/treasury.db");
        assert_eq!(config.auth.admin_username, "admin");
        assert!(config.auth.jwt_secret.is_empty());
        assert!(config.auth.admin_password_hash.is_empty());
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = parse_config("[database]\npath = \"/var/lib/treasury.db\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.admin_username, "admin");
        assert_eq!(
            get_database_path(&config),
            PathBuf::from("/var/lib/treasury.db")
        );
    }

    #[test]
    fn test_database_section_is_required() {
        assert!(parse_config("[server]\nport = 8080\n").is_err());
    }
}
