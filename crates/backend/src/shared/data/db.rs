use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Таблицы агрегатов; создаются при старте, если их ещё нет
const SCHEMA: &[(&str, &str)] = &[
    (
        "a001_report",
        r#"
        CREATE TABLE IF NOT EXISTS a001_report (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            summary TEXT NOT NULL DEFAULT '',
            keywords TEXT NOT NULL DEFAULT '[]',
            category TEXT NOT NULL,
            language TEXT NOT NULL DEFAULT 'fr',
            publication_date TEXT NOT NULL,
            file_url TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a002_auction",
        r#"
        CREATE TABLE IF NOT EXISTS a002_auction (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            instrument_type TEXT NOT NULL,
            auction_date TEXT NOT NULL,
            settlement_date TEXT,
            maturity TEXT NOT NULL DEFAULT '',
            amount_offered REAL NOT NULL DEFAULT 0,
            status TEXT NOT NULL,
            details TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a003_document",
        r#"
        CREATE TABLE IF NOT EXISTS a003_document (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            summary TEXT NOT NULL DEFAULT '',
            keywords TEXT NOT NULL DEFAULT '[]',
            doc_type TEXT NOT NULL,
            language TEXT NOT NULL DEFAULT 'fr',
            publication_date TEXT NOT NULL,
            file_url TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a004_emission",
        r#"
        CREATE TABLE IF NOT EXISTS a004_emission (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            instrument_type TEXT NOT NULL,
            issue_date TEXT NOT NULL,
            maturity_date TEXT NOT NULL,
            amount REAL NOT NULL DEFAULT 0,
            rate REAL NOT NULL DEFAULT 0,
            details TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a005_auction_result",
        r#"
        CREATE TABLE IF NOT EXISTS a005_auction_result (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            instrument_type TEXT NOT NULL,
            auction_date TEXT NOT NULL,
            amount_requested REAL NOT NULL DEFAULT 0,
            amount_allotted REAL NOT NULL DEFAULT 0,
            weighted_avg_rate REAL NOT NULL DEFAULT 0,
            min_rate REAL NOT NULL DEFAULT 0,
            max_rate REAL NOT NULL DEFAULT 0,
            details TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
];

/// SQLite URL для файла БД (с поддержкой путей Windows)
fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    for (table, ddl) in SCHEMA {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await
        .map_err(|e| anyhow::anyhow!("failed to create table {}: {}", table, e))?;
    }
    tracing::info!("Database schema ready ({} tables)", SCHEMA.len());

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_for_absolute_unix_path() {
        assert_eq!(
            sqlite_url(Path::new("/var/lib/treasury.db")).unwrap(),
            "sqlite:///var/lib/treasury.db?mode=rwc"
        );
    }

    #[test]
    fn test_schema_covers_all_aggregates() {
        let tables: Vec<&str> = SCHEMA.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            tables,
            vec![
                "a001_report",
                "a002_auction",
                "a003_document",
                "a004_emission",
                "a005_auction_result"
            ]
        );
        for (table, ddl) in SCHEMA {
            assert!(ddl.contains(&format!("CREATE TABLE IF NOT EXISTS {}", table)));
        }
    }
}
