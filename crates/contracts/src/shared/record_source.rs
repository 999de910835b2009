//! Узкий интерфейс к источнику записей: загрузка коллекции и удаление по ID.
//!
//! На frontend реализуется поверх HTTP API backend, в тестах in-memory заглушкой.

use async_trait::async_trait;
use thiserror::Error;

/// Ошибки источника записей
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Record not found: {0}")]
    NotFound(String),
}

impl SourceError {
    /// Ошибка по HTTP статусу ответа (404 отдельно)
    pub fn from_status(status: u16, id: &str) -> Self {
        if status == 404 {
            SourceError::NotFound(id.to_string())
        } else {
            SourceError::Http { status }
        }
    }
}

/// Источник записей одной коллекции
///
/// `?Send`: в браузере futures однопоточные.
#[async_trait(?Send)]
pub trait RecordSource<T> {
    /// Загрузить все записи коллекции в порядке источника
    async fn fetch_all(&self) -> Result<Vec<T>, SourceError>;

    /// Удалить запись по идентификатору
    async fn delete_by_id(&self, id: &str) -> Result<(), SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(
            SourceError::from_status(404, "abc"),
            SourceError::NotFound("abc".into())
        );
        assert_eq!(
            SourceError::from_status(500, "abc"),
            SourceError::Http { status: 500 }
        );
        assert_eq!(SourceError::Http { status: 503 }.to_string(), "HTTP 503");
    }
}
