use axum::http::StatusCode;
use contracts::shared::list_query::{apply_list_query, ListConfig, ListPage, Listable};
use std::collections::HashMap;

use crate::shared::list_params::parse_list_params;
use crate::shared::service_error::ServiceError;

/// Страница списка по query-параметрам `/list`
pub fn list_page<T: Listable + Clone>(
    records: &[T],
    config: &ListConfig,
    params: &HashMap<String, String>,
) -> ListPage<T> {
    let state = parse_list_params(config, params);
    apply_list_query(records, config, &state)
}

/// Разбор ID из пути; 400 для некорректного UUID
pub fn parse_id(id: &str) -> Result<uuid::Uuid, StatusCode> {
    uuid::Uuid::parse_str(id).map_err(|_| StatusCode::BAD_REQUEST)
}

/// Код ответа для ошибки сервиса (create/update/delete)
pub fn service_error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) | ServiceError::InvalidId => StatusCode::BAD_REQUEST,
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::{ComparatorKind, SortValue};

    #[derive(Clone)]
    struct Row(&'static str, u32);

    impl Listable for Row {
        fn record_id(&self) -> String {
            self.0.to_string()
        }
        fn search_texts(&self) -> Vec<&str> {
            vec![self.0]
        }
        fn filter_value(&self, _field: &str) -> Option<String> {
            None
        }
        fn sort_value(&self, field: &str) -> Option<SortValue> {
            (field == "n").then(|| SortValue::Number(self.1 as f64))
        }
    }

    #[test]
    fn test_list_page_from_query() {
        let rows: Vec<Row> = (1..=25).map(|n| Row("ligne", n)).collect();
        let config = ListConfig::new(10).sort("n", "N", ComparatorKind::Number);
        let params: HashMap<String, String> = [("page", "9"), ("dir", "asc")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let page = list_page(&rows, &config, &params);
        assert_eq!(page.total_matching, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].1, 21);
    }

    #[test]
    fn test_service_error_status() {
        assert_eq!(
            service_error_status(&ServiceError::Validation(
                "Le titre ne peut pas être vide".into()
            )),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            service_error_status(&ServiceError::InvalidId),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            service_error_status(&ServiceError::NotFound),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            service_error_status(&anyhow::anyhow!("database is locked").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_status_does_not_depend_on_error_text() {
        // Внутренняя ошибка с текстом, похожим на валидацию, остаётся 500
        let err: ServiceError = anyhow::anyhow!("Validation failed: disk I/O error").into();
        assert_eq!(service_error_status(&err), StatusCode::INTERNAL_SERVER_ERROR);

        let err: ServiceError = anyhow::anyhow!("Not found: table report").into();
        assert_eq!(service_error_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_parse_id() {
        assert!(parse_id("6f1c2b1e-8d4f-4c39-9a52-0b8f2e4e7a11").is_ok());
        assert_eq!(parse_id("42"), Err(StatusCode::BAD_REQUEST));
    }
}
