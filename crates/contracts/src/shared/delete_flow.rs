//! Удаление с подтверждением.
//!
//! Жизненный цикл: `request` показывает подтверждение, `cancel` закрывает его без
//! сетевых вызовов, `begin` (после подтверждения) помечает ID как "в полёте",
//! `finish` применяет результат удалённого вызова к локальному списку.
//! Для одного ID одновременно допускается не более одного удаления.
//!
//! Пока хотя бы одно удаление выполняется, статус остаётся "en cours".
//! Итог показывается, когда завершится последнее; ошибка из той же серии
//! не перекрывается последующим успехом.

use crate::shared::list_query::Listable;
use crate::shared::record_source::{RecordSource, SourceError};
use std::collections::HashSet;

/// Вид статусного сообщения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Success,
    Error,
}

/// Статусное сообщение, привязанное к действию пользователя
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn loading(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Loading,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    /// Успех скрывается сам, ошибка висит до закрытия пользователем
    pub fn auto_dismiss(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

/// Ожидающее подтверждения удаление
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    pub id: String,
    pub message: String,
}

/// Итог попытки удаления
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Запись удалена в источнике и из локального списка
    Deleted,
    /// Источник вернул ошибку, локальный список не изменён
    Failed(SourceError),
    /// Нечего подтверждать (подтверждение отменено или не запрошено)
    NothingPending,
    /// Удаление этого ID уже выполняется
    AlreadyInFlight,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteFlow {
    pending: Option<PendingDeletion>,
    in_flight: HashSet<String>,
    /// Итог текущей серии удалений
    outcome: Option<StatusMessage>,
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Показать подтверждение для записи. `false`, если её удаление уже идёт.
    pub fn request(&mut self, id: impl Into<String>, message: impl Into<String>) -> bool {
        let id = id.into();
        if self.in_flight.contains(&id) {
            return false;
        }
        self.pending = Some(PendingDeletion {
            id,
            message: message.into(),
        });
        true
    }

    pub fn pending(&self) -> Option<&PendingDeletion> {
        self.pending.as_ref()
    }

    /// Отказ от подтверждения: никаких вызовов, остальное состояние не меняется
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Подтверждение: забирает ожидающий ID и помечает его как выполняемый.
    /// `None`, если подтверждать нечего или этот ID уже в работе.
    pub fn begin(&mut self) -> Option<String> {
        let pending = self.pending.take()?;
        if self.in_flight.contains(&pending.id) {
            return None;
        }
        // новая серия сбрасывает итог предыдущей
        if self.in_flight.is_empty() {
            self.outcome = None;
        }
        self.in_flight.insert(pending.id.clone());
        Some(pending.id)
    }

    /// Применить результат удалённого удаления к локальному списку
    pub fn finish<T: Listable>(
        &mut self,
        id: &str,
        result: Result<(), SourceError>,
        items: &mut Vec<T>,
    ) -> DeleteOutcome {
        self.in_flight.remove(id);
        match result {
            Ok(()) => {
                if let Some(pos) = items.iter().position(|r| r.record_id() == id) {
                    items.remove(pos);
                }
                let has_error = matches!(&self.outcome, Some(m) if m.kind == StatusKind::Error);
                if !has_error {
                    self.outcome = Some(StatusMessage::success("Élément supprimé avec succès"));
                }
                DeleteOutcome::Deleted
            }
            Err(e) => {
                self.outcome = Some(StatusMessage::error(format!(
                    "Échec de la suppression : {}",
                    e
                )));
                DeleteOutcome::Failed(e)
            }
        }
    }

    /// Подтвердить ожидающее удаление и выполнить его через источник
    pub async fn confirm<T, S>(&mut self, source: &S, items: &mut Vec<T>) -> DeleteOutcome
    where
        T: Listable,
        S: RecordSource<T> + ?Sized,
    {
        let pending_id = self.pending.as_ref().map(|p| p.id.clone());
        let Some(id) = self.begin() else {
            return match pending_id {
                Some(_) => DeleteOutcome::AlreadyInFlight,
                None => DeleteOutcome::NothingPending,
            };
        };
        let result = source.delete_by_id(&id).await;
        self.finish(&id, result, items)
    }

    pub fn is_in_flight(&self, id: &str) -> bool {
        self.in_flight.contains(id)
    }

    /// "en cours", пока выполняется хоть одно удаление, затем итог серии
    pub fn status(&self) -> Option<StatusMessage> {
        match self.in_flight.len() {
            0 => self.outcome.clone(),
            1 => Some(StatusMessage::loading("Suppression en cours…")),
            n => Some(StatusMessage::loading(format!("{} suppressions en cours…", n))),
        }
    }

    pub fn dismiss_status(&mut self) {
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::SortValue;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        title: String,
    }

    impl Listable for Row {
        fn record_id(&self) -> String {
            self.id.clone()
        }

        fn search_texts(&self) -> Vec<&str> {
            vec![self.title.as_str()]
        }

        fn filter_value(&self, _field: &str) -> Option<String> {
            None
        }

        fn sort_value(&self, _field: &str) -> Option<SortValue> {
            None
        }
    }

    struct FakeSource {
        rows: RefCell<Vec<Row>>,
        fail_with: Option<SourceError>,
        delete_calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(rows: Vec<Row>) -> Self {
            Self {
                rows: RefCell::new(rows),
                fail_with: None,
                delete_calls: Cell::new(0),
            }
        }

        fn failing(rows: Vec<Row>, err: SourceError) -> Self {
            Self {
                fail_with: Some(err),
                ..Self::new(rows)
            }
        }
    }

    #[async_trait(?Send)]
    impl RecordSource<Row> for FakeSource {
        async fn fetch_all(&self) -> Result<Vec<Row>, SourceError> {
            Ok(self.rows.borrow().clone())
        }

        async fn delete_by_id(&self, id: &str) -> Result<(), SourceError> {
            self.delete_calls.set(self.delete_calls.get() + 1);
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            let mut rows = self.rows.borrow_mut();
            let before = rows.len();
            rows.retain(|r| r.id != id);
            if rows.len() == before {
                return Err(SourceError::NotFound(id.to_string()));
            }
            Ok(())
        }
    }

    fn three_rows() -> Vec<Row> {
        ["r1", "r2", "r3"]
            .iter()
            .map(|id| Row {
                id: id.to_string(),
                title: format!("Rapport {}", id),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_only_that_record() {
        let source = FakeSource::new(three_rows());
        let mut items = source.fetch_all().await.unwrap();
        let mut flow = DeleteFlow::new();

        assert!(flow.request("r2", "Supprimer ce rapport ?"));
        assert_eq!(flow.pending().map(|p| p.id.as_str()), Some("r2"));

        let outcome = flow.confirm(&source, &mut items).await;
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(
            items.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["r1", "r3"]
        );
        assert_eq!(source.delete_calls.get(), 1);
        let status = flow.status().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert!(status.auto_dismiss());
        assert!(flow.pending().is_none());
        assert!(!flow.is_in_flight("r2"));
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_list_unchanged() {
        let source = FakeSource::failing(three_rows(), SourceError::Http { status: 500 });
        let mut items = three_rows();
        let mut flow = DeleteFlow::new();

        flow.request("r2", "Supprimer ce rapport ?");
        let outcome = flow.confirm(&source, &mut items).await;

        assert_eq!(outcome, DeleteOutcome::Failed(SourceError::Http { status: 500 }));
        assert_eq!(items, three_rows());
        let status = flow.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.contains("HTTP 500"));
        assert!(!status.auto_dismiss());
        assert!(!flow.is_in_flight("r2"));
    }

    #[tokio::test]
    async fn test_cancel_makes_no_call_and_changes_nothing() {
        let source = FakeSource::new(three_rows());
        let mut items = three_rows();
        let mut flow = DeleteFlow::new();

        flow.request("r1", "Supprimer ?");
        flow.cancel();
        let outcome = flow.confirm(&source, &mut items).await;

        assert_eq!(outcome, DeleteOutcome::NothingPending);
        assert_eq!(source.delete_calls.get(), 0);
        assert_eq!(items, three_rows());
        assert!(flow.status().is_none());
    }

    #[test]
    fn test_second_request_for_in_flight_id_is_refused() {
        let mut flow = DeleteFlow::new();
        flow.request("r1", "Supprimer ?");
        assert_eq!(flow.begin().as_deref(), Some("r1"));
        assert!(flow.is_in_flight("r1"));
        assert_eq!(flow.status().map(|s| s.kind), Some(StatusKind::Loading));

        // двойной клик во время запроса
        assert!(!flow.request("r1", "Supprimer ?"));
        assert_eq!(flow.begin(), None);

        // другой ID не блокируется
        assert!(flow.request("r2", "Supprimer ?"));
        assert_eq!(flow.begin().as_deref(), Some("r2"));

        let mut items = three_rows();
        flow.finish("r1", Ok(()), &mut items);
        assert!(!flow.is_in_flight("r1"));
        assert!(flow.request("r1", "Supprimer ?"));
    }

    #[test]
    fn test_status_stays_loading_until_last_delete_finishes() {
        let mut flow = DeleteFlow::new();
        let mut items = three_rows();
        flow.request("r1", "Supprimer ?");
        flow.begin();
        flow.request("r2", "Supprimer ?");
        flow.begin();
        assert_eq!(
            flow.status(),
            Some(StatusMessage::loading("2 suppressions en cours…"))
        );

        flow.finish("r1", Ok(()), &mut items);
        assert_eq!(
            flow.status(),
            Some(StatusMessage::loading("Suppression en cours…"))
        );

        flow.finish("r2", Ok(()), &mut items);
        assert_eq!(flow.status().map(|s| s.kind), Some(StatusKind::Success));
        assert_eq!(
            items.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["r3"]
        );
    }

    #[test]
    fn test_error_in_series_is_not_hidden_by_later_success() {
        let mut flow = DeleteFlow::new();
        let mut items = three_rows();
        flow.request("r1", "Supprimer ?");
        flow.begin();
        flow.request("r2", "Supprimer ?");
        flow.begin();

        flow.finish("r1", Err(SourceError::Http { status: 500 }), &mut items);
        assert_eq!(flow.status().map(|s| s.kind), Some(StatusKind::Loading));

        flow.finish("r2", Ok(()), &mut items);
        let status = flow.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.contains("HTTP 500"));

        // следующая серия начинается с чистого статуса
        flow.request("r3", "Supprimer ?");
        flow.begin();
        flow.finish("r3", Ok(()), &mut items);
        assert_eq!(flow.status().map(|s| s.kind), Some(StatusKind::Success));
    }

    #[test]
    fn test_finish_for_unknown_id_keeps_list() {
        let mut flow = DeleteFlow::new();
        let mut items = three_rows();
        let outcome = flow.finish("zz", Ok(()), &mut items);
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_dismiss_status() {
        let mut flow = DeleteFlow::new();
        let mut items = three_rows();
        flow.finish("r3", Err(SourceError::Network("offline".into())), &mut items);
        assert!(flow.status().is_some());
        flow.dismiss_status();
        assert!(flow.status().is_none());
    }
}
