//! Состояние страницы-списка: загруженные записи, `ListViewState` и производная
//! страница, вычисляемая `apply_list_query` в `Memo`.
//!
//! ```rust,ignore
//! let list = ListView::<Document>::new(Document::list_config());
//! list.load(HttpRecordSource::<Document>::for_aggregate());
//! let rows = move || list.page.get().items;
//! ```

use contracts::shared::list_query::{
    apply_list_query, distinct_filter_values, ListConfig, ListPage, ListViewState, Listable,
};
use contracts::shared::record_source::RecordSource;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub struct ListView<T: Send + Sync + 'static> {
    pub config: StoredValue<ListConfig>,
    /// Все записи в порядке источника
    pub records: RwSignal<Vec<T>>,
    pub state: RwSignal<ListViewState>,
    pub page: Memo<ListPage<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListView<T> {}

impl<T> ListView<T>
where
    T: Listable + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(config: ListConfig) -> Self {
        let state = RwSignal::new(config.initial_state());
        let config = StoredValue::new(config);
        let records = RwSignal::new(Vec::<T>::new());

        let page = Memo::new(move |_| {
            records.with(|records| {
                state.with(|state| config.with_value(|config| apply_list_query(records, config, state)))
            })
        });

        Self {
            config,
            records,
            state,
            page,
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Загрузить все записи из источника (замещает текущие)
    pub fn load<S>(self, source: S)
    where
        S: RecordSource<T> + 'static,
    {
        self.loading.set(true);
        self.error.set(None);
        spawn_local(async move {
            match source.fetch_all().await {
                Ok(items) => {
                    log::debug!("Loaded {} records", items.len());
                    self.records.set(items);
                }
                Err(e) => {
                    log::error!("Failed to load records: {}", e);
                    self.error
                        .set(Some(format!("Impossible de charger les données : {}", e)));
                }
            }
            self.loading.set(false);
        });
    }

    pub fn update_state(self, f: impl FnOnce(&mut ListViewState)) {
        self.state.update(f);
    }

    /// Значения для выпадающего списка фильтра
    pub fn filter_options(self, field: &'static str) -> Signal<Vec<String>> {
        Signal::derive(move || self.records.with(|records| distinct_filter_values(records, field)))
    }

    /// Записи загружены, но ни одна не прошла поиск и фильтры
    pub fn is_empty_result(self) -> Signal<bool> {
        Signal::derive(move || {
            !self.loading.get() && self.error.with(|e| e.is_none()) && self.page.with(|p| p.is_empty())
        })
    }
}
