use super::state::{ListViewState, SortDirection};
use serde::{Deserialize, Serialize};

/// Способ сравнения значений ключа сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparatorKind {
    /// Лексикографически, без учёта регистра и диакритики
    Text,
    /// Хронологически
    Date,
    /// Численно
    Number,
}

/// Измерение фильтра (строгое равенство значения поля)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDimension {
    pub field: &'static str,
    pub label: &'static str,
}

/// Разрешённый ключ сортировки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: &'static str,
    pub label: &'static str,
    pub comparator: ComparatorKind,
}

/// Декларативная конфигурация списка одной страницы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub filters: Vec<FilterDimension>,
    pub sort_keys: Vec<SortKey>,
    pub default_sort_field: &'static str,
    pub default_sort_direction: SortDirection,
    pub page_size: usize,
}

impl ListConfig {
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: Vec::new(),
            sort_keys: Vec::new(),
            default_sort_field: "",
            default_sort_direction: SortDirection::Desc,
            page_size,
        }
    }

    pub fn filter(mut self, field: &'static str, label: &'static str) -> Self {
        self.filters.push(FilterDimension { field, label });
        self
    }

    /// Добавить ключ сортировки; первый добавленный становится ключом по умолчанию
    pub fn sort(
        mut self,
        field: &'static str,
        label: &'static str,
        comparator: ComparatorKind,
    ) -> Self {
        if self.sort_keys.is_empty() {
            self.default_sort_field = field;
        }
        self.sort_keys.push(SortKey {
            field,
            label,
            comparator,
        });
        self
    }

    pub fn default_sort(mut self, field: &'static str, direction: SortDirection) -> Self {
        self.default_sort_field = field;
        self.default_sort_direction = direction;
        self
    }

    pub fn sort_key(&self, field: &str) -> Option<&SortKey> {
        self.sort_keys.iter().find(|k| k.field == field)
    }

    /// Начальное состояние страницы: без поиска и фильтров, сортировка по умолчанию
    pub fn initial_state(&self) -> ListViewState {
        ListViewState::new(self.default_sort_field, self.default_sort_direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sort_key_becomes_default() {
        let config = ListConfig::new(10)
            .sort("publication_date", "Date", ComparatorKind::Date)
            .sort("title", "Titre", ComparatorKind::Text);
        let state = config.initial_state();
        assert_eq!(state.sort_field, "publication_date");
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_lookup_helpers() {
        let config = ListConfig::new(12)
            .filter("language", "Langue")
            .sort("title", "Titre", ComparatorKind::Text)
            .default_sort("title", SortDirection::Asc);
        assert_eq!(config.filters.len(), 1);
        assert_eq!(
            config.sort_key("title").map(|k| k.comparator),
            Some(ComparatorKind::Text)
        );
        assert!(config.sort_key("amount").is_none());
        assert_eq!(config.initial_state().sort_direction, SortDirection::Asc);
    }
}
