use super::config::ComparatorKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Значение фильтра "все" (измерение не ограничено)
pub const FILTER_ALL: &str = "all";

/// Пустое значение и [`FILTER_ALL`] означают "без ограничения", а не "равно пустой строке"
pub fn is_unconstrained(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(FILTER_ALL)
}

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Asc)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Состояние представления списка, которым владеет страница.
///
/// Видимая страница никогда не хранится отдельно: она пересчитывается из
/// исходных записей и этого состояния. Любое изменение поиска или фильтров
/// возвращает на первую страницу.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListViewState {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub sort_field: String,
    pub sort_direction: SortDirection,
    /// Номер страницы, начиная с 1
    pub page: usize,
}

impl ListViewState {
    pub fn new(sort_field: impl Into<String>, sort_direction: SortDirection) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort_field: sort_field.into(),
            sort_direction,
            page: 1,
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Установить значение измерения; пустое значение или "all" снимает фильтр
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        if is_unconstrained(&value) {
            self.filters.remove(&field);
        } else {
            self.filters.insert(field, value.trim().to_string());
        }
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.search.clear();
        self.page = 1;
    }

    /// Текущее значение измерения, если оно ограничено
    pub fn active_filter(&self, field: &str) -> Option<&str> {
        self.filters
            .get(field)
            .map(String::as_str)
            .filter(|v| !is_unconstrained(v))
    }

    /// Количество активных фильтров (для бейджа панели фильтров)
    pub fn active_filters_count(&self) -> usize {
        let filters = self
            .filters
            .values()
            .filter(|v| !is_unconstrained(v))
            .count();
        if self.search.is_empty() {
            filters
        } else {
            filters + 1
        }
    }

    /// Клик по заголовку колонки: тот же ключ меняет направление,
    /// новый ключ начинается с убывания для дат и с возрастания для остальных.
    pub fn toggle_sort(&mut self, field: &str, comparator: ComparatorKind) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field.to_string();
            self.sort_direction = match comparator {
                ComparatorKind::Date => SortDirection::Desc,
                ComparatorKind::Text | ComparatorKind::Number => SortDirection::Asc,
            };
        }
        self.page = 1;
    }

    /// Явный выбор ключа и направления (выпадающий список сортировки)
    pub fn set_sort(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.sort_field = field.into();
        self.sort_direction = direction;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_on_page_three() -> ListViewState {
        let mut state = ListViewState::new("publication_date", SortDirection::Desc);
        state.set_page(3);
        state
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut state = state_on_page_three();
        state.set_search("bt");
        assert_eq!(state.page, 1);
        assert_eq!(state.search, "bt");
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = state_on_page_three();
        state.set_filter("type", "OTA");
        assert_eq!(state.page, 1);
        assert_eq!(state.active_filter("type"), Some("OTA"));
    }

    #[test]
    fn test_sentinel_values_remove_the_filter() {
        let mut state = ListViewState::new("title", SortDirection::Asc);
        state.set_filter("language", "fr");
        state.set_filter("language", "all");
        assert!(state.filters.is_empty());

        state.set_filter("year", "2024");
        state.set_filter("year", "   ");
        assert!(state.filters.is_empty());
        assert_eq!(state.active_filters_count(), 0);
    }

    #[test]
    fn test_active_filters_count_includes_search() {
        let mut state = ListViewState::new("title", SortDirection::Asc);
        state.set_filter("language", "fr");
        state.set_filter("year", "2023");
        state.set_search("rapport");
        assert_eq!(state.active_filters_count(), 3);

        state.clear_filters();
        assert_eq!(state.active_filters_count(), 0);
    }

    #[test]
    fn test_toggle_sort_flips_direction_on_same_field() {
        let mut state = ListViewState::new("publication_date", SortDirection::Desc);
        state.toggle_sort("publication_date", ComparatorKind::Date);
        assert_eq!(state.sort_direction, SortDirection::Asc);
        state.toggle_sort("publication_date", ComparatorKind::Date);
        assert_eq!(state.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_toggle_sort_new_field_picks_direction_by_kind() {
        let mut state = state_on_page_three();
        state.toggle_sort("title", ComparatorKind::Text);
        assert_eq!(state.sort_field, "title");
        assert_eq!(state.sort_direction, SortDirection::Asc);
        assert_eq!(state.page, 1);

        state.toggle_sort("auction_date", ComparatorKind::Date);
        assert_eq!(state.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_set_sort_resets_page() {
        let mut state = ListViewState::new("publication_date", SortDirection::Desc);
        state.set_page(3);
        state.set_sort("title", SortDirection::Asc);
        assert_eq!(state.sort_field, "title");
        assert_eq!(state.sort_direction, SortDirection::Asc);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_is_never_zero() {
        let mut state = ListViewState::new("title", SortDirection::Asc);
        state.set_page(0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_sort_direction_parse() {
        assert_eq!(SortDirection::parse("ASC"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse(" desc"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("up"), None);
    }
}
