use contracts::shared::list_query::{ComparatorKind, ListConfig, ListViewState, SortDirection};
use std::collections::HashMap;

/// Разбор query-строки `/api/<collection>/list` в состояние списка.
///
/// Поддерживаемые параметры: `search`, `sort`, `dir` (`asc`/`desc`), `page`
/// и по одному параметру на каждое измерение фильтра из конфигурации
/// (`?category=rapport_annuel&year=2024`). Прочие параметры игнорируются.
/// Некорректные `dir`/`page` заменяются значениями по умолчанию.
pub fn parse_list_params(config: &ListConfig, params: &HashMap<String, String>) -> ListViewState {
    let mut state = config.initial_state();

    if let Some(sort) = params.get("sort").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        state.sort_field = sort.to_string();
        // Для нового поля направление по умолчанию как при клике по заголовку
        state.sort_direction = match config.sort_key(sort) {
            Some(key) if sort != config.default_sort_field => match key.comparator {
                ComparatorKind::Date => SortDirection::Desc,
                _ => SortDirection::Asc,
            },
            _ => config.default_sort_direction,
        };
    }
    if let Some(dir) = params.get("dir").and_then(|d| SortDirection::parse(d)) {
        state.sort_direction = dir;
    }

    for dimension in &config.filters {
        if let Some(value) = params.get(dimension.field) {
            state.set_filter(dimension.field, value.as_str());
        }
    }
    if let Some(search) = params.get("search") {
        state.set_search(search.as_str());
    }

    // Страница выставляется последней: фильтры и поиск сбрасывают её на 1
    let page = params
        .get("page")
        .and_then(|p| p.trim().parse::<usize>().ok())
        .unwrap_or(1);
    state.set_page(page);

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ListConfig {
        ListConfig::new(10)
            .filter("category", "Catégorie")
            .filter("year", "Année")
            .sort("publication_date", "Date", ComparatorKind::Date)
            .sort("title", "Titre", ComparatorKind::Text)
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_query_gives_initial_state() {
        let state = parse_list_params(&config(), &HashMap::new());
        assert_eq!(state, config().initial_state());
    }

    #[test]
    fn test_full_query_is_parsed() {
        let state = parse_list_params(
            &config(),
            &params(&[
                ("search", "dette"),
                ("category", "rapport_annuel"),
                ("year", "2024"),
                ("sort", "title"),
                ("dir", "desc"),
                ("page", "3"),
            ]),
        );
        assert_eq!(state.search, "dette");
        assert_eq!(state.active_filter("category"), Some("rapport_annuel"));
        assert_eq!(state.active_filter("year"), Some("2024"));
        assert_eq!(state.sort_field, "title");
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert_eq!(state.page, 3);
    }

    #[test]
    fn test_text_sort_without_dir_defaults_to_ascending() {
        let state = parse_list_params(&config(), &params(&[("sort", "title")]));
        assert_eq!(state.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let state = parse_list_params(
            &config(),
            &params(&[("dir", "sideways"), ("page", "-2"), ("category", "all")]),
        );
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert_eq!(state.page, 1);
        assert_eq!(state.active_filter("category"), None);
    }

    #[test]
    fn test_undeclared_dimensions_are_ignored() {
        let state = parse_list_params(&config(), &params(&[("status", "annoncee")]));
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_page_zero_becomes_one() {
        let state = parse_list_params(&config(), &params(&[("page", "0")]));
        assert_eq!(state.page, 1);
    }
}
