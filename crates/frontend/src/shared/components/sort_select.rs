//! Выбор сортировки из ключей `ListConfig` (для страниц без заголовков таблицы)

use contracts::shared::list_query::{ComparatorKind, ListConfig, ListViewState, SortDirection};
use leptos::prelude::*;

/// Опция выпадающего списка: значение `"<field>:<asc|desc>"` и подпись
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortOption {
    pub value: String,
    pub label: String,
}

fn direction_label(comparator: ComparatorKind, direction: SortDirection) -> &'static str {
    match (comparator, direction) {
        (ComparatorKind::Date, SortDirection::Desc) => "plus récent d'abord",
        (ComparatorKind::Date, SortDirection::Asc) => "plus ancien d'abord",
        (ComparatorKind::Text, SortDirection::Asc) => "A → Z",
        (ComparatorKind::Text, SortDirection::Desc) => "Z → A",
        (ComparatorKind::Number, SortDirection::Asc) => "croissant",
        (ComparatorKind::Number, SortDirection::Desc) => "décroissant",
    }
}

pub fn sort_option_value(field: &str, direction: SortDirection) -> String {
    format!("{}:{}", field, direction.as_str())
}

/// Две опции на ключ; даты начинают с убывания, как при клике по заголовку
pub fn sort_options(config: &ListConfig) -> Vec<SortOption> {
    config
        .sort_keys
        .iter()
        .flat_map(|key| {
            let directions = match key.comparator {
                ComparatorKind::Date => [SortDirection::Desc, SortDirection::Asc],
                ComparatorKind::Text | ComparatorKind::Number => {
                    [SortDirection::Asc, SortDirection::Desc]
                }
            };
            directions.into_iter().map(move |direction| SortOption {
                value: sort_option_value(key.field, direction),
                label: format!("{} ({})", key.label, direction_label(key.comparator, direction)),
            })
        })
        .collect()
}

/// Разбор значения опции; ключ должен быть объявлен в конфигурации
pub fn parse_sort_option(config: &ListConfig, value: &str) -> Option<(&'static str, SortDirection)> {
    let (field, direction) = value.rsplit_once(':')?;
    let key = config.sort_key(field)?;
    Some((key.field, SortDirection::parse(direction)?))
}

#[component]
pub fn SortSelect(
    config: StoredValue<ListConfig>,
    state: RwSignal<ListViewState>,
) -> impl IntoView {
    let options = config.with_value(sort_options);
    let current = move || state.with(|s| sort_option_value(&s.sort_field, s.sort_direction));

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match config.with_value(|c| parse_sort_option(c, &value)) {
            Some((field, direction)) => state.update(|s| s.set_sort(field, direction)),
            None => log::warn!("Unknown sort option: {}", value),
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label">"Trier par"</label>
            <select class="form__select" on:change=on_change prop:value=current>
                {options
                    .into_iter()
                    .map(|option| {
                        let value = option.value.clone();
                        view! {
                            <option value=option.value selected=move || current() == value>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ListConfig {
        ListConfig::new(12)
            .sort("publication_date", "Date", ComparatorKind::Date)
            .sort("title", "Titre", ComparatorKind::Text)
    }

    #[test]
    fn test_two_options_per_sort_key() {
        let options = sort_options(&config());
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "publication_date:desc",
                "publication_date:asc",
                "title:asc",
                "title:desc"
            ]
        );
        assert_eq!(options[0].label, "Date (plus récent d'abord)");
        assert_eq!(options[2].label, "Titre (A → Z)");
    }

    #[test]
    fn test_selecting_option_sets_sort_and_resets_page() {
        let config = config();
        let mut state = config.initial_state();
        state.set_page(4);

        let (field, direction) = parse_sort_option(&config, "title:desc").unwrap();
        state.set_sort(field, direction);

        assert_eq!(state.sort_field, "title");
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert_eq!(state.page, 1);
        assert_eq!(sort_option_value(&state.sort_field, state.sort_direction), "title:desc");
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let config = config();
        assert!(parse_sort_option(&config, "amount:asc").is_none());
        assert!(parse_sort_option(&config, "title:sideways").is_none());
        assert!(parse_sort_option(&config, "title").is_none());
    }
}
