//! Заголовок колонки с сортировкой по ключу из `ListConfig`

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list_query::{ListConfig, ListViewState};
use leptos::prelude::*;
use thaw::*;

/// Переключить сортировку по ключу; тип сравнения берётся из конфигурации.
/// Ключ, не объявленный в конфигурации, состояние не меняет.
pub fn toggle_configured_sort(config: &ListConfig, state: &mut ListViewState, field: &str) -> bool {
    match config.sort_key(field) {
        Some(key) => {
            state.toggle_sort(key.field, key.comparator);
            true
        }
        None => false,
    }
}

/// Клик переключает сортировку через `ListViewState::toggle_sort`.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Ключ сортировки
    field: &'static str,

    /// Конфигурация и состояние списка (`ListView::config`, `ListView::state`)
    config: StoredValue<ListConfig>,
    state: RwSignal<ListViewState>,

    /// Выравнивание заголовка (left/right)
    #[prop(default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| {
                    let toggled = state
                        .try_update(|s| config.with_value(|c| toggle_configured_sort(c, s, field)))
                        .unwrap_or(false);
                    if !toggled {
                        log::warn!("Column {} is not a sort key of this list", field);
                    }
                }
            >
                {label}
                <span class=move || state.with(|s| get_sort_class(s, field))>
                    {move || state.with(|s| get_sort_indicator(s, field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}

/// Обычный заголовок без сортировки
#[component]
pub fn PlainHeaderCell(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <TableHeaderCell>
            <div class="table__header-text">{label}</div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::{ComparatorKind, SortDirection};

    fn config() -> ListConfig {
        ListConfig::new(10)
            .sort("auction_date", "Date", ComparatorKind::Date)
            .sort("amount_offered", "Montant", ComparatorKind::Number)
    }

    #[test]
    fn test_comparator_comes_from_config() {
        let config = config();
        let mut state = config.initial_state();

        assert!(toggle_configured_sort(&config, &mut state, "amount_offered"));
        assert_eq!(state.sort_field, "amount_offered");
        assert_eq!(state.sort_direction, SortDirection::Asc);

        // Дата: новый ключ начинается с убывания
        assert!(toggle_configured_sort(&config, &mut state, "auction_date"));
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert!(toggle_configured_sort(&config, &mut state, "auction_date"));
        assert_eq!(state.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_unknown_column_leaves_state_unchanged() {
        let config = config();
        let mut state = config.initial_state();
        state.set_page(2);
        let before = state.clone();
        assert!(!toggle_configured_sort(&config, &mut state, "title"));
        assert_eq!(state, before);
    }
}
