/// Утилиты для страниц-списков: поиск с debounce, подсветка, индикатор сортировки
use contracts::shared::list_query::{ListViewState, SortDirection};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::ops::Range;

/// Задержка перед применением поискового запроса, мс
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Байтовые диапазоны `text`, совпавшие с `filter` без учёта регистра.
///
/// Строчная форма символа может иметь другую длину в байтах (`ẞ` -> `ß`,
/// `İ` -> `i̇`), поэтому позиции переводятся в исходный текст по границам
/// символов. Совпадение, начинающееся или кончающееся внутри строчной формы
/// одного символа, пропускается.
pub fn match_ranges(text: &str, filter: &str) -> Vec<Range<usize>> {
    let needle = filter.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    // (смещение в строчной форме, смещение в исходном тексте) для каждой границы символа
    let mut lower = String::with_capacity(text.len());
    let mut bounds: Vec<(usize, usize)> = Vec::with_capacity(text.len() + 1);
    for (offset, ch) in text.char_indices() {
        bounds.push((lower.len(), offset));
        lower.extend(ch.to_lowercase());
    }
    bounds.push((lower.len(), text.len()));

    let to_original = |pos: usize| {
        bounds
            .binary_search_by_key(&pos, |(lower_pos, _)| *lower_pos)
            .ok()
            .map(|idx| bounds[idx].1)
    };

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = lower[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        match (to_original(start), to_original(end)) {
            (Some(s), Some(e)) => {
                ranges.push(s..e);
                from = end;
            }
            _ => {
                from = start + lower[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for range in ranges {
        if range.start > last_pos {
            parts.push(view! { <span>{text[last_pos..range.start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[range.clone()].to_string()}</mark> }
                .into_any(),
        );
        last_pos = range.end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение поиска из состояния списка
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Rechercher...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Новый таймер заменяет старый, drop отменяет ожидающий вызов
    let pending = StoredValue::new_local(None::<Timeout>);

    // Внешний сброс (кнопка "Réinitialiser") должен очистить и поле
    Effect::new(move |_| {
        let external = value.get();
        if external != input_value.get_untracked() {
            pending.set_value(None);
            set_input_value.set(external);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=clear_filter
                    title="Effacer"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(state: &ListViewState, field: &str) -> &'static str {
    if state.sort_field == field {
        match state.sort_direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}

/// CSS класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(state: &ListViewState, field: &str) -> &'static str {
    if state.sort_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let mut state = ListViewState::new("title", SortDirection::Asc);
        assert_eq!(get_sort_indicator(&state, "title"), " ▲");
        assert_eq!(get_sort_indicator(&state, "date"), " ⇅");
        state.sort_direction = SortDirection::Desc;
        assert_eq!(get_sort_indicator(&state, "title"), " ▼");
        assert!(get_sort_class(&state, "title").ends_with("--active"));
        assert_eq!(get_sort_class(&state, "date"), "table__sort-indicator");
    }

    #[test]
    fn test_match_ranges_ignore_case() {
        assert_eq!(match_ranges("Prospectus BT 12 mois", "bt"), vec![11..13]);
        assert_eq!(match_ranges("Bon du Trésor, BON", "bon"), vec![0..3, 16..19]);
        assert_eq!(match_ranges("Émission", "émi"), vec![0..4]);
        assert!(match_ranges("Rapport", "").is_empty());
        assert!(match_ranges("Rapport", "bt").is_empty());
    }

    #[test]
    fn test_match_ranges_when_lowercase_changes_byte_length() {
        // ẞ (3 байта) -> ß (2 байта), İ (2 байта) -> i + U+0307 (3 байта)
        let text = "ẞİ";
        assert!(match_ranges(text, "i").is_empty());
        assert_eq!(match_ranges(text, "ß"), vec![0..3]);
        assert_eq!(match_ranges(text, "ßi\u{307}"), vec![0..5]);
        assert_eq!(match_ranges("xẞİx", "x"), vec![0..1, 6..7]);
    }
}
