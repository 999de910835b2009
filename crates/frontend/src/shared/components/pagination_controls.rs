use crate::shared::icons::icon;
use leptos::prelude::*;

/// Положение страницы в результате (из `ListPage`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PagePosition {
    /// Текущая страница (с 1)
    pub page: usize,
    pub total_pages: usize,
    /// Номера первой и последней записи страницы (с 1), 0 для пустого результата
    pub first: usize,
    pub last: usize,
    /// Количество записей, прошедших поиск и фильтры
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PagePosition {
    pub fn of<T>(page: &contracts::shared::list_query::ListPage<T>) -> Self {
        Self {
            page: page.page,
            total_pages: page.total_pages,
            first: page.first_position(),
            last: page.last_position(),
            total: page.total_matching,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        }
    }
}

/// "1–10 sur 25 · page 1 / 3"
pub fn pagination_label(position: &PagePosition) -> String {
    let range = if position.total == 0 {
        "0 résultat".to_string()
    } else {
        format!("{}–{} sur {}", position.first, position.last, position.total)
    };
    format!(
        "{} · page {} / {}",
        range,
        position.page,
        position.total_pages.max(1)
    )
}

/// PaginationControls component - навигация по страницам списка
///
/// Страницы нумеруются с 1; размер страницы задаётся конфигурацией списка.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    position: Signal<PagePosition>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || !position.with(|p| p.has_previous);
    let is_last = move || !position.with(|p| p.has_next);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=is_first
                title="Première page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = position.get();
                    if p.has_previous {
                        on_page_change.run(p.page - 1);
                    }
                }
                disabled=is_first
                title="Page précédente"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || position.with(pagination_label)}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = position.get();
                    if p.has_next {
                        on_page_change.run(p.page + 1);
                    }
                }
                disabled=is_last
                title="Page suivante"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(position.with(|p| p.total_pages.max(1)))
                disabled=is_last
                title="Dernière page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::ListPage;

    fn page(items: usize, page: usize, total_pages: usize, total: usize) -> ListPage<u32> {
        ListPage {
            items: vec![0; items],
            total_matching: total,
            total_pages,
            page,
            page_size: 10,
        }
    }

    #[test]
    fn test_label_for_last_partial_page() {
        let position = PagePosition::of(&page(5, 3, 3, 25));
        assert_eq!(pagination_label(&position), "21–25 sur 25 · page 3 / 3");
        assert!(position.has_previous);
        assert!(!position.has_next);
    }

    #[test]
    fn test_label_for_empty_result() {
        let position = PagePosition::of(&page(0, 1, 1, 0));
        assert_eq!(pagination_label(&position), "0 résultat · page 1 / 1");
        assert!(!position.has_previous);
        assert!(!position.has_next);
    }
}
