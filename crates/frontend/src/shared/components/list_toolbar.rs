use crate::shared::components::filter_panel::{FilterPanel, FilterSelect, FilterTag};
use crate::shared::components::pagination_controls::{PagePosition, PaginationControls};
use crate::shared::components::sort_select::SortSelect;
use crate::shared::list_utils::SearchInput;
use crate::shared::list_view::ListView;
use contracts::domain::common::reference::label_for;
use contracts::shared::list_query::Listable;
use leptos::prelude::*;

/// Справочник подписей для измерения фильтра
pub type FilterReference = (&'static str, &'static [(&'static str, &'static str)]);

/// Поиск, фильтры и сортировка из `ListConfig`, пагинация страницы-списка
#[component]
pub fn ListToolbar<T>(
    list: ListView<T>,
    /// Подписи кодов для измерений (`("language", LANGUAGES)`)
    #[prop(optional)]
    references: Vec<FilterReference>,
    #[prop(optional, into)]
    search_placeholder: String,
) -> impl IntoView
where
    T: Listable + Clone + PartialEq + Send + Sync + 'static,
{
    let is_expanded = RwSignal::new(true);
    let dimensions = list.config.with_value(|c| c.filters.clone());
    let has_sort_keys = list.config.with_value(|c| !c.sort_keys.is_empty());
    let reference_for = move |field: &str| {
        references
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, reference)| *reference)
    };

    let active_filters_count = Signal::derive(move || {
        list.state.with(|s| s.active_filters_count())
    });

    let selects = dimensions
        .iter()
        .map(|dimension| {
            let field = dimension.field;
            view! {
                <FilterSelect
                    label=dimension.label
                    options=list.filter_options(field)
                    labels=reference_for(field)
                    value=Signal::derive(move || {
                        list.state.with(|s| s.active_filter(field).map(str::to_string))
                    })
                    on_change=Callback::new(move |v: String| list.update_state(|s| s.set_filter(field, v)))
                />
            }
        })
        .collect_view();

    // Активные фильтры в виде тегов с кнопкой сброса
    let tags_dimensions = dimensions.clone();
    let tag_references: Vec<_> = tags_dimensions
        .iter()
        .map(|d| (d.field, d.label, reference_for(d.field)))
        .collect();
    let tags = move || {
        tag_references
            .iter()
            .filter_map(|(field, label, reference)| {
                let field = *field;
                let value = list.state.with(|s| s.active_filter(field).map(str::to_string))?;
                let text = match reference {
                    Some(r) => label_for(r, &value).to_string(),
                    None => value.clone(),
                };
                Some(view! {
                    <FilterTag
                        label=format!("{} : {}", label, text)
                        on_remove=Callback::new(move |_| list.update_state(|s| s.set_filter(field, "")))
                    />
                })
            })
            .collect_view()
    };

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=active_filters_count
            pagination_controls=move || view! {
                <PaginationControls
                    position=Signal::derive(move || list.page.with(PagePosition::of))
                    on_page_change=Callback::new(move |page| list.update_state(|s| s.set_page(page)))
                />
            }
        >
            <div class="filter-panel__row">
                <SearchInput
                    value=Signal::derive(move || list.state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |v: String| list.update_state(|s| s.set_search(v)))
                    placeholder=search_placeholder
                />
                {selects}
                {has_sort_keys.then(|| view! { <SortSelect config=list.config state=list.state /> })}
                <button
                    class="button button--secondary"
                    on:click=move |_| list.update_state(|s| s.clear_filters())
                    disabled=move || active_filters_count.get() == 0
                >
                    "Réinitialiser les filtres"
                </button>
            </div>
            <div class="filter-panel__tags">{tags}</div>
        </FilterPanel>
    }
}
