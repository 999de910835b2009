use crate::shared::icons::icon;
use contracts::domain::common::reference::label_for;
use contracts::shared::list_query::FILTER_ALL;
use leptos::prelude::*;

/// FilterPanel component - сворачиваемая панель фильтров с пагинацией в заголовке
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Pagination controls (header slot)
    #[prop(into)]
    pagination_controls: ViewFn,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtres"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Выпадающий список одного измерения фильтра; первая опция "Tous"
#[component]
pub fn FilterSelect(
    #[prop(into)]
    label: String,

    /// Значения измерения (distinct по загруженным записям)
    #[prop(into)]
    options: Signal<Vec<String>>,

    /// Подписи кодов; без справочника показывается само значение
    #[prop(default = None)]
    labels: Option<&'static [(&'static str, &'static str)]>,

    /// Активное значение; `None` без ограничения
    #[prop(into)]
    value: Signal<Option<String>>,

    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get().unwrap_or_else(|| FILTER_ALL.to_string())
            >
                <option value=FILTER_ALL selected=move || value.get().is_none()>"Tous"</option>
                <For
                    each=move || options.get()
                    key=|v| v.clone()
                    children=move |v| {
                        let text = match labels {
                            Some(reference) => label_for(reference, &v).to_string(),
                            None => v.clone(),
                        };
                        let v_for_selected = v.clone();
                        let is_selected = move || value.get().as_deref() == Some(v_for_selected.as_str());
                        view! {
                            <option value=v selected=is_selected>{text}</option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// FilterTag component - активный фильтр с кнопкой сброса
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
