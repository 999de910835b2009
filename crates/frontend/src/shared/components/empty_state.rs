use leptos::prelude::*;

/// Ни одна запись не прошла поиск и фильтры
#[component]
pub fn NoResults(on_reset: Callback<()>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state__title">"Aucun résultat"</p>
            <p class="empty-state__text">
                "Aucun élément ne correspond à votre recherche ou aux filtres sélectionnés."
            </p>
            <button class="button button--secondary" on:click=move |_| on_reset.run(())>
                "Réinitialiser la recherche"
            </button>
        </div>
    }
}
