use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::components::A;

/// Публичная навигация портала
const PUBLIC_LINKS: &[(&str, &str)] = &[
    ("/", "Accueil"),
    ("/investisseurs", "Espace investisseurs"),
    ("/titres-publics/documentation", "Documentation"),
    ("/titres-publics/emissions", "Émissions"),
    ("/titres-publics/resultats", "Résultats des adjudications"),
];

const ADMIN_LINKS: &[(&str, &str)] = &[
    ("/admin/rapports", "Rapports"),
    ("/admin/adjudications", "Adjudications"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let is_admin = move || auth_state.with(|s| s.is_admin());

    // На админ-страницах RequireAdmin сам перенаправит на вход
    let logout = move |_| do_logout(set_auth_state);

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__title">"Direction du Trésor"</A>
                <nav class="header__nav">
                    {PUBLIC_LINKS
                        .iter()
                        .map(|(href, label)| view! { <A href=*href attr:class="header__link">{*label}</A> })
                        .collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <Show
                    when=is_admin
                    fallback=|| view! { <A href="/admin/login" attr:class="button button--ghost">"Connexion"</A> }
                >
                    <nav class="header__nav header__nav--admin">
                        {ADMIN_LINKS
                            .iter()
                            .map(|(href, label)| view! { <A href=*href attr:class="header__link">{*label}</A> })
                            .collect_view()}
                    </nav>
                    <span class="header__user">
                        {move || auth_state.with(|s| s.user_info.as_ref().map(|u| u.username.clone()).unwrap_or_default())}
                    </span>
                    <button class="button button--ghost" on:click=logout>"Déconnexion"</button>
                </Show>
            </div>
        </header>
    }
}
