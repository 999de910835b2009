use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Component that requires admin privileges.
/// Without a session redirects to the login page.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_admin())
            fallback=move || {
                if auth_state.with(|s| s.restoring) {
                    view! { <div class="page">"Vérification de la session…"</div> }.into_any()
                } else {
                    view! { <Redirect path="/admin/login" /> }.into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}
