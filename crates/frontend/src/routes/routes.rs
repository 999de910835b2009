use crate::domain::a001_report::ui::list::ReportAdminList;
use crate::domain::a002_auction::ui::list::AuctionAdminList;
use crate::domain::a003_document::ui::list::DocumentList;
use crate::domain::a004_emission::ui::list::EmissionList;
use crate::domain::a005_auction_result::ui::list::AuctionResultList;
use crate::pages::home::HomePage;
use crate::pages::investors::InvestorsPage;
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Page introuvable"</h1>
            <a href="/">"Retour à l'accueil"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/investisseurs") view=InvestorsPage />
            <Route path=path!("/titres-publics/documentation") view=DocumentList />
            <Route path=path!("/titres-publics/emissions") view=EmissionList />
            <Route path=path!("/titres-publics/resultats") view=AuctionResultList />
            <Route path=path!("/admin/login") view=LoginPage />
            <Route
                path=path!("/admin/rapports")
                view=|| view! { <RequireAdmin><ReportAdminList /></RequireAdmin> }
            />
            <Route
                path=path!("/admin/adjudications")
                view=|| view! { <RequireAdmin><AuctionAdminList /></RequireAdmin> }
            />
        </Routes>
    }
}
