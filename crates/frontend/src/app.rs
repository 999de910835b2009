use crate::layout::{Footer, Header};
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <AuthProvider>
                <Router>
                    <div class="app-layout">
                        <Header />
                        <main class="app-main">
                            <AppRoutes />
                        </main>
                        <Footer />
                    </div>
                </Router>
            </AuthProvider>
        </ConfigProvider>
    }
}
