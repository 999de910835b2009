use crate::shared::api_utils::insert_test_data;
use contracts::domain::a001_report::Report;
use contracts::domain::a002_auction::Auction;
use contracts::domain::a003_document::Document;
use contracts::domain::a004_emission::Emission;
use contracts::domain::a005_auction_result::AuctionResult;
use contracts::domain::common::AggregateRoot;
use contracts::shared::delete_flow::StatusMessage;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Заполнить все коллекции портала демонстрационными записями
#[component]
pub fn DemoDataButton(
    #[prop(into)]
    token: Signal<Option<String>>,
    /// Итог операции для статусного сообщения страницы
    on_done: Callback<StatusMessage>,
) -> impl IntoView {
    let (busy, set_busy) = signal(false);

    let run = move |_| {
        let token = token.get_untracked();
        set_busy.set(true);
        spawn_local(async move {
            let paths = [
                Report::api_path(),
                Auction::api_path(),
                Document::api_path(),
                Emission::api_path(),
                AuctionResult::api_path(),
            ];
            let mut failures = Vec::new();
            for path in &paths {
                if let Err(e) = insert_test_data(path, token.as_deref()).await {
                    log::error!("Test data for {} failed: {}", path, e);
                    failures.push(e);
                }
            }
            set_busy.set(false);
            on_done.run(if failures.is_empty() {
                StatusMessage::success("Données de démonstration chargées")
            } else {
                StatusMessage::error(format!("Échec du chargement : {}", failures.join("; ")))
            });
        });
    };

    view! {
        <button
            class="button button--secondary"
            on:click=run
            disabled=move || busy.get()
        >
            {move || if busy.get() { "Chargement..." } else { "Données de démonstration" }}
        </button>
    }
}
