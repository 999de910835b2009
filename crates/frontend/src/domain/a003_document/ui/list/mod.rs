use crate::shared::api_utils::HttpRecordSource;
use crate::shared::components::empty_state::NoResults;
use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::date_utils::format_date_long;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::list_view::ListView;
use contracts::domain::a003_document::{Document, DOCUMENT_TYPES};
use contracts::domain::common::reference::{label_for, LANGUAGES};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

/// Titres publics / Documentation: карточки документов с поиском и фильтрами
#[component]
pub fn DocumentList() -> impl IntoView {
    let list = ListView::<Document>::new(Document::list_config());
    list.load(HttpRecordSource::<Document>::for_aggregate());

    let search = Signal::derive(move || list.state.with(|s| s.search.clone()));
    let no_results = list.is_empty_result();

    view! {
        <div class="page" id=format!("{}--list", Document::full_name())>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Document::list_name()}</h1>
                    <p class="page__subtitle">
                        "Prospectus, guides, circulaires et calendriers relatifs aux titres de l'État."
                    </p>
                </div>
            </div>

            <div class="page__content">
                <ListToolbar
                    list=list
                    references=vec![("doc_type", DOCUMENT_TYPES), ("language", LANGUAGES)]
                    search_placeholder="Titre, résumé ou mot-clé..."
                />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}
                <Show when=move || list.loading.get()>
                    <div class="page__status">"Chargement..."</div>
                </Show>
                <Show when=move || no_results.get()>
                    <NoResults on_reset=Callback::new(move |_| list.update_state(|s| {
                        s.set_search("");
                        s.clear_filters();
                    })) />
                </Show>

                <div class="card-grid">
                    <For
                        each=move || list.page.get().items
                        key=|doc| doc.base.id
                        children=move |doc| {
                            let title = doc.title().to_string();
                            let keywords = doc.keywords.clone();
                            view! {
                                <article class="doc-card">
                                    <div class="doc-card__meta">
                                        <span class="badge badge--primary">
                                            {label_for(DOCUMENT_TYPES, &doc.doc_type).to_string()}
                                        </span>
                                        <span class="doc-card__lang">
                                            {label_for(LANGUAGES, &doc.language).to_string()}
                                        </span>
                                    </div>
                                    <h3 class="doc-card__title">
                                        {move || highlight_matches(&title, &search.get())}
                                    </h3>
                                    <p class="doc-card__summary">{doc.summary.clone()}</p>
                                    <div class="doc-card__keywords">
                                        {keywords.into_iter().map(|k| view! {
                                            <span class="keyword">{k}</span>
                                        }).collect_view()}
                                    </div>
                                    <div class="doc-card__footer">
                                        <span class="doc-card__date">
                                            {format!("Publié le {}", format_date_long(doc.publication_date))}
                                        </span>
                                        {doc.file_url.clone().map(|url| view! {
                                            <a class="button button--ghost" href=url target="_blank">
                                                {icon("download")}
                                                "Télécharger"
                                            </a>
                                        })}
                                    </div>
                                </article>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
