use super::view_model::ReportDetailsViewModel;
use crate::shared::date_utils::{parse_date_input, to_date_input};
use contracts::domain::a001_report::{ReportDto, REPORT_CATEGORIES};
use contracts::domain::common::reference::LANGUAGES;
use leptos::prelude::*;

fn options_view(
    reference: &'static [(&'static str, &'static str)],
    selected: Signal<String>,
) -> impl IntoView {
    reference
        .iter()
        .map(|(code, label)| {
            let code = *code;
            view! {
                <option value=code selected=move || selected.get() == code>{*label}</option>
            }
        })
        .collect_view()
}

/// Форма создания/редактирования отчёта
#[component]
pub fn ReportDetails(
    initial: ReportDto,
    #[prop(into)]
    token: Signal<Option<String>>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ReportDetailsViewModel::new(initial);
    let form = vm.form;

    view! {
        <div class="details-container report-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Modifier le rapport" } else { "Nouveau rapport" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="report-title">"Titre"</label>
                    <input
                        type="text"
                        id="report-title"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="report-code">"Référence"</label>
                    <input
                        type="text"
                        id="report-code"
                        placeholder="Générée automatiquement si vide"
                        prop:value=move || form.with(|f| f.code.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.code = if value.trim().is_empty() { None } else { Some(value) });
                        }
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="report-category">"Catégorie"</label>
                        <select
                            id="report-category"
                            on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                        >
                            {options_view(REPORT_CATEGORIES, Signal::derive(move || form.with(|f| f.category.clone())))}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="report-language">"Langue"</label>
                        <select
                            id="report-language"
                            on:change=move |ev| form.update(|f| f.language = event_target_value(&ev))
                        >
                            {options_view(LANGUAGES, Signal::derive(move || form.with(|f| f.language.clone())))}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="report-date">"Date de publication"</label>
                        <input
                            type="date"
                            id="report-date"
                            prop:value=move || form.with(|f| to_date_input(f.publication_date))
                            on:change=move |ev| {
                                if let Some(date) = parse_date_input(&event_target_value(&ev)) {
                                    form.update(|f| f.publication_date = date);
                                }
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="report-summary">"Résumé"</label>
                    <textarea
                        id="report-summary"
                        rows="4"
                        prop:value=move || form.with(|f| f.summary.clone())
                        on:input=move |ev| form.update(|f| f.summary = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="report-keywords">"Mots-clés"</label>
                    <input
                        type="text"
                        id="report-keywords"
                        placeholder="dette, BTA, bilan"
                        prop:value=move || vm.keywords_text.get()
                        on:input=move |ev| vm.keywords_text.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="report-file">"Lien du fichier"</label>
                    <input
                        type="text"
                        id="report-file"
                        placeholder="/files/rapport.pdf"
                        prop:value=move || form.with(|f| f.file_url.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.file_url = if value.trim().is_empty() { None } else { Some(value) });
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="report-comment">"Commentaire interne"</label>
                    <textarea
                        id="report-comment"
                        rows="2"
                        prop:value=move || form.with(|f| f.comment.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.comment = if value.is_empty() { None } else { Some(value) });
                        }
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(token.get_untracked(), on_saved)
                    disabled=move || vm.saving.get()
                >
                    {move || match (vm.saving.get(), vm.is_edit_mode()) {
                        (true, _) => "Enregistrement...",
                        (false, true) => "Enregistrer",
                        (false, false) => "Créer",
                    }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Annuler"
                </button>
            </div>
        </div>
    }
}
