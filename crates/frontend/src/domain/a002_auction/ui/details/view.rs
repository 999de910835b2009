use super::view_model::AuctionDetailsViewModel;
use crate::shared::date_utils::{parse_date_input, to_date_input};
use contracts::domain::a002_auction::{AuctionDto, AUCTION_STATUSES};
use contracts::domain::common::reference::INSTRUMENT_TYPES;
use leptos::prelude::*;

/// Форма создания/редактирования аукциона
#[component]
pub fn AuctionDetails(
    initial: AuctionDto,
    #[prop(into)]
    token: Signal<Option<String>>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AuctionDetailsViewModel::new(initial);
    let form = vm.form;

    let instrument_options = INSTRUMENT_TYPES
        .iter()
        .map(|(code, label)| {
            let code = *code;
            view! {
                <option value=code selected=move || form.with(|f| f.instrument_type == code)>
                    {format!("{} ({})", code, label)}
                </option>
            }
        })
        .collect_view();
    let status_options = AUCTION_STATUSES
        .iter()
        .map(|(code, label)| {
            let code = *code;
            view! {
                <option value=code selected=move || form.with(|f| f.status == code)>{*label}</option>
            }
        })
        .collect_view();

    view! {
        <div class="details-container auction-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Modifier l'adjudication" } else { "Nouvelle adjudication" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="auction-title">"Intitulé"</label>
                    <input
                        type="text"
                        id="auction-title"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="auction-code">"Référence"</label>
                        <input
                            type="text"
                            id="auction-code"
                            placeholder="Générée automatiquement si vide"
                            prop:value=move || form.with(|f| f.code.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.code = if value.trim().is_empty() { None } else { Some(value) });
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="auction-instrument">"Type de titre"</label>
                        <select
                            id="auction-instrument"
                            on:change=move |ev| form.update(|f| f.instrument_type = event_target_value(&ev))
                        >
                            {instrument_options}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="auction-status">"Statut"</label>
                        <select
                            id="auction-status"
                            on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                        >
                            {status_options}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="auction-date">"Date d'adjudication"</label>
                        <input
                            type="date"
                            id="auction-date"
                            prop:value=move || form.with(|f| to_date_input(f.auction_date))
                            on:change=move |ev| {
                                if let Some(date) = parse_date_input(&event_target_value(&ev)) {
                                    form.update(|f| f.auction_date = date);
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="auction-settlement">"Date de règlement"</label>
                        <input
                            type="date"
                            id="auction-settlement"
                            prop:value=move || form.with(|f| f.settlement_date.map(to_date_input).unwrap_or_default())
                            on:change=move |ev| {
                                let date = parse_date_input(&event_target_value(&ev));
                                form.update(|f| f.settlement_date = date);
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="auction-maturity">"Maturité"</label>
                        <input
                            type="text"
                            id="auction-maturity"
                            placeholder="52 semaines, 7 ans..."
                            prop:value=move || form.with(|f| f.maturity.clone())
                            on:input=move |ev| form.update(|f| f.maturity = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="auction-amount">"Montant annoncé (MDT)"</label>
                        <input
                            type="text"
                            id="auction-amount"
                            inputmode="decimal"
                            prop:value=move || vm.amount_text.get()
                            on:input=move |ev| vm.amount_text.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="auction-details">"Détails"</label>
                    <textarea
                        id="auction-details"
                        rows="3"
                        prop:value=move || form.with(|f| f.details.clone())
                        on:input=move |ev| form.update(|f| f.details = event_target_value(&ev))
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
