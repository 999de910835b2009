use crate::shared::api_utils::HttpRecordSource;
use crate::shared::components::empty_state::NoResults;
use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::components::sortable_header::{PlainHeaderCell, SortableHeaderCell};
use crate::shared::date_utils::format_date;
use crate::shared::list_view::ListView;
use crate::shared::number_format::{format_amount, format_rate};
use contracts::domain::a004_emission::Emission;
use contracts::domain::common::reference::{label_for, INSTRUMENT_TYPES};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

/// Titres publics / Émissions: encours des titres émis par le Trésor
#[component]
pub fn EmissionList() -> impl IntoView {
    let list = ListView::<Emission>::new(Emission::list_config());
    list.load(HttpRecordSource::<Emission>::for_aggregate());
    let no_results = list.is_empty_result();

    view! {
        <div class="page" id=format!("{}--list", Emission::full_name())>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Emission::list_name()}</h1>
                    <p class="page__subtitle">"Titres de l'État en circulation (montants en millions de dinars)."</p>
                </div>
            </div>

            <div class="page__content">
                <ListToolbar
                    list=list
                    references=vec![("instrument_type", INSTRUMENT_TYPES)]
                    search_placeholder="Référence ou libellé..."
                />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}
                <Show when=move || list.loading.get()>
                    <div class="page__status">"Chargement..."</div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <PlainHeaderCell label="Référence" />
                                <PlainHeaderCell label="Titre" />
                                <SortableHeaderCell
                                    label="Date d'émission"
                                    field="issue_date"
                                    config=list.config
                                    state=list.state
                                />
                                <PlainHeaderCell label="Échéance" />
                                <PlainHeaderCell label="Durée" />
                                <SortableHeaderCell
                                    label="Encours"
                                    field="amount"
                                    config=list.config
                                    state=list.state
                                    align="right"
                                />
                                <SortableHeaderCell
                                    label="Taux"
                                    field="rate"
                                    config=list.config
                                    state=list.state
                                    align="right"
                                />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.page.get().items
                                key=|item| item.base.id
                                children=move |item| {
                                    let tenor = item.tenor_years();
                                    let code = item.base.code.clone();
                                    let instrument_label = label_for(INSTRUMENT_TYPES, &item.instrument_type).to_string();
                                    let title = item.title().to_string();
                                    let issue_date = format_date(item.issue_date);
                                    let maturity_date = format_date(item.maturity_date);
                                    let amount = format_amount(item.amount);
                                    let rate = format_rate(item.rate);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{code}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span title=instrument_label>
                                                        {title}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{issue_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{maturity_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {match tenor {
                                                        0 => "< 1 an".to_string(),
                                                        1 => "1 an".to_string(),
                                                        n => format!("{} ans", n),
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__number">{amount}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__number">{rate}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || no_results.get()>
                    <NoResults on_reset=Callback::new(move |_| list.update_state(|s| {
                        s.set_search("");
                        s.clear_filters();
                    })) />
                </Show>
            </div>
        </div>
    }
}
