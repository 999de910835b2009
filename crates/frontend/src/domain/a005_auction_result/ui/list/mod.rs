use crate::shared::api_utils::HttpRecordSource;
use crate::shared::components::empty_state::NoResults;
use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::components::sortable_header::{PlainHeaderCell, SortableHeaderCell};
use crate::shared::date_utils::format_date;
use crate::shared::list_view::ListView;
use crate::shared::number_format::{format_amount, format_number_with_decimals, format_rate};
use contracts::domain::a005_auction_result::AuctionResult;
use contracts::domain::common::reference::INSTRUMENT_TYPES;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AuctionResultList() -> impl IntoView {
    let list = ListView::<AuctionResult>::new(AuctionResult::list_config());
    list.load(HttpRecordSource::<AuctionResult>::for_aggregate());
    let no_results = list.is_empty_result();

    view! {
        <div class="page" id=format!("{}--list", AuctionResult::full_name())>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{AuctionResult::list_name()}</h1>
                    <p class="page__subtitle">"Montants en millions de dinars, taux en pourcentage."</p>
                </div>
            </div>

            <div class="page__content">
                <ListToolbar
                    list=list
                    references=vec![("instrument_type", INSTRUMENT_TYPES)]
                    search_placeholder="Titre ou commentaire..."
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
                                <SortableHeaderCell
                                    label="Date"
                                    field="auction_date"
                                    config=list.config
                                    state=list.state
                                />
                                <PlainHeaderCell label="Titre" />
                                <PlainHeaderCell label="Demandé" />
                                <SortableHeaderCell
                                    label="Retenu"
                                    field="amount_allotted"
                                    config=list.config
                                    state=list.state
                                    align="right"
                                />
                                <PlainHeaderCell label="Couverture" />
                                <SortableHeaderCell
                                    label="TMP"
                                    field="weighted_avg_rate"
                                    config=list.config
                                    state=list.state
                                    align="right"
                                />
                                <PlainHeaderCell label="Taux min / max" />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.page.get().items
                                key=|item| item.base.id
                                children=move |item| {
                                    let cover = item
                                        .cover_ratio()
                                        .map(|r| format!("{}x", format_number_with_decimals(r, 2)))
                                        .unwrap_or_else(|| "—".to_string());
                                    let auction_date = format_date(item.auction_date);
                                    let details = item.details.clone();
                                    let title = item.title().to_string();
                                    let amount_requested = format_amount(item.amount_requested);
                                    let amount_allotted = format_amount(item.amount_allotted);
                                    let weighted_avg_rate = format_rate(item.weighted_avg_rate);
                                    let min_max_rate = format!("{} / {}", format_rate(item.min_rate), format_rate(item.max_rate));
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{auction_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span title=details>{title}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__number">{amount_requested}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__number">{amount_allotted}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{cover}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__number">{weighted_avg_rate}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {min_max_rate}
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
