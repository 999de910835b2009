use super::details::view_model::empty_dto;
use super::details::AuctionDetails;
use crate::shared::api_utils::HttpRecordSource;
use crate::shared::components::confirm_prompt::ConfirmPrompt;
use crate::shared::components::demo_data_button::DemoDataButton;
use crate::shared::components::empty_state::NoResults;
use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::components::sortable_header::{PlainHeaderCell, SortableHeaderCell};
use crate::shared::components::status_toast::StatusToast;
use crate::shared::date_utils::{format_date, format_optional_date};
use crate::shared::icons::icon;
use crate::shared::list_view::ListView;
use crate::shared::number_format::format_amount;
use crate::system::auth::context::use_access_token;
use contracts::domain::a002_auction::{Auction, AuctionDto, AUCTION_STATUSES};
use contracts::domain::common::reference::{label_for, INSTRUMENT_TYPES};
use contracts::shared::delete_flow::{DeleteFlow, StatusMessage};
use contracts::shared::record_source::RecordSource;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn status_badge_class(status: &str) -> &'static str {
    match status {
        "annoncee" => "badge badge--primary",
        "cloturee" => "badge badge--success",
        _ => "badge badge--neutral",
    }
}

/// Administration / Adjudications
#[component]
pub fn AuctionAdminList() -> impl IntoView {
    let token = use_access_token();
    let list = ListView::<Auction>::new(Auction::list_config());
    let flow = RwSignal::new(DeleteFlow::new());
    let notice = RwSignal::new(None::<StatusMessage>);
    let editing = RwSignal::new(None::<AuctionDto>);
    let no_results = list.is_empty_result();

    let source = move || HttpRecordSource::<Auction>::for_aggregate().with_token(token.get_untracked());
    let reload = move || list.load(source());
    reload();

    let request_delete = move |auction: &Auction| {
        let message = format!("Supprimer l'adjudication « {} » ?", auction.title());
        let id = auction.to_string_id();
        flow.update(|f| {
            if !f.request(id, message) {
                log::warn!("Delete already in progress");
            }
        });
    };

    let confirm_delete = move || {
        let Some(id) = flow.try_update(|f| f.begin()).flatten() else {
            return;
        };
        let source = source();
        spawn_local(async move {
            let result = source.delete_by_id(&id).await;
            let mut items = list.records.get_untracked();
            let outcome = flow.try_update(|f| f.finish(&id, result, &mut items));
            list.records.set(items);
            log::info!("Delete auction {}: {:?}", id, outcome);
        });
    };

    let status = Signal::derive(move || {
        flow.with(|f| f.status()).or_else(|| notice.get())
    });
    let dismiss = Callback::new(move |_| {
        flow.update(|f| f.dismiss_status());
        notice.set(None);
    });

    let on_saved = Callback::new(move |id: String| {
        log::info!("Auction {} saved", id);
        editing.set(None);
        notice.set(Some(StatusMessage::success("Adjudication enregistrée")));
        reload();
    });

    view! {
        <div class="page" id=format!("{}--list", Auction::full_name())>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Auction::list_name()}</h1>
                    <span class="badge badge--primary">{move || list.records.with(|r| r.len())}</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(empty_dto()))
                    >
                        {icon("plus")}
                        "Nouvelle adjudication"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| reload()
                        disabled=Signal::derive(move || list.loading.get())
                    >
                        {icon("refresh")}
                        "Actualiser"
                    </Button>
                    <DemoDataButton
                        token=token
                        on_done=Callback::new(move |message: StatusMessage| {
                            notice.set(Some(message));
                            reload();
                        })
                    />
                </div>
            </div>

            <StatusToast status=status on_dismiss=dismiss />

            <div class="page__content">
                {move || editing.get().map(|dto| view! {
                    <AuctionDetails
                        initial=dto
                        token=token
                        on_saved=on_saved
                        on_cancel=Callback::new(move |_| editing.set(None))
                    />
                })}

                <ListToolbar
                    list=list
                    references=vec![("instrument_type", INSTRUMENT_TYPES), ("status", AUCTION_STATUSES)]
                    search_placeholder="Intitulé ou détails..."
                />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

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
                                <SortableHeaderCell
                                    label="Intitulé"
                                    field="title"
                                    config=list.config
                                    state=list.state
                                />
                                <PlainHeaderCell label="Type" />
                                <PlainHeaderCell label="Maturité" />
                                <SortableHeaderCell
                                    label="Montant annoncé"
                                    field="amount_offered"
                                    config=list.config
                                    state=list.state
                                    align="right"
                                />
                                <PlainHeaderCell label="Règlement" />
                                <PlainHeaderCell label="Statut" />
                                <PlainHeaderCell label="Actions" />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.page.get().items
                                key=|item| (item.base.id, item.base.metadata.version)
                                children=move |item| {
                                    let id = item.to_string_id();
                                    let id_for_pending = id.clone();
                                    let id_for_busy = id.clone();
                                    let for_edit = AuctionDto::from(&item);
                                    let for_delete = item.clone();
                                    let is_pending = move || {
                                        flow.with(|f| f.pending().map(|p| p.id == id_for_pending).unwrap_or(false))
                                    };
                                    let is_busy = move || flow.with(|f| f.is_in_flight(&id_for_busy));
                                    let auction_date = format_date(item.auction_date);
                                    let title = item.title().to_string();
                                    let instrument_label = label_for(INSTRUMENT_TYPES, &item.instrument_type).to_string();
                                    let instrument_type = item.instrument_type.clone();
                                    let maturity = item.maturity.clone();
                                    let amount_offered = format_amount(item.amount_offered);
                                    let settlement_date = format_optional_date(item.settlement_date);
                                    let status_class = status_badge_class(&item.status);
                                    let status_label = label_for(AUCTION_STATUSES, &item.status).to_string();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{auction_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{title}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span title=instrument_label>
                                                        {instrument_type}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{maturity}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__number">{amount_offered}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{settlement_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_class>
                                                        {status_label}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Show
                                                        when=is_pending
                                                        fallback=move || {
                                                            let for_edit = for_edit.clone();
                                                            let for_delete = for_delete.clone();
                                                            view! {
                                                                <div class="table__actions">
                                                                    <button
                                                                        class="button button--ghost"
                                                                        title="Modifier"
                                                                        on:click=move |_| editing.set(Some(for_edit.clone()))
                                                                    >
                                                                        {icon("edit")}
                                                                    </button>
                                                                    <button
                                                                        class="button button--ghost button--danger"
                                                                        title="Supprimer"
                                                                        disabled=is_busy.clone()
                                                                        on:click=move |_| request_delete(&for_delete)
                                                                    >
                                                                        {icon("delete")}
                                                                    </button>
                                                                </div>
                                                            }
                                                        }
                                                    >
                                                        <ConfirmPrompt
                                                            message=flow.with_untracked(|f| f.pending().map(|p| p.message.clone()).unwrap_or_default())
                                                            on_confirm=Callback::new(move |_| confirm_delete())
                                                            on_cancel=Callback::new(move |_| flow.update(|f| f.cancel()))
                                                        />
                                                    </Show>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge_class() {
        assert_eq!(status_badge_class("cloturee"), "badge badge--success");
        assert_eq!(status_badge_class("inconnu"), "badge badge--neutral");
    }
}
