use super::details::view_model::empty_dto;
use super::details::ReportDetails;
use crate::shared::api_utils::HttpRecordSource;
use crate::shared::components::confirm_prompt::ConfirmPrompt;
use crate::shared::components::demo_data_button::DemoDataButton;
use crate::shared::components::empty_state::NoResults;
use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::components::sortable_header::{PlainHeaderCell, SortableHeaderCell};
use crate::shared::components::status_toast::StatusToast;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_view::ListView;
use crate::system::auth::context::use_access_token;
use contracts::domain::a001_report::{Report, ReportDto, REPORT_CATEGORIES};
use contracts::domain::common::reference::{label_for, LANGUAGES};
use contracts::shared::delete_flow::{DeleteFlow, StatusMessage};
use contracts::shared::record_source::RecordSource;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Administration / Rapports
#[component]
pub fn ReportAdminList() -> impl IntoView {
    let token = use_access_token();
    let list = ListView::<Report>::new(Report::list_config());
    let flow = RwSignal::new(DeleteFlow::new());
    // Сообщение о сохранении формы / загрузке демо-данных
    let notice = RwSignal::new(None::<StatusMessage>);
    // Открытая форма: None, если закрыта
    let editing = RwSignal::new(None::<ReportDto>);
    let no_results = list.is_empty_result();

    let source = move || HttpRecordSource::<Report>::for_aggregate().with_token(token.get_untracked());
    let reload = move || list.load(source());
    reload();

    let request_delete = move |report: &Report| {
        let message = format!("Supprimer le rapport « {} » ?", report.title());
        let id = report.to_string_id();
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
            log::info!("Delete report {}: {:?}", id, outcome);
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
        log::info!("Report {} saved", id);
        editing.set(None);
        notice.set(Some(StatusMessage::success("Rapport enregistré")));
        reload();
    });

    view! {
        <div class="page" id=format!("{}--list", Report::full_name())>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Report::list_name()}</h1>
                    <span class="badge badge--primary">{move || list.records.with(|r| r.len())}</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(empty_dto()))
                    >
                        {icon("plus")}
                        "Nouveau rapport"
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
                    <ReportDetails
                        initial=dto
                        token=token
                        on_saved=on_saved
                        on_cancel=Callback::new(move |_| editing.set(None))
                    />
                })}

                <ListToolbar
                    list=list
                    references=vec![("category", REPORT_CATEGORIES), ("language", LANGUAGES)]
                    search_placeholder="Titre ou résumé..."
                />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label="Titre"
                                    field="title"
                                    config=list.config
                                    state=list.state
                                />
                                <PlainHeaderCell label="Catégorie" />
                                <PlainHeaderCell label="Langue" />
                                <SortableHeaderCell
                                    label="Date de publication"
                                    field="publication_date"
                                    config=list.config
                                    state=list.state
                                />
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
                                    let for_edit = ReportDto::from(&item);
                                    let for_delete = item.clone();
                                    let is_pending = move || {
                                        flow.with(|f| f.pending().map(|p| p.id == id_for_pending).unwrap_or(false))
                                    };
                                    let is_busy = move || flow.with(|f| f.is_in_flight(&id_for_busy));
                                    let title = item.title().to_string();
                                    let category = label_for(REPORT_CATEGORIES, &item.category).to_string();
                                    let language = label_for(LANGUAGES, &item.language).to_string();
                                    let publication_date = format_date(item.publication_date);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{title}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{category}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{language}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{publication_date}</TableCellLayout>
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
