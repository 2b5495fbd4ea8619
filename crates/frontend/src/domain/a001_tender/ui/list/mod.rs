//! Список лицитаций: поиск по номеру, órgão и objeto, фильтры статуса
//! и модальности, диапазон даты открытия, сортировка и пагинация по 9.

use contracts::domain::a001_tender::{
    default_filter_state, filters, sort_fields, Tender, TenderId,
};
use contracts::enums::TenderStatus;
use contracts::shared::format::format_brl;
use contracts::shared::options::{CodeTable, FilterOption};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

use crate::domain::a001_tender::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::keys;
use crate::shared::components::{
    DateRangeFilter, FilterPanel, PageHeader, PaginationControls, ResultGrid, SearchInput,
    SelectFilter, SortSelect,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::loading::use_loading;
use crate::shared::notifications::use_notifications;
use crate::shared::search_page::SearchPage;

const SORT_FIELDS: &[(&str, &str)] = &[
    (sort_fields::OPENING_AT, "Data de abertura"),
    (sort_fields::NUMBER, "Número"),
    (sort_fields::ESTIMATED_VALUE, "Valor estimado"),
];

fn status_badge(tender: &Tender) -> String {
    let variant = tender
        .status_kind()
        .map(|s| s.badge_variant())
        .unwrap_or("neutral");
    format!("badge badge--{}", variant)
}

#[component]
pub fn TenderList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let loading = use_loading();

    let page = SearchPage::<Tender>::new(default_filter_state());
    let is_filter_expanded = RwSignal::new(true);
    let modalities = RwSignal::new(Vec::<FilterOption>::new());
    let statuses = Signal::derive(TenderStatus::options);

    spawn_local(async move {
        match loading.track(api::modality_options()).await {
            Ok(options) => modalities.set(options),
            Err(e) => notifications.error(
                "a001_tender",
                format!("Não foi possível carregar as modalidades: {}", e),
            ),
        }
    });

    page.run_on_change("a001_tender", api::search, notifications, loading);

    let open_detail = move |id: i64| ctx.open(&keys::tender_detail(TenderId(id)));

    let pagination: ChildrenFn = Arc::new(move || {
        view! {
            <PaginationControls
                page=Signal::derive(move || page.page())
                total_pages=Signal::derive(move || page.total_pages())
                total_count=Signal::derive(move || page.total_count())
                is_loading=Signal::derive(move || page.is_loading())
                on_page_change=Callback::new(move |p: u64| page.apply(|s| s.set_page(p)))
            />
        }
        .into_any()
    });

    let filter_content: ChildrenFn = Arc::new(move || {
        view! {
            <div class="filter-grid">
                <SearchInput
                    value=Signal::derive(move || page.state.with(|s| s.search_term.clone()))
                    placeholder="Número, órgão ou objeto"
                    on_change=Callback::new(move |term: String| page.apply(|s| s.set_search_term(term)))
                />
                <SelectFilter
                    label="Status"
                    options=statuses
                    value=Signal::derive(move || page.state.with(|s| s.filter(filters::STATUS).to_string()))
                    on_change=Callback::new(move |v: String| page.apply(|s| s.set_filter(filters::STATUS, v)))
                />
                <SelectFilter
                    label="Modalidade"
                    options=modalities
                    value=Signal::derive(move || page.state.with(|s| s.filter(filters::MODALITY).to_string()))
                    on_change=Callback::new(move |v: String| page.apply(|s| s.set_filter(filters::MODALITY, v)))
                />
                <DateRangeFilter
                    label="Abertura"
                    from=Signal::derive(move || page.state.with(|s| s.date_range.from))
                    to=Signal::derive(move || page.state.with(|s| s.date_range.to))
                    on_from=Callback::new(move |d| page.apply(|s| s.set_date_from(d)))
                    on_to=Callback::new(move |d| page.apply(|s| s.set_date_to(d)))
                />
                <SortSelect
                    fields=SORT_FIELDS
                    field=Signal::derive(move || page.state.with(|s| s.sort_field.clone()))
                    order=Signal::derive(move || page.state.with(|s| s.sort_order))
                    on_change=Callback::new(move |(field, order): (String, _)| {
                        page.apply(|s| s.set_sort(&field, order))
                    })
                />
            </div>
        }
        .into_any()
    });

    view! {
        <div class="page">
            <PageHeader
                title="Licitações"
                icon_name="file-text"
                subtitle="Oportunidades publicadas pelos órgãos".to_string()
            >
                {()}
            </PageHeader>

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=Signal::derive(move || page.active_filter_count())
                on_clear=Callback::new(move |_| page.clear())
                pagination_controls=pagination
                filter_content=filter_content
            />

            <ResultGrid
                session=page.session
                empty_message="Nenhuma licitação encontrada para os filtros selecionados."
                render=move |tender: Tender| {
                    let id = tender.id;
                    let badge = status_badge(&tender);
                    let status = tender.status_label();
                    let value = tender
                        .estimated_value
                        .map(format_brl)
                        .unwrap_or_else(|| "Valor não informado".to_string());
                    view! {
                        <div class="card card--clickable" on:click=move |_| open_detail(id)>
                            <div class="card__header">
                                <span class="card__title">{tender.number}</span>
                                <span class=badge>{status}</span>
                            </div>
                            <div class="card__subtitle">{tender.agency}</div>
                            <div class="card__body">{tender.object}</div>
                            <div class="card__meta">
                                <span>{icon("file-text")}{tender.modality}</span>
                                <span>{icon("calendar")}{format_datetime(&tender.opening_at)}</span>
                            </div>
                            <div class="card__footer">{value}</div>
                        </div>
                    }
                    .into_any()
                }
            />
        </div>
    }
}
