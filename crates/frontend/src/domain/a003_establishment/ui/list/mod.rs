//! Справочник компаний (estabelecimentos).
//!
//! Поиск по названию и CNPJ, фильтры setor / município / UF / porte / situação,
//! диапазон даты начала деятельности. Справочники фильтров грузятся
//! параллельно, ошибка любого из них не мешает остальным.

use contracts::domain::a003_establishment::{
    default_filter_state, filters, sort_fields, EstablishmentRow,
};
use contracts::enums::{RegistrationStatus, SizeBand};
use contracts::shared::options::{CodeTable, FilterOption};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::Arc;

use crate::domain::a003_establishment::api;
use crate::shared::components::{
    DateRangeFilter, FilterPanel, PageHeader, PaginationControls, ResultGrid, SearchInput,
    SelectFilter, SortSelect,
};
use crate::shared::icons::icon;
use crate::shared::loading::{use_loading, LoadingStore};
use crate::shared::notifications::{use_notifications, NotificationStore};
use crate::shared::search_page::SearchPage;

const SORT_FIELDS: &[(&str, &str)] = &[
    (sort_fields::TRADE_NAME, "Nome fantasia"),
    (sort_fields::LEGAL_NAME, "Razão social"),
    (sort_fields::ACTIVITY_START, "Início de atividade"),
    (sort_fields::SECTOR_NAME, "Setor"),
];

/// Загрузить справочник фильтра в сигнал; ошибка превращается в уведомление
fn load_options<Fut>(
    what: &'static str,
    request: Fut,
    target: RwSignal<Vec<FilterOption>>,
    notifications: NotificationStore,
    loading: LoadingStore,
) where
    Fut: Future<Output = Result<Vec<FilterOption>, String>> + 'static,
{
    spawn_local(async move {
        match loading.track(request).await {
            Ok(options) => target.set(options),
            Err(e) => notifications.error(
                "a003_establishment",
                format!("Não foi possível carregar {}: {}", what, e),
            ),
        }
    });
}

fn establishment_card(row: EstablishmentRow) -> AnyView {
    let name = row.display_name();
    let cnpj = row.formatted_cnpj();
    let status = row.status_label().map(|label| {
        let variant = row
            .status_kind()
            .map(|s| s.badge_variant())
            .unwrap_or("neutral");
        (format!("badge badge--{}", variant), label)
    });
    let legal_name = row
        .legal_name
        .clone()
        .filter(|l| !l.trim().is_empty() && *l != name);
    let location = row.location_label();
    let size_band = row.size_band_label();
    let activity_start = row.activity_start_label();

    view! {
        <div class="card">
            <div class="card__header">
                <span class="card__title">{name}</span>
                {status.map(|(class, label)| view! { <span class=class>{label}</span> })}
            </div>
            {legal_name.map(|l| view! { <div class="card__subtitle">{l}</div> })}
            <div class="card__cnpj">{cnpj}</div>
            {row.sector_name.map(|s| view! { <div class="card__body">{icon("building")}{s}</div> })}
            <div class="card__meta">
                {location.map(|l| view! { <span>{icon("map-pin")}{l}</span> })}
                {size_band.map(|p| view! { <span>{p}</span> })}
                {activity_start.map(|d| view! { <span>{icon("calendar")}{d}</span> })}
            </div>
            <div class="card__contacts">
                {row.email.map(|e| view! { <span>{icon("mail")}{e}</span> })}
                {row.phone.map(|p| view! { <span>{icon("phone")}{p}</span> })}
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn EstablishmentDirectory() -> impl IntoView {
    let notifications = use_notifications();
    let loading = use_loading();

    let page = SearchPage::<EstablishmentRow>::new(default_filter_state());
    let is_filter_expanded = RwSignal::new(true);

    let sectors = RwSignal::new(Vec::<FilterOption>::new());
    let regions = RwSignal::new(Vec::<FilterOption>::new());
    let states = RwSignal::new(Vec::<FilterOption>::new());
    let size_bands = Signal::derive(SizeBand::options);
    let statuses = Signal::derive(RegistrationStatus::options);

    load_options("os setores", api::sector_options(), sectors, notifications, loading);
    load_options("os municípios", api::region_options(), regions, notifications, loading);
    load_options("as UFs", api::state_options(), states, notifications, loading);

    page.run_on_change("a003_establishment", api::search, notifications, loading);

    let select = move |label: &'static str,
                       name: &'static str,
                       options: Signal<Vec<FilterOption>>| {
        view! {
            <SelectFilter
                label=label
                options=options
                value=Signal::derive(move || page.state.with(|s| s.filter(name).to_string()))
                on_change=Callback::new(move |v: String| page.apply(|s| s.set_filter(name, v)))
            />
        }
    };

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
                    placeholder="Nome, razão social ou CNPJ"
                    on_change=Callback::new(move |term: String| page.apply(|s| s.set_search_term(term)))
                />
                {select("Setor", filters::SECTOR, sectors.into())}
                {select("Município", filters::REGION, regions.into())}
                {select("UF", filters::STATE, states.into())}
                {select("Porte", filters::SIZE_BAND, size_bands)}
                {select("Situação", filters::STATUS, statuses)}
                <DateRangeFilter
                    label="Início de atividade"
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
                title="Empresas"
                icon_name="building"
                subtitle="Diretório de estabelecimentos ativos e inativos".to_string()
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
                empty_message="Nenhuma empresa encontrada para os filtros selecionados."
                render=establishment_card
            />
        </div>
    }
}
