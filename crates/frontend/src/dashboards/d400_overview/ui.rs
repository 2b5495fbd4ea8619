use contracts::dashboards::d400_overview::dto::{OverviewResponse, CLOSING_SOON_DAYS};
use contracts::domain::a001_tender::{Tender, TenderId};
use contracts::shared::format::format_brl;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::keys;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::loading::use_loading;
use crate::shared::notifications::use_notifications;

fn recent_tender_row(tender: Tender, ctx: AppGlobalContext) -> impl IntoView {
    let key = keys::tender_detail(TenderId(tender.id));
    let value = tender
        .estimated_value
        .map(format_brl)
        .unwrap_or_else(|| "-".to_string());
    let status = tender.status_label();
    view! {
        <tr class="data-table__row--clickable" on:click=move |_| ctx.open(&key)>
            <td>{tender.number}</td>
            <td>{tender.agency}</td>
            <td>{status}</td>
            <td>{format_datetime(&tender.opening_at)}</td>
            <td class="data-table__number">{value}</td>
        </tr>
    }
}

/// Visão geral: счётчики и последние лицитации
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let loading = use_loading();

    let overview = RwSignal::new(Option::<OverviewResponse>::None);
    let failed = RwSignal::new(false);

    let load = move || {
        failed.set(false);
        spawn_local(async move {
            match loading.track(api::get_overview()).await {
                Ok(data) => {
                    let _ = overview.try_set(Some(data));
                }
                Err(e) => {
                    let _ = failed.try_set(true);
                    notifications.error(
                        "d400_overview",
                        format!("Não foi possível carregar o painel: {}", e),
                    );
                }
            }
        });
    };
    load();

    let counter = move |f: fn(&OverviewResponse) -> u64| {
        Signal::derive(move || overview.with(|o| o.as_ref().map(f)))
    };

    view! {
        <div class="page">
            <PageHeader title="Visão geral" icon_name="layout-dashboard" subtitle="Resumo das oportunidades e do cadastro".to_string()>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Atualizar"
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Licitações abertas"
                    icon_name="file-text"
                    value=counter(|o| o.open_tenders)
                />
                <StatCard
                    label="Encerram em breve"
                    icon_name="calendar"
                    value=counter(|o| o.closing_soon)
                    hint=format!("Próximos {} dias", CLOSING_SOON_DAYS)
                />
                <StatCard
                    label="Empresas cadastradas"
                    icon_name="building"
                    value=counter(|o| o.establishments_total)
                />
                <StatCard
                    label="Empresas ativas"
                    icon_name="activity"
                    value=counter(|o| o.active_establishments)
                />
            </div>

            <section class="details-section">
                <div class="details-section__header">
                    <h3 class="details-section__title">"Licitações recentes"</h3>
                    <button class="button button--link" on:click=move |_| ctx.open(keys::TENDERS)>
                        "Ver todas"
                    </button>
                </div>
                {move || match overview.get() {
                    None if failed.get() => view! {
                        <div class="result-empty">"Dados indisponíveis."</div>
                    }
                    .into_any(),
                    None => view! { <div class="details-loading">"Carregando..."</div> }.into_any(),
                    Some(o) if o.recent_tenders.is_empty() => view! {
                        <div class="result-empty">"Nenhuma licitação publicada."</div>
                    }
                    .into_any(),
                    Some(o) => view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Número"</th>
                                    <th>"Órgão"</th>
                                    <th>"Status"</th>
                                    <th>"Abertura"</th>
                                    <th>"Valor estimado"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {o.recent_tenders
                                    .into_iter()
                                    .map(|t| recent_tender_row(t, ctx))
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}
