use contracts::domain::a001_tender::{Tender, TenderDocument, TenderId, TenderProposal};
use contracts::shared::cnpj::format_cnpj;
use contracts::shared::format::{format_brl, format_bytes};
use leptos::prelude::*;

use super::view_model::TenderDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::keys;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::loading::use_loading;
use crate::shared::notifications::use_notifications;

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="details-field">
            <span class="details-field__label">{label}</span>
            <span class="details-field__value">{value}</span>
        </div>
    }
}

fn summary(tender: Tender) -> impl IntoView {
    let badge = format!(
        "badge badge--{}",
        tender.status_kind().map(|s| s.badge_variant()).unwrap_or("neutral")
    );
    let status = tender.status_label();
    let value = tender
        .estimated_value
        .map(format_brl)
        .unwrap_or_else(|| "Não informado".to_string());
    let closing = tender
        .closing_at
        .as_deref()
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string());

    view! {
        <section class="details-section">
            <div class="details-header">
                <h2 class="details-header__title">{tender.number}</h2>
                <span class=badge>{status}</span>
            </div>
            <p class="details-object">{tender.object}</p>
            <div class="details-grid">
                {field("Órgão", tender.agency)}
                {field("Modalidade", tender.modality)}
                {field("Abertura", format_datetime(&tender.opening_at))}
                {field("Encerramento", closing)}
                {field("Valor estimado", value)}
            </div>
            {tender.description.map(|d| view! { <p class="details-description">{d}</p> })}
        </section>
    }
}

fn documents_section(documents: Vec<TenderDocument>) -> impl IntoView {
    view! {
        <section class="details-section">
            <h3 class="details-section__title">{icon("file-text")}"Documentos"</h3>
            {if documents.is_empty() {
                view! { <div class="result-empty">"Nenhum documento publicado."</div> }.into_any()
            } else {
                view! {
                    <ul class="document-list">
                        {documents.into_iter().map(|doc| {
                            let size = doc
                                .size_bytes
                                .and_then(|b| u64::try_from(b).ok())
                                .map(format_bytes);
                            view! {
                                <li class="document-list__item">
                                    <a href=doc.url target="_blank" rel="noopener">
                                        {icon("download")}{doc.name}
                                    </a>
                                    <span class="document-list__kind">{doc.kind}</span>
                                    {size.map(|s| view! { <span class="document-list__size">{s}</span> })}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}

fn proposals_section(proposals: Vec<TenderProposal>) -> impl IntoView {
    view! {
        <section class="details-section">
            <h3 class="details-section__title">{icon("users")}"Propostas"</h3>
            {if proposals.is_empty() {
                view! { <div class="result-empty">"Nenhuma proposta enviada."</div> }.into_any()
            } else {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Empresa"</th>
                                <th>"Valor"</th>
                                <th>"Status"</th>
                                <th>"Enviada em"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {proposals.into_iter().map(|p| view! {
                                <tr>
                                    <td>{p.company_cnpj.as_deref().map(format_cnpj).unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="data-table__number">{format_brl(p.value)}</td>
                                    <td>{p.status}</td>
                                    <td>{format_datetime(&p.sent_at)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
pub fn TenderDetails(id: TenderId, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = TenderDetailsViewModel::new(id);
    vm.load(ctx, use_notifications(), use_loading(), on_close);

    view! {
        <div class="page details-container">
            <div class="details-toolbar">
                <button class="button button--secondary" on:click=move |_| ctx.open(keys::TENDERS)>
                    {icon("arrow-left")}
                    "Voltar para licitações"
                </button>
            </div>
            {move || match vm.detail.get() {
                None => view! { <div class="details-loading">"Carregando licitação..."</div> }.into_any(),
                Some(detail) => view! {
                    <div class="details-body">
                        {summary(detail.tender)}
                        {documents_section(detail.documents)}
                        {proposals_section(detail.proposals)}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
