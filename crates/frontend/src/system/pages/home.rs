use leptos::prelude::*;

use crate::app_shell::PublicPage;
use crate::shared::icons::icon;

#[component]
pub fn HomePage(navigate: Callback<PublicPage>) -> impl IntoView {
    let features = [
        (
            "file-text",
            "Licitações em um só lugar",
            "Acompanhe editais abertos, prazos de encerramento e valores estimados.",
        ),
        (
            "building",
            "Cadastro de empresas",
            "Pesquise estabelecimentos por CNPJ, nome, setor, município ou porte.",
        ),
        (
            "layout-dashboard",
            "Visão geral",
            "Indicadores do dia e as licitações mais recentes na tela inicial.",
        ),
    ];

    view! {
        <section class="home">
            <div class="home__hero">
                <h1 class="home__title">"Encontre oportunidades em licitações públicas"</h1>
                <p class="home__subtitle">
                    "O LicitaX reúne licitações e o cadastro de empresas para você decidir onde participar."
                </p>
                <div class="home__actions">
                    <button class="button button--primary" on:click=move |_| navigate.run(PublicPage::Signup)>
                        "Começar agora"
                    </button>
                    <button class="button button--secondary" on:click=move |_| navigate.run(PublicPage::Login)>
                        "Já tenho conta"
                    </button>
                </div>
            </div>
            <div class="home__features">
                {features.into_iter().map(|(icon_name, title, text)| view! {
                    <div class="home__feature">
                        <span class="home__feature-icon">{icon(icon_name)}</span>
                        <h3>{title}</h3>
                        <p>{text}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
