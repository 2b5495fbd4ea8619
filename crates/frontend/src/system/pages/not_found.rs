use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::keys;
use crate::shared::icons::icon;

/// Неизвестный ключ таба
#[component]
pub fn NotFoundPage(tab_key: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="page page--centered">
            <div class="not-found">
                {icon("alert")}
                <h1 class="not-found__code">"404"</h1>
                <p class="not-found__text">"Página não encontrada."</p>
                <p class="not-found__key">{tab_key}</p>
                <button class="button button--primary" on:click=move |_| ctx.open(keys::OVERVIEW)>
                    "Voltar ao início"
                </button>
            </div>
        </div>
    }
}
