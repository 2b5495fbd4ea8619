use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::loading::use_loading;

/// Индикатор запросов в полёте; единственный подписчик `LoadingStore`
#[component]
pub fn ApiStatusIndicator() -> impl IntoView {
    let loading = use_loading();

    view! {
        <div
            class="api-status"
            class:api-status--busy=move || loading.is_busy()
            title=move || match loading.in_flight() {
                0 => "Conectado".to_string(),
                n => format!("Carregando ({})", n),
            }
        >
            {icon("activity")}
            <span class="api-status__label">
                {move || if loading.is_busy() { "Carregando..." } else { "Online" }}
            </span>
        </div>
    }
}
