use crate::shared::icons::icon;
use contracts::shared::search::{can_go_next, can_go_previous};
use leptos::prelude::*;

/// Кнопки "Anterior" / "Próxima" и подпись "Página X de Y".
///
/// Страницы нумеруются с 1. "Próxima" недоступна, пока запрос в полёте.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    page: Signal<u64>,

    #[prop(into)]
    total_pages: Signal<u64>,

    /// Total count of matching rows
    #[prop(into)]
    total_count: Signal<u64>,

    #[prop(into)]
    is_loading: Signal<bool>,

    on_page_change: Callback<u64>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let current = page.get();
                    if can_go_previous(current) {
                        on_page_change.run(current - 1);
                    }
                }
                disabled=move || !can_go_previous(page.get())
                title="Página anterior"
            >
                {icon("chevron-left")}
                "Anterior"
            </button>
            <span class="pagination-info">
                {move || format!("Página {} de {}", page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let current = page.get();
                    if can_go_next(current, total_pages.get(), is_loading.get()) {
                        on_page_change.run(current + 1);
                    }
                }
                disabled=move || !can_go_next(page.get(), total_pages.get(), is_loading.get())
                title="Próxima página"
            >
                "Próxima"
                {icon("chevron-right")}
            </button>
            <span class="pagination-count">
                {move || match total_count.get() {
                    1 => "1 resultado".to_string(),
                    n => format!("{} resultados", contracts::shared::format::format_number(n)),
                }}
            </span>
        </div>
    }
}
