use crate::shared::icons::icon;
use leptos::prelude::*;

/// Сворачиваемая панель фильтров: счётчик активных условий,
/// кнопка "Limpar filtros" и слот пагинации в заголовке.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    on_clear: Callback<()>,

    /// Pagination controls (children/slot)
    #[prop(into)]
    pagination_controls: ChildrenFn,

    /// Filter content (form fields)
    #[prop(into)]
    filter_content: ChildrenFn,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtros"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls()}
                </div>
                <div class="filter-panel-header__right">
                    <button
                        class="button button--secondary"
                        on:click=move |_| on_clear.run(())
                        disabled=move || active_filters_count.get() == 0
                    >
                        {icon("x")}
                        "Limpar filtros"
                    </button>
                </div>
            </div>

            <div
                class="filter-panel__collapsible"
                class:filter-panel__collapsible--expanded=move || is_expanded.get()
                class:filter-panel__collapsible--collapsed=move || !is_expanded.get()
            >
                <div class="filter-panel-content">
                    {filter_content()}
                </div>
            </div>
        </div>
    }
}
