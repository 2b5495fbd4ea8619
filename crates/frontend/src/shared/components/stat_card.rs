use crate::shared::icons::icon;
use contracts::shared::format::format_number;
use leptos::prelude::*;

/// Карточка счётчика дашборда; `None` пока данные не пришли
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<Option<u64>>,
    #[prop(optional, into)]
    hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(icon_name)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value" class:stat-card__value--loading=move || value.get().is_none()>
                {move || value.get().map(format_number).unwrap_or_else(|| "...".to_string())}
            </div>
            {hint.map(|h| view! { <div class="stat-card__hint">{h}</div> })}
        </div>
    }
}
