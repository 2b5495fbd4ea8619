//! Поля панели фильтров: строка поиска, выпадающий список, диапазон дат, сортировка.

use crate::shared::date_utils::{date_input_value, parse_date_input};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::shared::options::FilterOption;
use contracts::shared::search::SortOrder;
use leptos::prelude::*;
use thaw::Input;

/// Строка поиска. Значение из `value` подставляется при сбросе фильтров.
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    placeholder: String,
    on_change: Callback<String>,
) -> impl IntoView {
    let text = RwSignal::new(value.get_untracked());

    // внешний сброс → поле ввода
    Effect::new(move |_| {
        let external = value.get();
        if text.get_untracked() != external {
            text.set(external);
        }
    });

    // ввод → состояние фильтров (без изменений страница не сбрасывается)
    Effect::new(move |_| {
        on_change.run(text.get());
    });

    view! {
        <div class="filter-field filter-field--search">
            <span class="filter-field__icon">{icon("search")}</span>
            <Input value=text placeholder=placeholder />
        </div>
    }
}

/// Выпадающий список; первый пункт "Todos" снимает фильтр
#[component]
pub fn SelectFilter(
    #[prop(into)]
    label: String,
    #[prop(into)]
    options: Signal<Vec<FilterOption>>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-field">
            <span class="filter-field__label">{label}</span>
            <select
                class="filter-field__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                <option value="">"Todos"</option>
                {move || options.get().into_iter().map(|opt| {
                    let code = opt.code.clone();
                    view! {
                        <option value=opt.code selected=move || value.get() == code>
                            {opt.label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}

/// Две даты включительно; пустое поле снимает границу
#[component]
pub fn DateRangeFilter(
    #[prop(into)]
    label: String,
    #[prop(into)]
    from: Signal<Option<NaiveDate>>,
    #[prop(into)]
    to: Signal<Option<NaiveDate>>,
    on_from: Callback<Option<NaiveDate>>,
    on_to: Callback<Option<NaiveDate>>,
) -> impl IntoView {
    view! {
        <div class="filter-field filter-field--dates">
            <span class="filter-field__label">{icon("calendar")}{label}</span>
            <input
                type="date"
                class="filter-field__date"
                title="De"
                prop:value=move || date_input_value(from.get())
                on:change=move |ev| on_from.run(parse_date_input(&event_target_value(&ev)))
            />
            <span class="filter-field__separator">"até"</span>
            <input
                type="date"
                class="filter-field__date"
                title="Até"
                prop:value=move || date_input_value(to.get())
                on:change=move |ev| on_to.run(parse_date_input(&event_target_value(&ev)))
            />
        </div>
    }
}

/// Поле сортировки и направление
#[component]
pub fn SortSelect(
    /// (field, label)
    fields: &'static [(&'static str, &'static str)],
    #[prop(into)]
    field: Signal<String>,
    #[prop(into)]
    order: Signal<SortOrder>,
    on_change: Callback<(String, SortOrder)>,
) -> impl IntoView {
    view! {
        <label class="filter-field">
            <span class="filter-field__label">"Ordenar por"</span>
            <div class="filter-field__sort">
                <select
                    class="filter-field__select"
                    on:change=move |ev| on_change.run((event_target_value(&ev), order.get_untracked()))
                    prop:value=move || field.get()
                >
                    {fields.iter().map(|(code, label)| {
                        let code = *code;
                        view! {
                            <option value=code selected=move || field.get() == code>{*label}</option>
                        }
                    }).collect_view()}
                </select>
                <button
                    class="button button--secondary filter-field__order"
                    title=move || match order.get() {
                        SortOrder::Asc => "Crescente",
                        SortOrder::Desc => "Decrescente",
                    }
                    on:click=move |_| {
                        on_change.run((field.get_untracked(), order.get_untracked().toggled()))
                    }
                >
                    {move || match order.get() {
                        SortOrder::Asc => "A-Z ↑",
                        SortOrder::Desc => "Z-A ↓",
                    }}
                </button>
            </div>
        </label>
    }
}
