//! Sidebar: группы меню, каждая строка открывает таб

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{keys, tab_label_for_key};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Painel",
            items: vec![(keys::OVERVIEW, "layout-dashboard")],
        },
        MenuGroup {
            label: "Oportunidades",
            items: vec![(keys::TENDERS, "file-text")],
        },
        MenuGroup {
            label: "Cadastro",
            items: vec![(keys::ESTABLISHMENTS, "building")],
        },
        MenuGroup {
            label: "Conta",
            items: vec![(keys::PROFILE, "user"), (keys::SETTINGS, "settings")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| view! {
                <div class="app-sidebar__group">
                    <div class="app-sidebar__group-label">{group.label}</div>
                    {group.items.into_iter().map(|(key, icon_name)| {
                        let label = tab_label_for_key(key);
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    ctx.active.with(|a| a.as_deref() == Some(key))
                                }
                                on:click=move |_| ctx.open(key)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(icon_name)}
                                    <span>{label}</span>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            }).collect_view()}
        </nav>
    }
}
