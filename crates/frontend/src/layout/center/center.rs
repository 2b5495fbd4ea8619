use crate::layout::global_context::{AppGlobalContext, Tab};
use leptos::prelude::*;

/// Полоса заголовков табов и область контента
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-tabs">
            <div class="app-tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| (tab.key.clone(), tab.title.clone())
                    children=move |tab: Tab| {
                        let key = tab.key.clone();
                        let key_for_active = tab.key.clone();
                        let key_for_close = tab.key.clone();
                        view! {
                            <div
                                class="app-tabs__tab"
                                class:app-tabs__tab--active=move || {
                                    tabs_store.active.with(|a| a.as_deref() == Some(key_for_active.as_str()))
                                }
                                on:click=move |_| tabs_store.activate_tab(&key)
                            >
                                <span class="app-tabs__title">{tab.title}</span>
                                <button
                                    class="app-tabs__close"
                                    title="Fechar"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        tabs_store.close_tab(&key_for_close);
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <div class="app-tabs__content">
                {children()}
            </div>
        </div>
    }
}
