//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - auth gate (публичные страницы или MainLayout)
//! - `MainLayout` - Shell + Sidebar + Tabs
//! - `PublicShell` - Home / Login / Signup без сессии

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::signup::SignupPage;
use leptos::prelude::*;

/// Публичная страница, которая показывается без сессии
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicPage {
    Home,
    Login,
    Signup,
}

/// Main application layout с Sidebar и Tabs.
///
/// Инициализирует синхронизацию активного таба с URL (?active=...).
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                    <Show when=move || tabs_store.opened.with(|tabs| tabs.is_empty())>
                        <div class="app-tabs__empty">"Selecione uma seção no menu."</div>
                    </Show>
                }
                .into_any()
            }
        />
    }
}

#[component]
fn PublicShell() -> impl IntoView {
    let page = RwSignal::new(PublicPage::Home);
    let navigate = Callback::new(move |target: PublicPage| page.set(target));

    view! {
        <div class="public-shell">
            <header class="public-shell__header">
                <span class="public-shell__brand" on:click=move |_| page.set(PublicPage::Home)>
                    "LicitaX"
                </span>
                <nav class="public-shell__nav">
                    <button class="button button--secondary" on:click=move |_| page.set(PublicPage::Login)>
                        "Entrar"
                    </button>
                    <button class="button button--primary" on:click=move |_| page.set(PublicPage::Signup)>
                        "Criar conta"
                    </button>
                </nav>
            </header>
            <main class="public-shell__content">
                {move || match page.get() {
                    PublicPage::Home => view! { <HomePage navigate=navigate /> }.into_any(),
                    PublicPage::Login => view! { <LoginPage navigate=navigate /> }.into_any(),
                    PublicPage::Signup => view! { <SignupPage navigate=navigate /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Application shell - auth gate component.
///
/// Пока сессия восстанавливается из localStorage, показывается заставка.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || !auth_state.with(|s| s.restoring)
            fallback=|| view! { <div class="app-splash">"Carregando..."</div> }
        >
            <Show
                when=move || auth_state.with(|s| s.access_token.is_some())
                fallback=|| view! { <PublicShell /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
