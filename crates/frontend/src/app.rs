use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::loading::LoadingStore;
use crate::shared::notifications::{NotificationStore, Toaster};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Глобальные сторы: табы, уведомления, счётчик запросов
    provide_context(AppGlobalContext::new());
    provide_context(NotificationStore::new());
    provide_context(LoadingStore::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppShell />
            </AuthProvider>
            <Toaster />
        </ConfigProvider>
    }
}
