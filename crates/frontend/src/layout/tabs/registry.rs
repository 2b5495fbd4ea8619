//! Tab content registry - маппинг tab.key → View

use super::keys;
use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_tender::ui::details::TenderDetails;
use crate::domain::a001_tender::ui::list::TenderList;
use crate::domain::a003_establishment::ui::list::EstablishmentDirectory;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::page_boundary::PageBoundary;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::profile::ProfilePage;
use crate::system::pages::settings::SettingsPage;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу внутри границы ошибок страницы
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key = StoredValue::new(key.to_string());
    view! {
        <PageBoundary>
            {move || key.with_value(|k| tab_view(k, tabs_store))}
        </PageBoundary>
    }
    .into_any()
}

/// Неизвестный ключ → NotFoundPage
fn tab_view(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        keys::OVERVIEW => view! { <OverviewDashboard /> }.into_any(),
        keys::TENDERS => view! { <TenderList /> }.into_any(),
        keys::ESTABLISHMENTS => view! { <EstablishmentDirectory /> }.into_any(),
        keys::PROFILE => view! { <ProfilePage /> }.into_any(),
        keys::SETTINGS => view! { <SettingsPage /> }.into_any(),
        k => match keys::parse_tender_detail(k) {
            Some(id) => {
                let key_for_close = k.to_string();
                view! {
                    <TenderDetails
                        id=id
                        on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                    />
                }
                .into_any()
            }
            None => {
                log::warn!("Unknown tab key: {}", k);
                let tab_key = k.to_string();
                view! { <NotFoundPage tab_key=tab_key /> }.into_any()
            }
        },
    }
}
