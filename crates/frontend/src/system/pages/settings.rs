use contracts::system::auth::validate_new_password;
use contracts::system::profile::{Profile, UpdateProfileDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::PageHeader;
use crate::shared::loading::use_loading;
use crate::shared::notifications::use_notifications;
use crate::system::auth::api as auth_api;
use crate::system::profile::api as profile_api;

#[component]
fn ChangePasswordForm() -> impl IntoView {
    let notifications = use_notifications();
    let loading = use_loading();

    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error_message.set(None);

        let current_val = current.get_untracked();
        let new_val = new_password.get_untracked();
        if current_val.is_empty() {
            error_message.set(Some("Informe a senha atual.".to_string()));
            return;
        }
        if let Err(e) = validate_new_password(&new_val, &confirmation.get_untracked()) {
            error_message.set(Some(e));
            return;
        }

        is_saving.set(true);
        spawn_local(async move {
            match loading.track(auth_api::change_password(current_val, new_val)).await {
                Ok(()) => {
                    current.set(String::new());
                    new_password.set(String::new());
                    confirmation.set(String::new());
                    notifications.success("Senha alterada com sucesso.");
                }
                Err(e) => error_message.set(Some(e)),
            }
            let _ = is_saving.try_set(false);
        });
    };

    let field = move |id: &'static str, label: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type="password"
                    id=id
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || is_saving.get()
                />
            </div>
        }
    };

    view! {
        <form class="form-card" on:submit=on_submit>
            <h2 class="form-card__title">"Alterar senha"</h2>
            <Show when=move || error_message.get().is_some()>
                <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
            </Show>
            {field("settings-current", "Senha atual", current)}
            {field("settings-new", "Nova senha", new_password)}
            {field("settings-confirm", "Confirmar nova senha", confirmation)}
            <div class="form-actions">
                <button type="submit" class="button button--primary" disabled=move || is_saving.get()>
                    {move || if is_saving.get() { "Salvando..." } else { "Alterar senha" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn NotificationPreferences() -> impl IntoView {
    let notifications = use_notifications();
    let loading = use_loading();
    let profile = RwSignal::new(Option::<Profile>::None);

    spawn_local(async move {
        match loading.track(profile_api::get_profile()).await {
            Ok(p) => profile.set(Some(p)),
            Err(e) => notifications.error("settings", format!("Não foi possível carregar as preferências: {}", e)),
        }
    });

    let on_toggle = move |enabled: bool| {
        let Some(current) = profile.get_untracked() else {
            return;
        };
        let dto = UpdateProfileDto {
            email_notifications: enabled,
            ..UpdateProfileDto::from(&current)
        };
        spawn_local(async move {
            match loading.track(profile_api::save_profile(&dto)).await {
                Ok(saved) => {
                    profile.set(Some(saved));
                    notifications.success("Preferências salvas.");
                }
                Err(e) => {
                    // вернуть переключатель в прежнее состояние
                    profile.set(Some(current));
                    notifications.error("settings", format!("Erro ao salvar as preferências: {}", e));
                }
            }
        });
    };

    view! {
        <div class="form-card">
            <h2 class="form-card__title">"Notificações"</h2>
            <label class="form-check">
                <input
                    type="checkbox"
                    prop:checked=move || profile.with(|p| p.as_ref().map(|p| p.email_notifications).unwrap_or(false))
                    disabled=move || profile.with(|p| p.is_none())
                    on:change=move |ev| on_toggle(event_target_checked(&ev))
                />
                <span>"Receber avisos de novas licitações por e-mail"</span>
            </label>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Configurações" icon_name="settings">
                {()}
            </PageHeader>
            <ChangePasswordForm />
            <NotificationPreferences />
        </div>
    }
}
