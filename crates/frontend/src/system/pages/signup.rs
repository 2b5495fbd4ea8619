use contracts::system::auth::{validate_email, validate_new_password, SignupRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app_shell::PublicPage;
use crate::shared::notifications::use_notifications;
use crate::system::auth::api;

#[component]
pub fn SignupPage(navigate: Callback<PublicPage>) -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let notifications = use_notifications();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error_message.set(None);

        let email_val = email.get().trim().to_lowercase();
        let password_val = password.get();
        let check = validate_email(&email_val)
            .and_then(|_| validate_new_password(&password_val, &confirmation.get()));
        if let Err(e) = check {
            error_message.set(Some(e));
            return;
        }

        let name = full_name.get().trim().to_string();
        let request = SignupRequest {
            email: email_val,
            password: password_val,
            full_name: (!name.is_empty()).then_some(name),
        };

        is_loading.set(true);
        spawn_local(async move {
            match api::signup(request).await {
                Ok(_) => {
                    notifications.success("Conta criada com sucesso. Faça login para continuar.");
                    navigate.run(PublicPage::Login);
                }
                Err(e) => {
                    log::warn!("Signup failed: {}", e);
                    error_message.set(Some(e));
                }
            }
            let _ = is_loading.try_set(false);
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
            </div>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"LicitaX"</h1>
                <h2>"Criar conta"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    {field("signup-name", "Nome completo (opcional)", "text", full_name)}
                    {field("signup-email", "E-mail", "email", email)}
                    {field("signup-password", "Senha", "password", password)}
                    {field("signup-confirmation", "Confirmar senha", "password", confirmation)}

                    <button type="submit" class="button button--primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Criando conta..." } else { "Criar conta" }}
                    </button>
                </form>

                <p class="login-info">
                    "Já tem conta? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        navigate.run(PublicPage::Login);
                    }>"Entrar"</a>
                </p>
            </div>
        </div>
    }
}
