use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app_shell::PublicPage;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage(navigate: Callback<PublicPage>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // успешный вход переключает auth gate на MainLayout
            if let Err(e) = do_login(set_auth_state, email_val, password_val).await {
                log::warn!("Login failed: {}", e);
                set_error_message.set(Some(e));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"LicitaX"</h1>
                <h2>"Entrar"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="login-email">"E-mail"</label>
                        <input
                            type="email"
                            id="login-email"
                            autocomplete="username"
                            placeholder="voce@empresa.com.br"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="login-password">"Senha"</label>
                        <input
                            type="password"
                            id="login-password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="button button--primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <p class="login-info">
                    "Ainda não tem conta? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        navigate.run(PublicPage::Signup);
                    }>"Cadastre-se"</a>
                </p>
            </div>
        </div>
    }
}
