use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Идёт проверка сохранённой сессии
    pub restoring: bool,
}

impl AuthState {
    fn signed_in(access_token: String, user_info: UserInfo) -> Self {
        Self {
            access_token: Some(access_token),
            user_info: Some(user_info),
            restoring: false,
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let has_stored_session = storage::get_access_token().is_some();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: has_stored_session,
        ..AuthState::default()
    });

    if has_stored_session {
        spawn_local(async move {
            let restored = restore_session().await;
            if restored.is_none() {
                storage::clear_tokens();
            }
            set_auth_state.set(restored.unwrap_or_default());
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Сохранённый access token проверяется через /me; при отказе пробуем refresh
async fn restore_session() -> Option<AuthState> {
    let access_token = storage::get_access_token()?;
    match api::get_current_user(&access_token).await {
        Ok(user_info) => Some(AuthState::signed_in(access_token, user_info)),
        Err(e) => {
            log::info!("Stored session rejected ({}), trying refresh", e);
            let refresh_token = storage::get_refresh_token()?;
            let response = api::refresh_token(refresh_token).await.ok()?;
            storage::save_access_token(&response.access_token);
            let user_info = api::get_current_user(&response.access_token).await.ok()?;
            Some(AuthState::signed_in(response.access_token, user_info))
        }
    }
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(email, password).await?;

    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);

    set_auth_state.set(AuthState::signed_in(response.access_token, response.user));
    Ok(())
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("Logout request failed: {}", e);
        }
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

/// Обновить имя в шапке после сохранения профиля
pub fn update_full_name(set_auth_state: WriteSignal<AuthState>, full_name: Option<String>) {
    set_auth_state.update(|state| {
        if let Some(user) = state.user_info.as_mut() {
            user.full_name = full_name;
        }
    });
}
