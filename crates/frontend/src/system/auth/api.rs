use contracts::system::auth::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RefreshRequest, RefreshResponse,
    SignupRequest, SignupResponse, UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::http;

/// Login with e-mail and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest {
        email: email.trim().to_lowercase(),
        password,
    };
    http::post_json("/api/system/auth/login", &request).await
}

pub async fn signup(request: SignupRequest) -> Result<SignupResponse, String> {
    http::post_json("/api/system/auth/signup", &request).await
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let request = RefreshRequest { refresh_token };
    http::post_json("/api/system/auth/refresh", &request).await
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let request = RefreshRequest { refresh_token };
    http::post_empty("/api/system/auth/logout", &request).await
}

/// Текущий пользователь по явно переданному токену (проверка сохранённой сессии)
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Falha de conexão com o servidor: {}", e))?;

    if !response.ok() {
        return Err(format!("Sessão inválida: HTTP {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Resposta inválida do servidor: {}", e))
}

pub async fn change_password(current_password: String, new_password: String) -> Result<(), String> {
    let request = ChangePasswordRequest {
        current_password,
        new_password,
    };
    http::post_empty("/api/system/auth/change-password", &request).await
}
