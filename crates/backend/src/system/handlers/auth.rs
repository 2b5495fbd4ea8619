use axum::{http::StatusCode, Json};
use contracts::system::auth::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RefreshRequest, RefreshResponse,
    SignupRequest, SignupResponse, UserInfo,
};
use contracts::system::users::CreateUserDto;

use crate::shared::data::db::get_connection;
use crate::shared::error::{AppError, AppResult};
use crate::shared::logger;
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::{jwt, refresh_tokens};
use crate::system::users::service as user_service;

/// POST /api/system/auth/signup
pub async fn signup(
    Json(request): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    let dto = CreateUserDto {
        email: request.email,
        password: request.password,
        full_name: request.full_name,
        is_admin: false,
    };
    let user_id = user_service::create(get_connection(), dto).await?;
    logger::log("auth", &format!("Novo usuário {}", user_id));
    Ok((StatusCode::CREATED, Json(SignupResponse { user_id })))
}

/// POST /api/system/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> AppResult<Json<LoginResponse>> {
    let db = get_connection();
    let user = user_service::verify_credentials(db, &request.email, &request.password).await?;

    let access_token = jwt::generate_access_token(&user.id, &user.email, user.is_admin)?;
    let refresh_token = jwt::generate_refresh_token();
    refresh_tokens::store(db, &user.id, &refresh_token, &jwt::refresh_token_expiration()).await?;

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user: user_service::to_user_info(&user),
    }))
}

/// POST /api/system/auth/refresh
pub async fn refresh(Json(request): Json<RefreshRequest>) -> AppResult<Json<RefreshResponse>> {
    let db = get_connection();
    let user_id = refresh_tokens::find_user(db, &request.refresh_token)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let user = user_service::get_by_id(db, &user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or(AppError::Unauthorized)?;

    let access_token = jwt::generate_access_token(&user.id, &user.email, user.is_admin)?;
    Ok(Json(RefreshResponse { access_token }))
}

/// POST /api/system/auth/logout
pub async fn logout(Json(request): Json<RefreshRequest>) -> AppResult<StatusCode> {
    refresh_tokens::revoke(get_connection(), &request.refresh_token).await?;
    Ok(StatusCode::OK)
}

/// GET /api/system/auth/me
pub async fn current_user(user: CurrentUser) -> AppResult<Json<UserInfo>> {
    let user = user_service::get_by_id(get_connection(), user.user_id())
        .await?
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(user_service::to_user_info(&user)))
}

/// POST /api/system/auth/change-password
pub async fn change_password(
    user: CurrentUser,
    Json(request): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    user_service::change_password(
        get_connection(),
        user.user_id(),
        &request.current_password,
        &request.new_password,
    )
    .await?;
    logger::log("auth", &format!("Senha alterada: {}", user.user_id()));
    Ok(StatusCode::OK)
}
