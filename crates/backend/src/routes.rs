use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/signup",
            post(system::handlers::auth::signup),
        )
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        .merge(protected_routes())
}

/// Роуты, требующие access token
fn protected_routes() -> Router {
    Router::new()
        // ========================================
        // SYSTEM
        // ========================================
        .route("/api/system/auth/me", get(system::handlers::auth::current_user))
        .route(
            "/api/system/auth/change-password",
            post(system::handlers::auth::change_password),
        )
        .route(
            "/api/system/profile",
            get(system::handlers::profile::get).put(system::handlers::profile::update),
        )
        .route(
            "/api/logs",
            get(handlers::logs::list_recent).post(handlers::logs::create),
        )
        // ========================================
        // A001 TENDERS
        // ========================================
        .route("/api/a001/tenders/search", post(handlers::a001_tender::search))
        .route(
            "/api/a001/tenders/options/modalities",
            get(handlers::a001_tender::modality_options),
        )
        .route("/api/a001/tenders/:id", get(handlers::a001_tender::get_detail))
        // ========================================
        // A003 ESTABLISHMENTS
        // ========================================
        .route(
            "/api/a003/establishments/search",
            post(handlers::a003_establishment::search),
        )
        .route(
            "/api/a003/establishments/options/sectors",
            get(handlers::a003_establishment::sector_options),
        )
        .route(
            "/api/a003/establishments/options/regions",
            get(handlers::a003_establishment::region_options),
        )
        // ========================================
        // LOOKUPS / DASHBOARDS
        // ========================================
        .route("/api/rpc/distinct_values", post(handlers::lookups::distinct_values))
        .route("/api/d400/overview", get(handlers::d400_overview::get_overview))
        .route_layer(middleware::from_fn(system::auth::middleware::require_auth))
}
