pub mod dashboards;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    system::tracing::initialize()?;

    // ========================================
    // CONFIG & DATABASE
    // ========================================
    let config = shared::config::load_config().context("Failed to load config.toml")?;
    shared::config::install(config.clone());

    let db_path = shared::config::get_database_path(&config);
    tracing::info!("Database path: {}", db_path.display());

    shared::data::migration_runner::run_migrations(&db_path)
        .await
        .context("Failed to apply migrations")?;
    shared::data::db::initialize_database(&db_path)
        .await
        .context("db init failed")?;
    let db = shared::data::db::get_connection();

    // ========================================
    // PROVISIONING
    // ========================================
    shared::lookup::verify_whitelist(db).await?;
    system::auth::jwt::provision_secret(db).await?;
    system::initialization::ensure_admin_user_exists(db).await?;

    if config.seed.enabled {
        match shared::config::get_seed_dir(&config) {
            Some(dir) => {
                let report = shared::data::seed::seed_if_empty(db, &dir)
                    .await
                    .with_context(|| format!("Seed import from {} failed", dir.display()))?;
                if report.total() > 0 {
                    tracing::info!("Seed imported: {:?}", report);
                }
            }
            None => tracing::warn!("Seed directory '{}' not found, skipping", config.seed.dir),
        }
    }

    shared::logger::log("startup", "Servidor iniciado");

    // ========================================
    // HTTP
    // ========================================
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = routes::configure_routes()
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let ip: std::net::IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server.host '{}'", config.server.host))?;
    let addr = SocketAddr::new(ip, config.server.port);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
