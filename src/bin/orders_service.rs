use storefront::config::Config;
use storefront::server::{self, ServiceKind};
use storefront::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let kind = ServiceKind::Orders;

    // Load configuration
    let config = Config::from_env(kind.default_port()).expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    telemetry::init_tracing(kind.name(), &config.app);

    tracing::info!("Starting {}", kind.name());
    tracing::info!("Environment: {}", config.app.env);

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    server::run(kind, config, db_pool).await
}
