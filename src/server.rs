//! HTTP server assembly for the two services.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use sqlx::MySqlPool;
use tracing_actix_web::TracingLogger;

use crate::config::Config;
use crate::middleware::{json_error_handler, ErrorHandler, RequestId};
use crate::modules::medianos::{MedianoService, MySqlMedianoRepository};
use crate::modules::orders::{MySqlOrderRepository, OrderService};
use crate::modules::{health, medianos, orders};

/// Which of the two services a process runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Products,
    Orders,
}

impl ServiceKind {
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Products => "products-service",
            ServiceKind::Orders => "orders-service",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            ServiceKind::Products => 8080,
            ServiceKind::Orders => 8081,
        }
    }
}

/// Routes and shared state of products-service
pub fn configure_products(
    service: Arc<MedianoService>,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(service.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(health::configure)
            .configure(medianos::controllers::configure);
    }
}

/// Routes and shared state of orders-service
pub fn configure_orders(
    service: Arc<OrderService>,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(service.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(health::configure)
            .configure(orders::controllers::configure);
    }
}

/// Bind and run the service until shutdown
pub async fn run(kind: ServiceKind, config: Config, pool: MySqlPool) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    tracing::info!(
        service = kind.name(),
        environment = %config.app.env,
        workers = config.server.workers,
        "Server binding to: {}",
        bind_address
    );

    let server = match kind {
        ServiceKind::Products => {
            let repo = Arc::new(MySqlMedianoRepository::new(pool.clone()));
            let routes = configure_products(Arc::new(MedianoService::new(repo)));

            HttpServer::new(move || {
                App::new()
                    .wrap(ErrorHandler)
                    .wrap(RequestId)
                    .wrap(TracingLogger::default())
                    .app_data(web::Data::new(pool.clone()))
                    .configure(routes.clone())
            })
            .workers(config.server.workers)
            .bind(&bind_address)?
            .run()
        }
        ServiceKind::Orders => {
            let repo = Arc::new(MySqlOrderRepository::new(pool.clone()));
            let routes = configure_orders(Arc::new(OrderService::new(repo)));

            HttpServer::new(move || {
                App::new()
                    .wrap(ErrorHandler)
                    .wrap(RequestId)
                    .wrap(TracingLogger::default())
                    .app_data(web::Data::new(pool.clone()))
                    .configure(routes.clone())
            })
            .workers(config.server.workers)
            .bind(&bind_address)?
            .run()
        }
    };

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
