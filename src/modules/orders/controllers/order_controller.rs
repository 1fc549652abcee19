use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::orders::models::OrderRequest;
use crate::modules::orders::services::OrderService;

/// Place a new order
/// POST /api/order
pub async fn place_order(
    service: web::Data<Arc<OrderService>>,
    request: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    service.place_order(request.into_inner()).await?;

    Ok(HttpResponse::Created().finish())
}

/// List all orders
/// GET /api/order
pub async fn get_all_orders(
    service: web::Data<Arc<OrderService>>,
) -> Result<HttpResponse, AppError> {
    let orders = service.get_all_orders().await?;

    Ok(HttpResponse::Ok().json(orders))
}

/// Configure order routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/order")
            .route("", web::post().to(place_order))
            .route("", web::get().to(get_all_orders)),
    );
}
