use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::medianos::models::MedianoRequest;
use crate::modules::medianos::services::MedianoService;

/// Create a new mediano
/// POST /api/mediano
pub async fn add_mediano(
    service: web::Data<Arc<MedianoService>>,
    request: web::Json<MedianoRequest>,
) -> Result<HttpResponse, AppError> {
    service.add_mediano(request.into_inner()).await?;

    Ok(HttpResponse::Created().finish())
}

/// List all medianos
/// GET /api/mediano
pub async fn get_all_medianos(
    service: web::Data<Arc<MedianoService>>,
) -> Result<HttpResponse, AppError> {
    let medianos = service.get_all_medianos().await?;

    Ok(HttpResponse::Ok().json(medianos))
}

/// Configure mediano routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/mediano")
            .route("", web::post().to(add_mediano))
            .route("", web::get().to(get_all_medianos)),
    );
}
