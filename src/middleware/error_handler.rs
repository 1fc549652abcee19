use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::JsonPayloadError,
    Error, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::core::AppError;
use crate::middleware::request_id::RequestIdValue;

/// Middleware that logs failed requests for monitoring
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let request_id = req
            .extensions()
            .get::<RequestIdValue>()
            .map(|id| id.0.clone());

        Box::pin(async move {
            let result = service.call(req).await;
            let request_id = request_id.as_deref();

            match &result {
                Err(err) => log_error(err, request_id),
                Ok(res) if res.status().is_server_error() => {
                    if let Some(err) = res.response().error() {
                        log_error(err, request_id);
                    } else {
                        tracing::error!(
                            request_id = request_id.unwrap_or("-"),
                            status = %res.status(),
                            "Request failed"
                        );
                    }
                }
                Ok(_) => {}
            }

            result
        })
    }
}

/// Log an error that escaped a handler
pub fn log_error(err: &Error, request_id: Option<&str>) {
    tracing::error!(
        request_id = request_id.unwrap_or("-"),
        status = %err.as_response_error().status_code(),
        "Request error: {}",
        err
    );
}

/// Reject unusable JSON bodies with the application's error envelope
///
/// Installed through `web::JsonConfig::error_handler`. Malformed bodies become
/// a 400; oversized bodies and payload failures keep the status actix-web
/// assigns them (413 for a body over the limit).
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!(path = %req.path(), "Rejected request body: {}", err);

    match err {
        JsonPayloadError::Deserialize(e) => AppError::Json(e).into(),
        other => AppError::payload(other.status_code(), other.to_string()).into(),
    }
}
