use crate::error::{AppError, ValidationDetails};
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::{JsonPayloadError, ResponseError},
    http::StatusCode,
    Error as ActixError, HttpRequest,
};
use std::{future::Future, pin::Pin};

impl From<ActixError> for AppError {
    fn from(err: ActixError) -> Self {
        let status = err.as_response_error().status_code();
        let error_str = err.to_string();

        let context = format!("Status: {}, Error: {}", status, error_str);
        log::error!("{}", t!("logs.error_occurred", context = context));

        match status {
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::BAD_REQUEST => AppError::Validation(ValidationDetails {
                field: "request".to_string(),
                message: error_str,
            }),
            _ => AppError::Generic(error_str),
        }
    }
}

/// Turns body deserialization failures into the JSON error format used by every endpoint.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> ActixError {
    log::warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);

    AppError::Validation(ValidationDetails {
        field: "body".to_string(),
        message: t!("validation.invalid_body", reason = err.to_string()).to_string(),
    })
    .into()
}

pub struct ErrorHandlerMiddleware;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = ActixError;
    type Transform = ErrorHandlerService<S>;
    type InitError = ();
    type Future = Pin<Box<dyn Future<Output = Result<Self::Transform, Self::InitError>>>>;

    fn new_transform(&self, service: S) -> Self::Future {
        Box::pin(async move { Ok(ErrorHandlerService { service }) })
    }
}

pub struct ErrorHandlerService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = ActixError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(
        &self,
        ctx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let http_req = req.request().clone();

        log::debug!("Handling request: method={}, uri={}", http_req.method(), http_req.uri());

        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => Ok(res.map_into_boxed_body()),
                Err(err) => {
                    log::error!("Request failed: {} {}", http_req.method(), http_req.uri());
                    log::debug!("Error details: {:?}", err);

                    let app_error = AppError::from(err);
                    Ok(ServiceResponse::new(http_req, app_error.error_response()))
                }
            }
        })
    }
}

pub fn error_handler() -> ErrorHandlerMiddleware {
    ErrorHandlerMiddleware
}
