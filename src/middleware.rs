// src/middleware.rs
// DOCUMENTATION: Actix middleware wiring for admission control
// PURPOSE: Reject over-budget clients before any handler logic runs

use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use actix_web::Error;
use futures_util::future::LocalBoxFuture;

use crate::errors::RelayError;
use crate::services::AdmissionControl;

/// Transform factory applied to the `/api` scope
pub struct RateLimit {
    admission: Arc<AdmissionControl>,
}

impl RateLimit {
    pub fn new(admission: Arc<AdmissionControl>) -> Self {
        Self { admission }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RateLimitMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service,
            admission: self.admission.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: S,
    admission: Arc<AdmissionControl>,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let client = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();

        if self.admission.try_acquire(&client) {
            let fut = self.service.call(req);
            Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
        } else {
            log::warn!("admission control rejected client {}", client);
            let response = RelayError::RateLimited.error_response().map_into_right_body();
            Box::pin(ready(Ok(req.into_response(response))))
        }
    }
}
