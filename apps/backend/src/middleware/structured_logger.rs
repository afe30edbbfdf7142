//! Access log: one `request_completed` event per request.
//!
//! Logs the matched route template (`/todo/{todo_id}`) rather than the raw
//! path, so task ids and query strings carrying phone numbers stay out of
//! the logs. Whether a bearer header was offered is recorded, never its
//! value.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{header, StatusCode};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::middleware::request_trace::TraceId;

/// Coarse result class of a finished request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Rejected,
    Failed,
}

impl Outcome {
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_server_error() {
            Outcome::Failed
        } else if status.is_client_error() {
            Outcome::Rejected
        } else {
            Outcome::Ok
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::Rejected => "rejected",
            Outcome::Failed => "failed",
        }
    }
}

struct Completion {
    method: String,
    route: String,
    bearer: bool,
    trace_id: String,
    started: Instant,
}

impl Completion {
    fn from_request(req: &ServiceRequest) -> Self {
        Self {
            method: req.method().to_string(),
            route: req
                .match_pattern()
                .unwrap_or_else(|| "<unmatched>".to_string()),
            bearer: req.headers().contains_key(header::AUTHORIZATION),
            trace_id: req
                .extensions()
                .get::<TraceId>()
                .map(|t| t.0.clone())
                .unwrap_or_else(|| "unknown".to_string()),
            started: Instant::now(),
        }
    }

    fn emit(&self, status: StatusCode) {
        let outcome = Outcome::from_status(status);
        let duration_ms = self.started.elapsed().as_millis() as u64;
        let (method, route, trace_id) = (&self.method, &self.route, &self.trace_id);
        let (status, outcome_str) = (status.as_u16(), outcome.as_str());

        match outcome {
            Outcome::Failed => error!(%method, %route, status, outcome = outcome_str, bearer = self.bearer, duration_ms, %trace_id, "request_completed"),
            Outcome::Rejected => warn!(%method, %route, status, outcome = outcome_str, bearer = self.bearer, duration_ms, %trace_id, "request_completed"),
            Outcome::Ok => info!(%method, %route, status, outcome = outcome_str, bearer = self.bearer, duration_ms, %trace_id, "request_completed"),
        }
    }
}

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let completion = Completion::from_request(&req);
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            completion.emit(status);
            result
        })
    }
}
