//! Request tracing middleware.
//!
//! Assigns a UUID v4 to every request, runs the rest of the pipeline inside
//! a `request` span carrying that id, logs completion with status and
//! duration, and echoes the id back in the `x-request-id` response header.

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures::future::LocalBoxFuture;
use std::future::{Ready, ready};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id stored in request extensions; the JSON rejection handler
/// logs it alongside the validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

pub struct RequestTracing;

impl<S, B> Transform<S, ServiceRequest> for RequestTracing
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTracingMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTracingMiddleware { service }))
    }
}

pub struct RequestTracingMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTracingMiddleware<S>
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
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "request",
            request_id = %request_id,
            method = %req.method(),
            path = %req.path(),
        );

        req.extensions_mut().insert(RequestId(request_id));

        let start = Instant::now();
        let fut = span.in_scope(|| self.service.call(req));

        Box::pin(
            async move {
                let mut res = fut.await?;
                let duration_ms = start.elapsed().as_millis() as u64;

                tracing::info!(
                    status = res.status().as_u16(),
                    duration_ms,
                    "Request completed"
                );

                if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                    res.headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }

                Ok(res)
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};

    async fn echo_request_id(req: actix_web::HttpRequest) -> HttpResponse {
        let id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.to_string())
            .unwrap_or_default();
        HttpResponse::Ok().body(id)
    }

    #[actix_web::test]
    async fn test_response_carries_request_id() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTracing)
                .route("/echo", web::get().to(echo_request_id)),
        )
        .await;

        let req = test::TestRequest::get().uri("/echo").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let header = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .expect("x-request-id header should be present")
            .to_str()
            .unwrap()
            .to_string();
        Uuid::parse_str(&header).expect("request id should be a UUID");

        let body = test::read_body(resp).await;
        assert_eq!(std::str::from_utf8(&body).unwrap(), header);
    }

    #[actix_web::test]
    async fn test_request_ids_are_unique() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTracing)
                .route("/echo", web::get().to(echo_request_id)),
        )
        .await;

        let first = test::call_service(&app, test::TestRequest::get().uri("/echo").to_request())
            .await;
        let second = test::call_service(&app, test::TestRequest::get().uri("/echo").to_request())
            .await;

        assert_ne!(
            first.headers().get(REQUEST_ID_HEADER),
            second.headers().get(REQUEST_ID_HEADER)
        );
    }

    #[actix_web::test]
    async fn test_unmatched_route_still_tagged() {
        let app = test::init_service(App::new().wrap(RequestTracing)).await;

        let req = test::TestRequest::get().uri("/missing").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        assert!(resp.headers().get(REQUEST_ID_HEADER).is_some());
    }
}
