use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use http::{Request, Response};
use tower::{Layer, Service};
use tracing::{info, warn};

use crate::metrics::generate_request_id;

/// A Tower layer that logs REST requests and responses.
#[derive(Clone, Copy)]
pub struct HttpLoggingLayer;

impl<S> Layer<S> for HttpLoggingLayer {
    type Service = HttpLoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpLoggingService { inner }
    }
}

/// A Tower service that logs REST requests and responses.
#[derive(Clone)]
pub struct HttpLoggingService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HttpLoggingService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let start = Instant::now();
        let request_id = generate_request_id();
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        info!(
            request_id = %request_id,
            http.method = %method,
            http.path = %path,
            "HTTP request started"
        );

        let mut inner = self.inner.clone();
        Box::pin(async move {
            let result = inner.call(req).await;
            let duration_ms = start.elapsed().as_millis();

            match &result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_server_error() {
                        warn!(
                            request_id = %request_id,
                            http.method = %method,
                            http.path = %path,
                            http.status = status.as_u16(),
                            duration_ms = %duration_ms,
                            "HTTP request completed with server error"
                        );
                    } else {
                        info!(
                            request_id = %request_id,
                            http.method = %method,
                            http.path = %path,
                            http.status = status.as_u16(),
                            duration_ms = %duration_ms,
                            "HTTP request completed"
                        );
                    }
                }
                Err(_) => {
                    info!(
                        request_id = %request_id,
                        http.method = %method,
                        http.path = %path,
                        http.status = "error",
                        duration_ms = %duration_ms,
                        "HTTP request failed"
                    );
                }
            }

            result
        })
    }
}
