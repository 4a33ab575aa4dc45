//! Middleware for modifying requests and responses.

use crate::infra::error::{ApiError, ClientError, InternalError};
use axum::{body::Body, extract::Request, middleware::Next, response::IntoResponse};
use bytes::Bytes;
use http::Response;
use http_body_util::BodyExt;
use hyper::body::Body as _;
use tower_http::trace::MakeSpan;

static X_REQUEST_ID: &str = "x-request-id";

#[derive(Clone)]
pub(crate) struct MakeRequestIdSpan;

impl<B> MakeSpan<B> for MakeRequestIdSpan {
    fn make_span(&mut self, request: &http::Request<B>) -> tracing::Span {
        let request_id = request
            .headers()
            .get(X_REQUEST_ID)
            .expect("request id not set")
            .to_str()
            .expect("invalid request id");
        tracing::info_span!(
            "request",
            request_id = request_id,
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
        )
    }
}

/// The maximum size of a body to log.
const MAX_BODY_SIZE: u64 = 8192;

/// Log the request and response, including small bodies.
pub(crate) async fn log_request_response(
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    // Log request
    let (parts, body) = req.into_parts();
    let log_req = match body.size_hint().upper() {
        Some(n) => n <= MAX_BODY_SIZE,
        _ => false,
    };
    let req = if log_req {
        let body_bytes = buffer_and_print("request", body).await?;
        Request::from_parts(parts, Body::from(body_bytes))
    } else {
        Request::from_parts(parts, body)
    };
    let host = req
        .headers()
        .get(http::header::HOST)
        .map(|h| h.to_str())
        .transpose()
        .map_err(|e| ClientError::BadRequest(e.to_string()))?
        .unwrap_or("unknown")
        .to_string();
    let method = req.method().clone();
    let uri = req.uri().clone();

    // Perform request
    let res = next.run(req).await;

    // Log response
    let (parts, body) = res.into_parts();
    let log_res = match body.size_hint().upper() {
        Some(n) => n <= MAX_BODY_SIZE,
        _ => false,
    };
    let res = if log_res {
        let body_bytes = buffer_and_print("response", body).await?;
        Response::from_parts(parts, Body::from(body_bytes))
    } else {
        Response::from_parts(parts, body)
    };
    tracing::debug!(%host, %method, %uri, status = res.status().as_u16(), "handled request");

    Ok(res)
}

/// Read the entire body stream into memory, logging it if it is valid text.
async fn buffer_and_print(direction: &str, body: Body) -> Result<Bytes, ApiError> {
    let body: Bytes = body
        .collect()
        .await
        .map_err(|e| InternalError::Other(format!("Failed to buffer {direction} body: {e}")))?
        .to_bytes();

    if let Ok(body) = std::str::from_utf8(&body) {
        tracing::trace!("{} body = {:?}", direction, body);
    }

    Ok(body)
}
