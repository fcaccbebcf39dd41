use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::{
        StatusCode,
        header::{CONTENT_LENGTH, CONTENT_TYPE},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::common::server_error::ServerError;

pub async fn request_mw(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();

    let mut response = next.run(req).await;

    // The router answers wrong methods itself with an empty body
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        response = method_not_allowed(response);
    }

    info!(
        "{} {} -> {} ({} ms)",
        method,
        uri,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );

    response
}

/// Swaps the body for the JSON envelope, keeping `Allow` and CORS headers.
fn method_not_allowed(original: Response) -> Response {
    let (parts, _) = original.into_parts();
    let mut response = ServerError::MethodNotAllowed.into_response();

    for (name, value) in parts.headers.iter() {
        if *name != CONTENT_TYPE && *name != CONTENT_LENGTH {
            response.headers_mut().append(name.clone(), value.clone());
        }
    }

    response
}
