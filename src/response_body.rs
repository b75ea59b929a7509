//! GET handlers that write the response body, again one per framework
//! style: manual response construction, status/body tuple, bare string,
//! and JSON with dynamic or type-fixed status.

use axum::body::{Bytes, Full};
use axum::http::{Response, StatusCode};
use axum::Json;

use crate::error::AppError;
use crate::hello_data::HelloData;
use crate::strings::OK_REPLY;

pub async fn response_body_string_v1() -> Result<Response<Full<Bytes>>, AppError> {
    let response = Response::builder()
        .status(StatusCode::OK)
        .body(Full::new(Bytes::from(OK_REPLY)))?;
    Ok(response)
}

pub async fn response_body_string_v2() -> (StatusCode, &'static str) {
    (StatusCode::OK, OK_REPLY)
}

pub async fn response_body_string_v3() -> &'static str {
    OK_REPLY
}

/// Status picked at runtime; it happens to always be 200 here, but the
/// return shape permits varying it per request.
pub async fn response_body_json_v1() -> (StatusCode, Json<HelloData>) {
    (StatusCode::OK, Json(HelloData::demo()))
}

/// Status fixed by the return type; cannot vary per request.
pub async fn response_body_json_v2() -> Json<HelloData> {
    Json(HelloData::demo())
}
