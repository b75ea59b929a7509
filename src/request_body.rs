//! POST handlers that read the request body, in the framework's different
//! styles: raw request, chunked stream, whole-body bytes, typed extractors.
//! Every variant logs the decoded body and answers with the fixed reply.

use axum::body::{Body, Bytes, Full};
use axum::extract::BodyStream;
use axum::http::{Request, Response, StatusCode};
use axum::Json;
use bytes::BytesMut;
use futures::StreamExt;
use tracing::info;

use crate::error::AppError;
use crate::hello_data::HelloData;
use crate::strings::OK_REPLY;

/// Raw request in, manually built response out.
pub async fn request_body_string_v1(
    request: Request<Body>,
) -> Result<Response<Full<Bytes>>, AppError> {
    let body = hyper::body::to_bytes(request.into_body()).await?;
    let message_body = String::from_utf8(body.to_vec())?;
    info!("message body: {}", message_body);

    let response = Response::builder()
        .status(StatusCode::OK)
        .body(Full::new(Bytes::from(OK_REPLY)))?;
    Ok(response)
}

/// Consumes the body chunk by chunk before replying.
pub async fn request_body_string_v2(mut stream: BodyStream) -> Result<&'static str, AppError> {
    let mut buffer = BytesMut::new();
    while let Some(chunk) = stream.next().await {
        buffer.extend_from_slice(&chunk?);
    }
    let message_body = String::from_utf8(buffer.to_vec())?;
    info!("message body: {}", message_body);
    Ok(OK_REPLY)
}

/// Whole body as `Bytes`, reply as a status/body tuple.
pub async fn request_body_string_v3(body: Bytes) -> Result<(StatusCode, &'static str), AppError> {
    let message_body = String::from_utf8(body.to_vec())?;
    info!("message body: {}", message_body);
    Ok((StatusCode::OK, OK_REPLY))
}

/// The extractor already decoded the body for us.
pub async fn request_body_string_v4(message_body: String) -> &'static str {
    info!("message body: {}", message_body);
    OK_REPLY
}

/// Text body in, explicit `serde_json` parse. A body that is not valid JSON
/// for [`HelloData`] propagates as an error.
pub async fn request_body_json_v1(message_body: String) -> Result<&'static str, AppError> {
    info!("message body: {}", message_body);
    let data: HelloData = serde_json::from_str(&message_body)?;
    info!("username={}, age={}", data.username, data.age);
    Ok(OK_REPLY)
}

/// Same contract, but the `Json` extractor does the parsing (and rejects
/// malformed bodies with a client error before we run).
pub async fn request_body_json_v2(Json(data): Json<HelloData>) -> &'static str {
    info!("username={}, age={}", data.username, data.age);
    OK_REPLY
}

/// Echoes the parsed record back as JSON.
pub async fn request_body_json_v3(Json(data): Json<HelloData>) -> Json<HelloData> {
    info!("username={}, age={}", data.username, data.age);
    Json(data)
}
