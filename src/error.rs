use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Wrapper that lets handlers bubble any `anyhow`-compatible failure up to
/// the framework, where it becomes a plain 500 with the error text.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
