//! Handlers that answer with a server-rendered view instead of writing the
//! body themselves. The renderer arrives as an injected extension.

use axum::body::Body;
use axum::extract::Extension;
use axum::http::Request;
use axum::response::Html;

use crate::error::AppError;
use crate::strings::{DATA_KEY, HELLO_VIEW};
use crate::view::{Model, SharedRenderer};

/// View name plus the model it is rendered with.
#[derive(Debug, Clone)]
pub struct ModelAndView {
    view_name: String,
    model: Model,
}

impl ModelAndView {
    pub fn new(view_name: impl Into<String>) -> Self {
        Self {
            view_name: view_name.into(),
            model: Model::new(),
        }
    }

    pub fn add_object(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.model.insert(key.into(), value.into());
        self
    }

    pub fn view_name(&self) -> &str {
        &self.view_name
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}

/// Explicit [`ModelAndView`] value.
pub async fn response_view_v1(
    Extension(views): Extension<SharedRenderer>,
) -> Result<Html<String>, AppError> {
    let mav = ModelAndView::new(HELLO_VIEW).add_object(DATA_KEY, "response-view-v1");
    let html = views.render(mav.view_name(), mav.model()).await?;
    Ok(Html(html))
}

/// Mutate a model, name the view separately.
pub async fn response_view_v2(
    Extension(views): Extension<SharedRenderer>,
) -> Result<Html<String>, AppError> {
    let mut model = Model::new();
    model.insert(DATA_KEY.to_string(), "response-view-v2".to_string());
    let html = views.render(HELLO_VIEW, &model).await?;
    Ok(Html(html))
}

/// The request path doubles as the view name; the model carries the path
/// itself as its data entry.
pub async fn response_view_v3(
    Extension(views): Extension<SharedRenderer>,
    request: Request<Body>,
) -> Result<Html<String>, AppError> {
    let path = request.uri().path().to_string();
    let view_name = path.trim_start_matches('/').to_string();
    let mut model = Model::new();
    model.insert(DATA_KEY.to_string(), path);
    let html = views.render(&view_name, &model).await?;
    Ok(Html(html))
}
