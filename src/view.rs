use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Model passed to the renderer: view attribute name to rendered value.
pub type Model = BTreeMap<String, String>;

pub type SharedRenderer = Arc<dyn ViewRenderer>;

/// Resolves a view name to markup with the model substituted in.
///
/// The handlers only know this seam; what sits behind it (a directory of
/// template files here) is the hosting application's choice.
#[async_trait]
pub trait ViewRenderer: Send + Sync {
    async fn render(&self, view_name: &str, model: &Model) -> Result<String>;
}

/// Renderer over a directory of `<view name>.html` files. Every `{{key}}`
/// occurrence is replaced with the model value for `key`.
pub struct DirRenderer {
    template_dir: PathBuf,
}

impl DirRenderer {
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
        }
    }
}

#[async_trait]
impl ViewRenderer for DirRenderer {
    async fn render(&self, view_name: &str, model: &Model) -> Result<String> {
        let path = self.template_dir.join(format!("{}.html", view_name));
        let mut rendered = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| anyhow!("no template for view {}: {}", view_name, e))?;
        for (key, value) in model {
            rendered = rendered.replace(&format!("{{{{{}}}}}", key), value);
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(entries: &[(&str, &str)]) -> Model {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn substitutes_model_entries() {
        let dir = std::env::temp_dir().join("body-echo-view-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("greet.html"), "<p>{{data}} and {{data}}</p>")
            .await
            .unwrap();

        let renderer = DirRenderer::new(&dir);
        let html = renderer
            .render("greet", &model(&[("data", "hi")]))
            .await
            .unwrap();
        assert_eq!(html, "<p>hi and hi</p>");
    }

    #[tokio::test]
    async fn unknown_view_is_an_error() {
        let renderer = DirRenderer::new("does-not-exist");
        let err = renderer.render("nope", &Model::new()).await.unwrap_err();
        assert!(err.to_string().contains("no template for view nope"));
    }

    #[tokio::test]
    async fn leaves_unmatched_placeholders_alone() {
        let dir = std::env::temp_dir().join("body-echo-view-test-2");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("greet.html"), "<p>{{other}}</p>")
            .await
            .unwrap();

        let renderer = DirRenderer::new(&dir);
        let html = renderer
            .render("greet", &model(&[("data", "hi")]))
            .await
            .unwrap();
        assert_eq!(html, "<p>{{other}}</p>");
    }
}
