//! Page Renderer Gateway
//!
//! Handlers describe a page as a template name plus a context; turning that
//! into HTML is the renderer's job.

use serde_json::Value;

use crate::shared::errors::RenderError;

/// A page ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub template: &'static str,
    pub context: Value,
}

impl PageView {
    #[must_use]
    pub fn new(template: &'static str, context: Value) -> Self {
        Self { template, context }
    }

    /// Look up a top-level context entry
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }
}

pub trait PageRenderer: Send + Sync {
    /// Render the page into an HTML document
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the template is unknown or fails to render.
    fn render(&self, view: &PageView) -> Result<String, RenderError>;
}
