//! MiniJinja Page Renderer
//!
//! Templates are compiled into the binary. HTML auto-escaping is on for
//! every `.html` template.

use minijinja::{Environment, ErrorKind};

use crate::domain::gateways::{PageRenderer, PageView};
use crate::shared::errors::RenderError;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../../templates/base.html")),
    (
        "registration/login.html",
        include_str!("../../../templates/registration/login.html"),
    ),
    ("taxi/index.html", include_str!("../../../templates/taxi/index.html")),
    (
        "taxi/manufacturer_list.html",
        include_str!("../../../templates/taxi/manufacturer_list.html"),
    ),
    (
        "taxi/driver_list.html",
        include_str!("../../../templates/taxi/driver_list.html"),
    ),
    (
        "taxi/driver_form.html",
        include_str!("../../../templates/taxi/driver_form.html"),
    ),
    ("taxi/car_list.html", include_str!("../../../templates/taxi/car_list.html")),
];

/// PageRenderer backed by a MiniJinja environment
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Load and compile every bundled template
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Rendering` if a template has a syntax error.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| RenderError::Rendering(format!("{name}: {e}")))?;
        }
        Ok(Self { env })
    }
}

impl PageRenderer for MiniJinjaRenderer {
    fn render(&self, view: &PageView) -> Result<String, RenderError> {
        let template = self.env.get_template(view.template).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                RenderError::TemplateNotFound(view.template.to_string())
            } else {
                RenderError::Rendering(e.to_string())
            }
        })?;

        template
            .render(&view.context)
            .map_err(|e| RenderError::Rendering(format!("{}: {e}", view.template)))
    }
}
