//! HTML rendering of an [`InventoryView`].
//!
//! The page is re-rendered in full after every interaction; there is no
//! client-side state to reconcile.

use minijinja::Environment;

use crate::models::InventoryView;

const PAGE_TEMPLATE: &str = "page.html";
const PAGE_SOURCE: &str = include_str!("page.html");

#[derive(Debug, thiserror::Error)]
#[error("Failed to render page: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Holds the compiled page template. Templates named `*.html` are auto-escaped,
/// so item names are always inserted as text.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE, PAGE_SOURCE)?;
        Ok(Self { env })
    }

    pub fn render(&self, view: &InventoryView) -> Result<String, RenderError> {
        let template = self.env.get_template(PAGE_TEMPLATE)?;
        Ok(template.render(view)?)
    }
}
