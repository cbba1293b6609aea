use crate::options::RenderOptions;
use crate::renderer::TreeRenderer;
use crate::scope::{ScopeIdGenerator, UuidScopeIds};
use crate::value::Value;
use std::cell::OnceCell;
use std::fmt;

/// A value bundled with its render options, rendered on first access.
///
/// This is the object a document viewer holds on to: build it once, ask
/// for the markup whenever the view needs it.
///
/// ```
/// use jsontree::{JsonTree, RenderOptions};
/// use serde_json::json;
///
/// let tree = JsonTree::new(json!({"a": 1, "b": [1, 2, 3]}), RenderOptions::default());
/// assert!(tree.rendered().contains("{} Object"));
/// ```
pub struct JsonTree<G: ScopeIdGenerator = UuidScopeIds> {
    data: Value,
    options: RenderOptions,
    renderer: TreeRenderer<G>,
    rendered: OnceCell<String>,
}

impl JsonTree<UuidScopeIds> {
    pub fn new(data: impl Into<Value>, options: RenderOptions) -> Self {
        Self::with_renderer(data, options, TreeRenderer::new())
    }
}

impl<G: ScopeIdGenerator> JsonTree<G> {
    pub fn with_renderer(
        data: impl Into<Value>,
        options: RenderOptions,
        renderer: TreeRenderer<G>,
    ) -> Self {
        Self {
            data: data.into(),
            options,
            renderer,
            rendered: OnceCell::new(),
        }
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The rendered markup. Computed once, then cached.
    pub fn rendered(&self) -> &str {
        self.rendered
            .get_or_init(|| self.renderer.render(&self.data, &self.options))
    }

    /// Alias of [`JsonTree::rendered`] for rich-display integrations.
    pub fn repr_html(&self) -> &str {
        self.rendered()
    }

    pub fn into_html(self) -> String {
        match self.rendered.into_inner() {
            Some(html) => html,
            None => self.renderer.render(&self.data, &self.options),
        }
    }
}

impl<G: ScopeIdGenerator> fmt::Display for JsonTree<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rendered())
    }
}

impl<G: ScopeIdGenerator> fmt::Debug for JsonTree<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonTree")
            .field("data", &self.data)
            .field("options", &self.options)
            .field("rendered", &self.rendered.get().is_some())
            .finish()
    }
}
