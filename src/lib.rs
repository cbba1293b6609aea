//! # jsontree
//!
//! Render nested maps, sequences and scalars as a collapsible HTML tree for
//! embedding in a document viewer.
//!
//! ```
//! use jsontree::{render, RenderOptions, Value};
//! use serde_json::json;
//!
//! let value = Value::from(json!({"a": 1, "b": [1, 2, 3]}));
//! let html = render(&value, &RenderOptions::default());
//! assert!(html.contains("[] Array"));
//! ```
//!
//! Containers are shared handles, so a structure can refer to itself. Such
//! a container is rendered once; every later encounter in the same render
//! shows a `[Circular]` marker.

pub mod options;
pub mod page;
pub mod renderer;
pub mod scope;
pub mod tree;
pub mod value;

pub use options::{Limit, RenderOptions};
pub use page::wrap_page;
pub use renderer::{escape_html, TreeRenderer, CIRCULAR_MARKER, DEPTH_MARKER};
pub use scope::{ScopeIdGenerator, SequentialScopeIds, UuidScopeIds};
pub use tree::JsonTree;
pub use value::{ListRef, MapRef, NodeId, Primitive, Value};

/// Render with a fresh random scope id.
pub fn render(value: &Value, options: &RenderOptions) -> String {
    TreeRenderer::new().render(value, options)
}

/// Render a JSON document with a fresh random scope id.
pub fn render_json(json: &serde_json::Value, options: &RenderOptions) -> String {
    render(&Value::from(json), options)
}
