use crate::renderer::traits::*;

/// Escape markup-significant characters. Everything else passes through.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Helper for rendering key and index labels.
pub struct KeyRenderer;

impl KeyRenderer {
    pub fn render_prefix(&self, key: Option<Key<'_>>) -> String {
        match key {
            None => String::new(),
            Some(Key::Index(i)) => format!(
                r#"<span class="jt-key">[{}]</span><span class="jt-punct">: </span>"#,
                i
            ),
            Some(Key::Name(name)) => format!(
                r#"<span class="jt-key">"{}"</span><span class="jt-punct">: </span>"#,
                escape_html(name)
            ),
        }
    }
}

/// Helper for single-line entries.
pub struct LeafRenderer;

impl LeafRenderer {
    /// A leaf line carrying its own label followed by `content`.
    pub fn render_leaf(
        &self,
        context: &RenderContext<'_>,
        key: Option<Key<'_>>,
        content: &str,
    ) -> String {
        format!(
            r#"<div class="jt-leaf" style="margin-left:{}">{}{}</div>"#,
            context.indent(),
            KeyRenderer.render_prefix(key),
            content
        )
    }

    /// A leaf standing in for a container that is not expanded.
    pub fn render_marker(
        &self,
        context: &RenderContext<'_>,
        key: Option<Key<'_>>,
        marker: &str,
    ) -> String {
        self.render_leaf(context, key, &format!("<em>{}</em>", marker))
    }

    /// Summary of the children cut off by the child limit.
    pub fn render_more(&self, context: &RenderContext<'_>, omitted: usize) -> String {
        let noun = if omitted == 1 { "item" } else { "items" };
        format!(
            r#"<div class="jt-leaf jt-more" style="margin-left:{}">… {} more {}</div>"#,
            context.indent(),
            omitted,
            noun
        )
    }
}
