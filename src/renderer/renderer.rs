use crate::options::RenderOptions;
use crate::renderer::components::*;
use crate::renderer::theme::stylesheet;
use crate::renderer::traits::*;
use crate::scope::{ScopeIdGenerator, UuidScopeIds};
use crate::value::{NodeId, Value};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Marker for a container already rendered earlier in the same call.
pub const CIRCULAR_MARKER: &str = "[Circular]";
/// Marker for a container below `max_depth`.
pub const DEPTH_MARKER: &str = "[…]";

/// Renders values as collapsible HTML trees.
///
/// The renderer holds no state between calls apart from its scope id
/// source, so one instance can serve any number of renders.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer<G = UuidScopeIds> {
    scope_ids: G,
}

impl TreeRenderer<UuidScopeIds> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: ScopeIdGenerator> TreeRenderer<G> {
    pub fn with_scope_ids(scope_ids: G) -> Self {
        Self { scope_ids }
    }

    pub fn scope_ids(&self) -> &G {
        &self.scope_ids
    }

    /// Render `value` as a self-contained fragment: a scoped stylesheet
    /// followed by the root element.
    pub fn render(&self, value: &Value, options: &RenderOptions) -> String {
        let scope = self.scope_ids.next_id();
        let body = self.render_body(value, options);
        let style = stylesheet(&scope);

        let mut output = String::with_capacity(style.len() + body.len() + scope.len() + 32);
        output.push_str(&style);
        output.push_str(&format!(r#"<div id="{}" class="jt">{}</div>"#, scope, body));

        debug!(
            scope = %scope,
            expand_depth = options.expand_depth,
            max_children = ?options.max_children,
            max_string_length = ?options.max_string_length,
            bytes = output.len(),
            "rendered tree"
        );
        output
    }

    /// The tree markup alone, without stylesheet or scoped wrapper.
    pub fn render_body(&self, value: &Value, options: &RenderOptions) -> String {
        let mut walk = TreeWalk::default();
        let context = RenderContext::root(options);
        let key = options.key.as_deref().map(Key::Name);
        walk.render_node(value, &context, key);
        walk.output
    }
}

#[derive(Debug, Clone, Copy)]
enum ContainerKind {
    Object,
    Array,
}

impl ContainerKind {
    fn tag(self) -> &'static str {
        match self {
            ContainerKind::Object => "{} Object",
            ContainerKind::Array => "[] Array",
        }
    }
}

/// State of one top-level render call.
#[derive(Default)]
struct TreeWalk {
    /// Every container entered so far. Never pruned, so an alias reached
    /// from a sibling also counts as visited.
    visited: HashSet<NodeId>,
    output: String,
}

impl TreeWalk {
    fn render_node(&mut self, value: &Value, context: &RenderContext<'_>, key: Option<Key<'_>>) {
        match value {
            Value::Mapping(map) => {
                if !self.enter(map.id(), context, key) {
                    return;
                }
                let entries = map.entries();
                self.render_container(
                    ContainerKind::Object,
                    entries.len(),
                    entries.iter().map(|(k, v)| (Key::Name(k.as_str()), v)),
                    context,
                    key,
                );
            }
            Value::Sequence(list) => {
                if !self.enter(list.id(), context, key) {
                    return;
                }
                let items = list.items();
                self.render_container(
                    ContainerKind::Array,
                    items.len(),
                    items.iter().enumerate().map(|(i, v)| (Key::Index(i), v)),
                    context,
                    key,
                );
            }
            Value::Primitive(primitive) => {
                let content = primitive.render(context);
                self.output
                    .push_str(&LeafRenderer.render_leaf(context, key, &content));
            }
        }
    }

    /// Record the container, or emit a marker in its place and return false.
    fn enter(&mut self, id: NodeId, context: &RenderContext<'_>, key: Option<Key<'_>>) -> bool {
        if context.is_too_deep() {
            trace!(depth = context.depth, "container below depth limit");
            self.output
                .push_str(&LeafRenderer.render_marker(context, key, DEPTH_MARKER));
            return false;
        }
        if !self.visited.insert(id) {
            trace!(?id, depth = context.depth, "container already visited");
            self.output
                .push_str(&LeafRenderer.render_marker(context, key, CIRCULAR_MARKER));
            return false;
        }
        true
    }

    fn render_container<'v, I>(
        &mut self,
        kind: ContainerKind,
        size: usize,
        children: I,
        context: &RenderContext<'_>,
        key: Option<Key<'_>>,
    ) where
        I: Iterator<Item = (Key<'v>, &'v Value)>,
    {
        let visible = context.options.max_children.clamp(size);
        let count = if visible == size {
            size.to_string()
        } else {
            format!("{}/{}", visible, size)
        };
        let open = if context.is_open() { " open" } else { "" };

        self.output.push_str(&format!(
            r#"<details class="jt-details"{} style="margin-left:{}"><summary class="jt-summary">{}{} <span class="jt-punct">({})</span></summary>"#,
            open,
            context.indent(),
            KeyRenderer.render_prefix(key),
            kind.tag(),
            count
        ));

        let child_context = context.child();
        for (child_key, child) in children.take(visible) {
            self.render_node(child, &child_context, Some(child_key));
        }

        let omitted = size - visible;
        if omitted > 0 {
            self.output
                .push_str(&LeafRenderer.render_more(&child_context, omitted));
        }

        self.output.push_str("</details>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Limit;
    use crate::scope::{MockScopeIdGenerator, SequentialScopeIds};
    use crate::value::{ListRef, MapRef};
    use serde_json::json;

    fn body(value: &Value, options: &RenderOptions) -> String {
        TreeRenderer::new().render_body(value, options)
    }

    #[test]
    fn test_primitive_root() {
        let html = body(&Value::from(7), &RenderOptions::default());
        assert_eq!(
            html,
            r#"<div class="jt-leaf" style="margin-left:0rem"><span class="jt-num">7</span></div>"#
        );
    }

    #[test]
    fn test_primitive_root_with_key() {
        let options = RenderOptions::default().with_key("answer");
        let html = body(&Value::from(true), &options);
        assert_eq!(
            html,
            r#"<div class="jt-leaf" style="margin-left:0rem"><span class="jt-key">"answer"</span><span class="jt-punct">: </span><span class="jt-bool">true</span></div>"#
        );
    }

    #[test]
    fn test_empty_containers() {
        let options = RenderOptions::default();
        assert_eq!(
            body(&Value::map(), &options),
            r#"<details class="jt-details" open style="margin-left:0rem"><summary class="jt-summary">{} Object <span class="jt-punct">(0)</span></summary></details>"#
        );
        assert_eq!(
            body(&Value::list(), &options.with_expand_depth(0)),
            r#"<details class="jt-details" style="margin-left:0rem"><summary class="jt-summary">[] Array <span class="jt-punct">(0)</span></summary></details>"#
        );
    }

    #[test]
    fn test_child_limit_header_and_summary() {
        let value = Value::from(json!([1, 2, 3, 4, 5]));
        let options = RenderOptions::default().with_max_children(2);
        let html = body(&value, &options);

        assert!(html.contains(r#"<span class="jt-punct">(2/5)</span>"#));
        assert!(html.contains("[1]</span>"));
        assert!(!html.contains("[2]</span>"));
        assert!(html.contains(
            r#"<div class="jt-leaf jt-more" style="margin-left:0.5rem">… 3 more items</div>"#
        ));
    }

    #[test]
    fn test_zero_child_limit() {
        let value = Value::from(json!({"a": 1}));
        let options = RenderOptions::default().with_max_children(0);
        let html = body(&value, &options);

        assert!(html.contains("(0/1)"));
        assert!(!html.contains("jt-key"));
        assert!(html.contains("… 1 more item</div>"));
    }

    #[test]
    fn test_self_referencing_list() {
        let list = ListRef::new();
        list.push(1);
        list.push(list.clone());
        let html = body(&Value::Sequence(list.clone()), &RenderOptions::default());
        list.clear();

        assert_eq!(html.matches("<details").count(), 1);
        assert!(html.contains(
            r#"<span class="jt-key">[1]</span><span class="jt-punct">: </span><em>[Circular]</em>"#
        ));
    }

    #[test]
    fn test_mutually_referencing_maps() {
        let a = MapRef::new();
        let b = MapRef::new();
        a.insert("b", b.clone());
        b.insert("a", a.clone());
        let html = body(&Value::Mapping(a.clone()), &RenderOptions::default());
        a.clear();
        b.clear();

        assert_eq!(html.matches("<details").count(), 2);
        assert_eq!(html.matches(CIRCULAR_MARKER).count(), 1);
    }

    #[test]
    fn test_shared_sibling_reported_as_visited() {
        let shared: ListRef = vec![1].into_iter().collect();
        let root: MapRef = vec![("first", shared.clone()), ("second", shared)]
            .into_iter()
            .collect();
        let html = body(&Value::Mapping(root), &RenderOptions::default());

        assert_eq!(html.matches("[] Array").count(), 1);
        assert!(html.contains(
            r#"<span class="jt-key">"second"</span><span class="jt-punct">: </span><em>[Circular]</em>"#
        ));
    }

    #[test]
    fn test_depth_limit() {
        let value = Value::from(json!({"a": {"b": {"c": 1}}}));
        let options = RenderOptions::default().with_max_depth(Limit::AtMost(1));
        let html = body(&value, &options);

        assert_eq!(html.matches("<details").count(), 2);
        assert!(html.contains(&format!("<em>{}</em>", DEPTH_MARKER)));
        assert!(!html.contains(r#""c""#));
    }

    #[test]
    fn test_render_wraps_body_in_scope() {
        let renderer = TreeRenderer::with_scope_ids(SequentialScopeIds::new("t"));
        let html = renderer.render(&Value::from(json!([])), &RenderOptions::default());

        assert!(html.contains("#t-0 .jt-key"));
        assert!(html.contains(r#"<div id="t-0" class="jt"><details"#));
        assert!(html.ends_with("</details></div>"));
    }

    #[test]
    fn test_one_scope_id_per_render() {
        let mut ids = MockScopeIdGenerator::new();
        ids.expect_next_id()
            .times(1)
            .returning(|| "mocked".to_string());

        let renderer = TreeRenderer::with_scope_ids(ids);
        let value = Value::from(json!({"a": [1, {"b": 2}]}));
        let html = renderer.render(&value, &RenderOptions::default());
        assert!(html.contains(r#"<div id="mocked" class="jt">"#));
    }
}
