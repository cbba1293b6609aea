use crate::options::RenderOptions;

/// Position of one node in the walk.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Nesting level, the root is 0. Drives indentation.
    pub depth: usize,
    /// Remaining levels that start open.
    pub expand: usize,
    pub options: &'a RenderOptions,
}

impl<'a> RenderContext<'a> {
    pub fn root(options: &'a RenderOptions) -> Self {
        Self {
            depth: 0,
            expand: options.expand_depth,
            options,
        }
    }

    /// Context for the children of the node at `self`.
    pub fn child(&self) -> Self {
        Self {
            depth: self.depth + 1,
            expand: self.expand.saturating_sub(1),
            options: self.options,
        }
    }

    pub fn is_open(&self) -> bool {
        self.expand > 0
    }

    /// Whether a container at this depth is past the configured ceiling.
    pub fn is_too_deep(&self) -> bool {
        self.options.max_depth.is_exceeded_by(self.depth)
    }

    pub fn indent(&self) -> String {
        IndentationHelper::margin_for_depth(self.depth)
    }
}

/// Label a child carries at the start of its own line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Name(&'a str),
    Index(usize),
}

/// Core rendering trait for leaf values.
pub trait Render {
    fn render(&self, context: &RenderContext<'_>) -> String;
}

/// Horizontal offset per nesting level.
pub struct IndentationHelper;

impl IndentationHelper {
    /// `depth × 0.5rem`, formatted without floating point.
    pub fn margin_for_depth(depth: usize) -> String {
        if depth % 2 == 0 {
            format!("{}rem", depth / 2)
        } else {
            format!("{}.5rem", depth / 2)
        }
    }
}
