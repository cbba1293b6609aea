//! Scope identifiers.
//!
//! Every rendered tree carries an id that namespaces its stylesheet and
//! root element, so several trees can live on one page. The id source is
//! injected into [`TreeRenderer`](crate::TreeRenderer) so tests can use
//! predictable ids.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh scope identifiers.
///
/// Each call must return an id that no earlier call returned. Ids are used
/// verbatim as an HTML `id` and a CSS id selector.
#[cfg_attr(test, mockall::automock)]
pub trait ScopeIdGenerator {
    fn next_id(&self) -> String;
}

/// Random ids of the form `jt-<32 hex digits>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidScopeIds;

impl ScopeIdGenerator for UuidScopeIds {
    fn next_id(&self) -> String {
        format!("jt-{}", Uuid::new_v4().simple())
    }
}

/// Counter-based ids of the form `<prefix>-<n>`, starting at 0.
#[derive(Debug)]
pub struct SequentialScopeIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialScopeIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialScopeIds {
    fn default() -> Self {
        Self::new("jt")
    }
}

impl ScopeIdGenerator for SequentialScopeIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

impl<G: ScopeIdGenerator + ?Sized> ScopeIdGenerator for &G {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

impl<G: ScopeIdGenerator + ?Sized> ScopeIdGenerator for Box<G> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}
