//! Context propagation down the widget tree.
//!
//! A [`Context`] is a type-keyed map of shared handles. A widget that wants to
//! expose something to its descendants (a tabs scope, an action registry)
//! derives a child context with [`Context::with`] and mounts its children with
//! it; descendants look the handle up with [`Context::get`] at mount time.
//! Inserting a value of a type that is already present shadows the outer value
//! for that subtree only.
//!
//! # Examples
//!
//! ```
//! use tumaninah_core::Context;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Locale(&'static str);
//!
//! let root = Context::new().with(Locale("ar"));
//! let inner = root.with(Locale("en"));
//!
//! assert_eq!(root.get::<Locale>(), Some(Locale("ar")));
//! assert_eq!(inner.get::<Locale>(), Some(Locale("en")));
//! assert_eq!(Context::new().get::<Locale>(), None);
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Type-keyed map of values shared with a widget subtree.
#[derive(Clone, Default)]
pub struct Context {
    entries: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a child context that additionally carries `value`.
    #[must_use]
    pub fn with<T: Any + Send + Sync>(&self, value: T) -> Self {
        let mut child = self.clone();
        child.provide(value);
        child
    }

    /// Insert `value`, replacing any value of the same type.
    pub fn provide<T: Any + Send + Sync>(&mut self, value: T) {
        self.entries.insert(TypeId::of::<T>(), Arc::new(value));
    }

    /// Look up the nearest value of type `T`.
    #[must_use]
    pub fn get<T: Any + Send + Sync + Clone>(&self) -> Option<T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<T>())
            .cloned()
    }

    /// Check whether a value of type `T` is present.
    #[must_use]
    pub fn contains<T: Any>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Number of distinct types provided.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been provided.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Depth(u32);

    #[derive(Debug, Clone, PartialEq)]
    struct Name(String);

    #[test]
    fn test_empty_context() {
        let ctx = Context::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.get::<Depth>(), None);
        assert!(!ctx.contains::<Depth>());
    }

    #[test]
    fn test_with_does_not_touch_parent() {
        let parent = Context::new().with(Depth(1));
        let child = parent.with(Name("tabs".into()));

        assert_eq!(parent.len(), 1);
        assert_eq!(child.len(), 2);
        assert_eq!(child.get::<Depth>(), Some(Depth(1)));
        assert!(!parent.contains::<Name>());
    }

    #[test]
    fn test_inner_value_shadows_outer() {
        let outer = Context::new().with(Depth(1));
        let inner = outer.with(Depth(2));
        assert_eq!(outer.get::<Depth>(), Some(Depth(1)));
        assert_eq!(inner.get::<Depth>(), Some(Depth(2)));
        assert_eq!(inner.len(), 1);
    }

    #[test]
    fn test_provide_in_place() {
        let mut ctx = Context::new();
        ctx.provide(Depth(7));
        assert_eq!(ctx.get::<Depth>(), Some(Depth(7)));
    }

    #[test]
    fn test_debug_reports_entry_count() {
        let ctx = Context::new().with(Depth(1));
        assert_eq!(format!("{ctx:?}"), "Context { entries: 1 }");
    }
}
