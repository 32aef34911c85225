//! Composable tabs: a root that owns the selection and sub-components that
//! read it from the enclosing scope.
//!
//! [`Tabs`] creates a [`TabsScope`] and hands it to its subtree through the
//! mount [`Context`]. [`TabsList`], [`TabsTrigger`] and [`TabsContent`] may sit
//! anywhere below it, at any depth; they capture the nearest scope when they
//! are mounted. A nested `Tabs` shadows the outer scope for its own subtree.
//!
//! When a [`TabChanged`] bubbles through a mounted root, the root mounts its
//! children again so [`ContentMode::UnmountInactive`] panels release their
//! children without waiting for the owner's next mount pass.
//!
//! # Examples
//!
//! ```
//! use tumaninah_core::{Context, Widget};
//! use tumaninah_widgets::tabs::{Tabs, TabsContent, TabsList, TabsTrigger};
//! use tumaninah_widgets::Label;
//!
//! let mut tabs = Tabs::new("home")
//!     .child(
//!         TabsList::new()
//!             .child(TabsTrigger::new("home", "Home"))
//!             .child(TabsTrigger::new("about", "About")),
//!     )
//!     .child(TabsContent::new("home").child(Label::new("Welcome")))
//!     .child(TabsContent::new("about").child(Label::new("About us")));
//!
//! tabs.mount(&Context::new());
//! tabs.scope().request_change("about");
//! assert_eq!(tabs.value(), "about");
//! ```

mod content;
mod list;
mod state;
mod trigger;

pub use content::{ContentMode, TabsContent};
pub use list::TabsList;
pub use state::{ModeKind, OnChange, TabId, TabsMode, TabsScope, TabsState};
pub use trigger::{ActivateHook, TabsTrigger};

use crate::attrs::{Attributes, ARIA_LABEL, TEST_ID};
use crate::error::TabsError;
use crate::layout::{layout_column, measure_column};
use std::any::Any;
use std::sync::Arc;
use tumaninah_core::{
    Canvas, Constraints, Context, Event, LayoutResult, Rect, Size, TypeId, Widget,
};

/// Message bubbled by a trigger when it requests a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabChanged {
    /// Identifier the trigger requested
    pub tab_id: TabId,
}

/// Root of a tabs subtree.
pub struct Tabs {
    scope: TabsScope,
    children: Vec<Box<dyn Widget>>,
    attrs: Attributes,
    spacing: f32,
    ctx: Option<Context>,
    bounds: Rect,
}

impl Tabs {
    /// Create an uncontrolled root starting at `default_value`.
    #[must_use]
    pub fn new(default_value: impl Into<TabId>) -> Self {
        Self::from_state(TabsState::uncontrolled(default_value))
    }

    /// Create a controlled root showing `value`.
    ///
    /// The owner updates the shown value with [`Tabs::set_value`] after it
    /// observes a change request.
    #[must_use]
    pub fn controlled(value: impl Into<TabId>) -> Self {
        Self::from_state(TabsState::controlled(value))
    }

    /// Create a root around an existing state.
    #[must_use]
    pub fn from_state(state: TabsState) -> Self {
        Self {
            scope: TabsScope::new(state),
            children: Vec::new(),
            attrs: Attributes::new(),
            spacing: 8.0,
            ctx: None,
            bounds: Rect::ZERO,
        }
    }

    /// Set the change callback.
    #[must_use]
    pub fn on_value_change(self, on_change: impl Fn(&TabId) + Send + Sync + 'static) -> Self {
        self.scope.set_on_change(Some(Arc::new(on_change)));
        self
    }

    /// Add a child widget.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Add a boxed child widget.
    #[must_use]
    pub fn boxed_child(mut self, widget: Box<dyn Widget>) -> Self {
        self.children.push(widget);
        self
    }

    /// Set vertical spacing between children.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set a pass-through attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn test_id(self, id: impl Into<String>) -> Self {
        self.attr(TEST_ID, id)
    }

    /// Set accessible name.
    #[must_use]
    pub fn accessible_name(self, name: impl Into<String>) -> Self {
        self.attr(ARIA_LABEL, name)
    }

    /// Handle to this root's scope.
    #[must_use]
    pub fn scope(&self) -> TabsScope {
        self.scope.clone()
    }

    /// The active identifier.
    #[must_use]
    pub fn value(&self) -> TabId {
        self.scope.read()
    }

    /// Push a new controlled value.
    pub fn set_value(&self, value: impl Into<TabId>) -> Result<(), TabsError> {
        self.scope.sync_external(Some(value.into()))
    }

    /// Pass-through attributes.
    #[must_use]
    pub const fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn mount_children(&mut self) {
        if let Some(ctx) = &self.ctx {
            for child in &mut self.children {
                child.mount(ctx);
            }
        }
    }
}

impl Widget for Tabs {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        measure_column(&self.children, constraints, self.spacing)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        layout_column(&mut self.children, bounds, self.spacing);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for child in &self.children {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let msg = self
            .children
            .iter_mut()
            .find_map(|child| child.event(event))?;
        if msg.is::<TabChanged>() {
            self.mount_children();
        }
        Some(msg)
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    fn mount(&mut self, ctx: &Context) {
        self.ctx = Some(ctx.with(self.scope.clone()));
        self.mount_children();
    }

    fn unmount(&mut self) {
        self.ctx = None;
        for child in &mut self.children {
            child.unmount();
        }
    }

    fn accessible_name(&self) -> Option<&str> {
        self.attrs.label()
    }

    fn test_id(&self) -> Option<&str> {
        self.attrs.test_id()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Unwrap the scope captured at mount inside a `Widget` entry point, which
/// cannot return an error.
fn expect_scope<'a>(scope: Option<&'a TabsScope>, component: &'static str) -> &'a TabsScope {
    match state::require(scope, component) {
        Ok(scope) => scope,
        Err(err) => panic!("{err}"),
    }
}
