//! Tab content: a panel shown only while its identifier is active.

use super::{expect_scope, state, TabId, TabsScope};
use crate::attrs::{Attributes, ARIA_LABEL, TEST_ID};
use crate::error::TabsError;
use crate::layout::{layout_column, measure_column};
use serde::{Deserialize, Serialize};
use std::any::Any;
use tracing::trace;
use tumaninah_core::{
    AccessibleRole, Canvas, Constraints, Context, Event, LayoutResult, Rect, Size, TypeId, Widget,
};

const COMPONENT: &str = "TabsContent";

/// What happens to the children of an inactive panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentMode {
    /// Children stay mounted and are hidden in place.
    #[default]
    KeepMounted,
    /// Children are unmounted on the first mount pass after deactivation
    /// and mounted again on the first one after reactivation. A [`Tabs`]
    /// root runs that pass as soon as a trigger bubbles a change.
    ///
    /// [`Tabs`]: super::Tabs
    UnmountInactive,
}

/// Conditional panel bound to one tab identifier.
///
/// An inactive panel measures to zero, paints nothing, receives no events
/// and exposes no children to tree traversal.
pub struct TabsContent {
    value: TabId,
    mode: ContentMode,
    children: Vec<Box<dyn Widget>>,
    attrs: Attributes,
    gap: f32,
    scope: Option<TabsScope>,
    children_mounted: bool,
    bounds: Rect,
}

impl TabsContent {
    /// Create a panel for `value`.
    #[must_use]
    pub fn new(value: impl Into<TabId>) -> Self {
        Self {
            value: value.into(),
            mode: ContentMode::default(),
            children: Vec::new(),
            attrs: Attributes::new(),
            gap: 8.0,
            scope: None,
            children_mounted: false,
            bounds: Rect::ZERO,
        }
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

    /// Set what happens to children while inactive.
    #[must_use]
    pub const fn mode(mut self, mode: ContentMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set vertical gap between children.
    #[must_use]
    pub const fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
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

    /// The identifier this panel is bound to.
    #[must_use]
    pub const fn value(&self) -> &TabId {
        &self.value
    }

    /// The configured inactive strategy.
    #[must_use]
    pub const fn content_mode(&self) -> ContentMode {
        self.mode
    }

    /// Whether this panel's tab is the active one.
    pub fn is_active(&self) -> Result<bool, TabsError> {
        Ok(state::require(self.scope.as_ref(), COMPONENT)?.is_active(&self.value))
    }

    /// Whether the children are currently mounted.
    #[must_use]
    pub const fn children_mounted(&self) -> bool {
        self.children_mounted
    }

    fn shows_children(&self) -> bool {
        self.scope
            .as_ref()
            .is_some_and(|scope| scope.is_active(&self.value))
    }

    fn active_or_panic(&self) -> bool {
        expect_scope(self.scope.as_ref(), COMPONENT).is_active(&self.value)
    }

    fn unmount_children(&mut self) {
        if self.children_mounted {
            trace!(tab = %self.value, "unmounting inactive panel");
            for child in &mut self.children {
                child.unmount();
            }
            self.children_mounted = false;
        }
    }
}

impl Widget for TabsContent {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        if !self.active_or_panic() {
            return Size::ZERO;
        }
        measure_column(&self.children, constraints, self.gap)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        if !self.shows_children() {
            return LayoutResult { size: Size::ZERO };
        }
        layout_column(&mut self.children, bounds, self.gap);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if !self.active_or_panic() {
            return;
        }
        for child in &self.children {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if !self.active_or_panic() {
            return None;
        }
        for child in &mut self.children {
            if let Some(msg) = child.event(event) {
                return Some(msg);
            }
        }
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        if self.shows_children() {
            &self.children
        } else {
            &[]
        }
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        if self.shows_children() {
            &mut self.children
        } else {
            &mut []
        }
    }

    fn mount(&mut self, ctx: &Context) {
        self.scope = ctx.get::<TabsScope>();
        let Some(scope) = &self.scope else {
            return;
        };

        if scope.is_active(&self.value) || self.mode == ContentMode::KeepMounted {
            for child in &mut self.children {
                child.mount(ctx);
            }
            self.children_mounted = true;
        } else {
            self.unmount_children();
        }
    }

    fn unmount(&mut self) {
        self.unmount_children();
        self.scope = None;
    }

    fn accessible_name(&self) -> Option<&str> {
        self.attrs.label()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::TabPanel
    }

    fn test_id(&self) -> Option<&str> {
        self.attrs.test_id()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::TabsState;
    use crate::Label;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tumaninah_core::{Point, RecordingCanvas};

    #[derive(Default, Clone)]
    struct Lifecycle {
        mounts: Arc<AtomicUsize>,
        unmounts: Arc<AtomicUsize>,
    }

    struct Tracked {
        lifecycle: Lifecycle,
    }

    impl Widget for Tracked {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }
        fn measure(&self, c: Constraints) -> Size {
            c.constrain(Size::new(50.0, 20.0))
        }
        fn layout(&mut self, b: Rect) -> LayoutResult {
            LayoutResult { size: b.size() }
        }
        fn paint(&self, _: &mut dyn Canvas) {}
        fn event(&mut self, _: &Event) -> Option<Box<dyn Any + Send>> {
            Some(Box::new("tracked"))
        }
        fn children(&self) -> &[Box<dyn Widget>] {
            &[]
        }
        fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
            &mut []
        }
        fn mount(&mut self, _: &Context) {
            self.lifecycle.mounts.fetch_add(1, Ordering::SeqCst);
        }
        fn unmount(&mut self) {
            self.lifecycle.unmounts.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn scope(active: &str) -> (TabsScope, Context) {
        let scope = TabsScope::new(TabsState::uncontrolled(active));
        let ctx = Context::new().with(scope.clone());
        (scope, ctx)
    }

    fn loose() -> Constraints {
        Constraints::loose(Size::new(300.0, 300.0))
    }

    #[test]
    fn test_active_content_renders_children() {
        let (_, ctx) = scope("home");
        let mut content = TabsContent::new("home")
            .test_id("panel-home")
            .child(Label::new("Welcome"));
        content.mount(&ctx);
        content.layout(Rect::new(0.0, 0.0, 300.0, 300.0));

        let mut canvas = RecordingCanvas::new();
        content.paint(&mut canvas);
        assert_eq!(canvas.texts(), vec!["Welcome"]);
        assert_eq!(content.children().len(), 1);
        assert_eq!(content.is_active(), Ok(true));
        assert_eq!(content.accessible_role(), AccessibleRole::TabPanel);
        assert_eq!(Widget::test_id(&content), Some("panel-home"));
    }

    #[test]
    fn test_inactive_content_is_inert() {
        let (_, ctx) = scope("home");
        let lifecycle = Lifecycle::default();
        let mut content = TabsContent::new("about").child(Tracked {
            lifecycle: lifecycle.clone(),
        });
        content.mount(&ctx);

        assert_eq!(content.measure(loose()), Size::ZERO);
        assert_eq!(
            content.layout(Rect::new(0.0, 0.0, 300.0, 300.0)).size,
            Size::ZERO
        );
        let mut canvas = RecordingCanvas::new();
        content.paint(&mut canvas);
        assert!(canvas.is_empty());
        assert!(content.event(&Event::click(Point::new(1.0, 1.0))).is_none());
        assert!(content.children().is_empty());
        assert!(content.children_mut().is_empty());
        assert!(!content.is_focusable());
    }

    #[test]
    fn test_keep_mounted_hides_in_place() {
        let (scope, ctx) = scope("home");
        let lifecycle = Lifecycle::default();
        let mut content = TabsContent::new("home").child(Tracked {
            lifecycle: lifecycle.clone(),
        });
        content.mount(&ctx);

        scope.request_change("about");
        content.mount(&ctx);
        assert!(content.children_mounted());
        assert_eq!(lifecycle.unmounts.load(Ordering::SeqCst), 0);
        assert_eq!(content.measure(loose()), Size::ZERO);

        scope.request_change("home");
        content.mount(&ctx);
        assert!(content.event(&Event::FocusIn).is_some());
    }

    #[test]
    fn test_unmount_inactive_cycles_children() {
        let (scope, ctx) = scope("home");
        let lifecycle = Lifecycle::default();
        let mut content = TabsContent::new("home")
            .mode(ContentMode::UnmountInactive)
            .child(Tracked {
                lifecycle: lifecycle.clone(),
            });

        content.mount(&ctx);
        assert_eq!(lifecycle.mounts.load(Ordering::SeqCst), 1);

        scope.request_change("about");
        content.mount(&ctx);
        content.mount(&ctx);
        assert!(!content.children_mounted());
        assert_eq!(lifecycle.unmounts.load(Ordering::SeqCst), 1);

        scope.request_change("home");
        content.mount(&ctx);
        assert!(content.children_mounted());
        assert_eq!(lifecycle.mounts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unmount_inactive_starts_unmounted() {
        let (_, ctx) = scope("home");
        let lifecycle = Lifecycle::default();
        let mut content = TabsContent::new("about")
            .mode(ContentMode::UnmountInactive)
            .child(Tracked {
                lifecycle: lifecycle.clone(),
            });
        content.mount(&ctx);
        assert_eq!(lifecycle.mounts.load(Ordering::SeqCst), 0);
        assert_eq!(lifecycle.unmounts.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unmount_releases_children_once() {
        let (_, ctx) = scope("home");
        let lifecycle = Lifecycle::default();
        let mut content = TabsContent::new("home").child(Tracked {
            lifecycle: lifecycle.clone(),
        });
        content.mount(&ctx);
        content.unmount();
        content.unmount();
        assert_eq!(lifecycle.unmounts.load(Ordering::SeqCst), 1);
        assert!(content.is_active().is_err());
    }

    #[test]
    #[should_panic(expected = "TabsContent must be used within <Tabs>")]
    fn test_event_outside_scope_panics() {
        let mut content = TabsContent::new("home");
        content.mount(&Context::new());
        content.event(&Event::FocusIn);
    }
}
