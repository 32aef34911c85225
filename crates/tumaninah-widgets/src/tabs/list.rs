//! Tab list: the row that groups triggers.

use super::{expect_scope, TabsScope};
use crate::attrs::{Attributes, ARIA_LABEL, TEST_ID};
use crate::layout::{layout_row, measure_row};
use std::any::Any;
use tumaninah_core::{
    AccessibleRole, Canvas, Color, Constraints, Context, Event, LayoutResult, Rect, Size, TypeId,
    Widget,
};

const COMPONENT: &str = "TabsList";

/// Presentational container for triggers. Holds no state.
pub struct TabsList {
    children: Vec<Box<dyn Widget>>,
    attrs: Attributes,
    gap: f32,
    background: Color,
    scope: Option<TabsScope>,
    bounds: Rect,
}

impl Default for TabsList {
    fn default() -> Self {
        Self::new()
    }
}

impl TabsList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            attrs: Attributes::new(),
            gap: 4.0,
            background: Color::TRANSPARENT,
            scope: None,
            bounds: Rect::ZERO,
        }
    }

    /// Add a child widget, usually a trigger.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Set gap between children.
    #[must_use]
    pub const fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Set background color.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = color;
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

    /// Pass-through attributes.
    #[must_use]
    pub const fn attrs(&self) -> &Attributes {
        &self.attrs
    }
}

impl Widget for TabsList {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        expect_scope(self.scope.as_ref(), COMPONENT);
        measure_row(&self.children, constraints, self.gap)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        layout_row(&mut self.children, bounds, self.gap);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        expect_scope(self.scope.as_ref(), COMPONENT);
        if self.background.a > 0.0 {
            canvas.fill_rect(self.bounds, self.background);
        }
        for child in &self.children {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        expect_scope(self.scope.as_ref(), COMPONENT);
        for child in &mut self.children {
            if let Some(msg) = child.event(event) {
                return Some(msg);
            }
        }
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    fn mount(&mut self, ctx: &Context) {
        self.scope = ctx.get::<TabsScope>();
        for child in &mut self.children {
            child.mount(ctx);
        }
    }

    fn unmount(&mut self) {
        self.scope = None;
        for child in &mut self.children {
            child.unmount();
        }
    }

    fn accessible_name(&self) -> Option<&str> {
        self.attrs.label()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::TabList
    }

    fn test_id(&self) -> Option<&str> {
        self.attrs.test_id()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
