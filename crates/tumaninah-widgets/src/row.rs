//! Row widget for horizontal layout.

use crate::layout::{layout_row, measure_row};
use std::any::Any;
use tumaninah_core::{
    AccessibleRole, Canvas, Color, Constraints, Event, LayoutResult, Rect, Size, TypeId, Widget,
};

/// Children placed left to right at their measured widths.
pub struct Row {
    /// Gap between children
    gap: f32,
    /// Inner padding
    padding: f32,
    /// Optional background fill
    background: Option<Color>,
    /// Accessible role
    role: AccessibleRole,
    /// Children widgets
    children: Vec<Box<dyn Widget>>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    /// Create a new empty row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gap: 0.0,
            padding: 0.0,
            background: None,
            role: AccessibleRole::Generic,
            children: Vec::new(),
            test_id_value: None,
            bounds: Rect::ZERO,
        }
    }

    /// Set gap between children.
    #[must_use]
    pub const fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Set inner padding.
    #[must_use]
    pub const fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Fill the row's bounds before painting children.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the accessible role.
    #[must_use]
    pub const fn role(mut self, role: AccessibleRole) -> Self {
        self.role = role;
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

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }
}

impl Widget for Row {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        if self.children.is_empty() {
            return Size::ZERO;
        }
        let inner = Constraints::new(
            0.0,
            (constraints.max_width - self.padding * 2.0).max(0.0),
            0.0,
            (constraints.max_height - self.padding * 2.0).max(0.0),
        );
        let size = measure_row(&self.children, inner, self.gap);
        if size.is_empty() {
            return Size::ZERO;
        }
        constraints.constrain(Size::new(
            size.width + self.padding * 2.0,
            size.height + self.padding * 2.0,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        layout_row(&mut self.children, bounds.inset(self.padding), self.gap);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(color) = self.background {
            canvas.fill_rect(self.bounds, color);
        }
        for child in &self.children {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
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

    fn accessible_role(&self) -> AccessibleRole {
        self.role
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
