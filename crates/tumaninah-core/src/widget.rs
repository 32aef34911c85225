//! Widget trait and related types.
//!
//! Widgets follow a mount-measure-layout-paint cycle:
//!
//! 1. **Mount**: receive the [`Context`] of the enclosing subtree. Mount is
//!    idempotent and runs again whenever the host re-renders, so widgets use
//!    it to reconcile with shared state.
//! 2. **Measure**: compute intrinsic size given constraints
//! 3. **Layout**: position self and children within allocated bounds
//! 4. **Paint**: emit draw calls on a [`Canvas`]
//!
//! `unmount` is the inverse of the first mount and releases anything a widget
//! registered with its context.

use crate::constraints::Constraints;
use crate::context::Context;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position children within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events. A returned value is a message bubbled to the host.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Get child widgets for tree traversal.
    fn children(&self) -> &[Box<dyn Widget>];

    /// Get mutable child widgets.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>];

    /// Attach to (or re-sync with) the context of the enclosing subtree.
    fn mount(&mut self, ctx: &Context) {
        for child in self.children_mut() {
            child.mount(ctx);
        }
    }

    /// Detach from the enclosing subtree.
    fn unmount(&mut self) {
        for child in self.children_mut() {
            child.unmount();
        }
    }

    /// Check if this widget is interactive (can receive focus/events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Selection state exposed to assistive technology (`aria-selected`).
    fn accessible_selected(&self) -> Option<bool> {
        None
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::ZERO
    }
}

/// Canvas trait for paint operations.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a stroked rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw text.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Push a clip region.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the clip region.
    fn pop_clip(&mut self);
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    #[default]
    Normal,
    /// Bold (700)
    Bold,
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Button
    Button,
    /// Heading
    Heading,
    /// Menu
    Menu,
    /// Tab
    Tab,
    /// Tab list
    TabList,
    /// Tab panel
    TabPanel,
    /// Landmark region
    Region,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingCanvas;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default, Clone)]
    struct Counters {
        mounts: Arc<AtomicUsize>,
        unmounts: Arc<AtomicUsize>,
    }

    struct Leaf {
        counters: Counters,
    }

    impl Widget for Leaf {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }
        fn measure(&self, c: Constraints) -> Size {
            c.constrain(Size::new(10.0, 10.0))
        }
        fn layout(&mut self, b: Rect) -> LayoutResult {
            LayoutResult { size: b.size() }
        }
        fn paint(&self, _: &mut dyn Canvas) {}
        fn event(&mut self, _: &Event) -> Option<Box<dyn Any + Send>> {
            None
        }
        fn children(&self) -> &[Box<dyn Widget>] {
            &[]
        }
        fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
            &mut []
        }
        fn mount(&mut self, _: &Context) {
            self.counters.mounts.fetch_add(1, Ordering::SeqCst);
        }
        fn unmount(&mut self) {
            self.counters.unmounts.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Parent {
        children: Vec<Box<dyn Widget>>,
    }

    impl Widget for Parent {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }
        fn measure(&self, c: Constraints) -> Size {
            c.biggest()
        }
        fn layout(&mut self, b: Rect) -> LayoutResult {
            LayoutResult { size: b.size() }
        }
        fn paint(&self, canvas: &mut dyn Canvas) {
            canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        }
        fn event(&mut self, _: &Event) -> Option<Box<dyn Any + Send>> {
            None
        }
        fn children(&self) -> &[Box<dyn Widget>] {
            &self.children
        }
        fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
            &mut self.children
        }
    }

    #[test]
    fn test_type_id() {
        assert_eq!(TypeId::of::<u32>(), TypeId::of::<u32>());
        assert_ne!(TypeId::of::<u32>(), TypeId::of::<String>());
    }

    #[test]
    fn test_default_mount_and_unmount_recurse() {
        let mut parent = Parent {
            children: vec![
                Box::new(Parent {
                    children: Vec::new(),
                }),
                Box::new(Parent {
                    children: Vec::new(),
                }),
            ],
        };
        parent.mount(&Context::new());
        parent.unmount();

        assert_eq!(parent.children().len(), 2);
        assert!(!parent.is_interactive());
        assert_eq!(parent.accessible_role(), AccessibleRole::Generic);
        assert_eq!(parent.accessible_selected(), None);
        assert_eq!(parent.bounds(), Rect::ZERO);
    }

    #[test]
    fn test_mount_reaches_nested_leaf() {
        let counters = Counters::default();
        let mut outer = Parent {
            children: vec![Box::new(Parent {
                children: vec![Box::new(Leaf {
                    counters: counters.clone(),
                })],
            })],
        };
        outer.mount(&Context::new());
        outer.mount(&Context::new());
        outer.unmount();

        assert_eq!(counters.mounts.load(Ordering::SeqCst), 2);
        assert_eq!(counters.unmounts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_paint_through_trait_object() {
        let parent = Parent {
            children: Vec::new(),
        };
        let mut canvas = RecordingCanvas::new();
        (&parent as &dyn Widget).paint(&mut canvas);
        assert_eq!(canvas.command_count(), 1);
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 16.0);
        assert_eq!(style.weight, FontWeight::Normal);
        assert_eq!(style.color, Color::BLACK);
    }
}
