//! Navigation card: a large button that posts a shell message.

use crate::state::ShellMessage;
use std::any::Any;
use tumaninah_core::{
    AccessibleRole, Canvas, Constraints, Event, FontWeight, LayoutResult, MouseButton, Palette,
    Point, Rect, Size, TextStyle, TypeId, Widget,
};

/// Card on the home panel.
pub struct NavCard {
    title: String,
    icon: String,
    message: Option<ShellMessage>,
    palette: Palette,
    test_id_value: Option<String>,
    focused: bool,
    bounds: Rect,
}

impl NavCard {
    /// Create a card that posts `message` when pressed.
    #[must_use]
    pub fn new(icon: impl Into<String>, title: impl Into<String>, message: ShellMessage) -> Self {
        Self::build(icon.into(), title.into(), Some(message))
    }

    /// Create a card that cannot be pressed.
    #[must_use]
    pub fn disabled(icon: impl Into<String>, title: impl Into<String>) -> Self {
        Self::build(icon.into(), title.into(), None)
    }

    fn build(icon: String, title: String, message: Option<ShellMessage>) -> Self {
        Self {
            title,
            icon,
            message,
            palette: Palette::default(),
            test_id_value: None,
            focused: false,
            bounds: Rect::ZERO,
        }
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Check if the card can be pressed.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.message.is_some()
    }

    fn press(&self) -> Option<Box<dyn Any + Send>> {
        self.message
            .clone()
            .map(|msg| Box::new(msg) as Box<dyn Any + Send>)
    }
}

impl Widget for NavCard {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(160.0, 120.0))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.palette.surface);
        if self.focused {
            canvas.stroke_rect(self.bounds, self.palette.primary, 2.0);
        }

        let color = if self.is_enabled() {
            self.palette.text
        } else {
            self.palette.muted.with_alpha(0.7)
        };
        let center = self.bounds.center();
        canvas.draw_text(
            &self.icon,
            Point::new(center.x, self.bounds.y + 24.0),
            &TextStyle {
                size: 40.0,
                color,
                weight: FontWeight::Normal,
            },
        );
        canvas.draw_text(
            &self.title,
            Point::new(center.x, self.bounds.y + 80.0),
            &TextStyle {
                size: 18.0,
                color,
                weight: FontWeight::Bold,
            },
        );
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => self.press(),
            Event::KeyDown { .. } if self.focused && event.is_activation_key() => self.press(),
            Event::FocusIn => {
                self.focused = self.is_enabled();
                None
            }
            Event::FocusOut => {
                self.focused = false;
                None
            }
            _ => None,
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        self.is_enabled()
    }

    fn is_focusable(&self) -> bool {
        self.is_enabled()
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
