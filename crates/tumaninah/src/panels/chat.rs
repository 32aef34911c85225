//! Floating chat button, present on every tab.

use std::any::Any;
use tumaninah_core::{
    AccessibleRole, Canvas, Constraints, Event, FontWeight, LayoutResult, MouseButton, Palette,
    Point, Rect, Size, TextStyle, TypeId, Widget,
};

const BUTTON: f32 = 56.0;
const PANEL_HEIGHT: f32 = 160.0;

/// Chat launcher anchored to the trailing edge of its row.
pub struct FloatingChat {
    open: bool,
    palette: Palette,
    bounds: Rect,
}

impl Default for FloatingChat {
    fn default() -> Self {
        Self::new()
    }
}

impl FloatingChat {
    /// Create a closed launcher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: false,
            palette: Palette::default(),
            bounds: Rect::ZERO,
        }
    }

    /// Check whether the chat window is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    fn button_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x + self.bounds.width - BUTTON,
            self.bounds.y + self.bounds.height - BUTTON,
            BUTTON,
            BUTTON,
        )
    }
}

impl Widget for FloatingChat {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let height = if self.open { BUTTON + PANEL_HEIGHT } else { BUTTON };
        constraints.constrain(Size::new(constraints.max_width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.open {
            let window = Rect::new(
                self.bounds.x + self.bounds.width - 320.0,
                self.bounds.y,
                320.0,
                PANEL_HEIGHT,
            );
            canvas.fill_rect(window, self.palette.surface);
            canvas.stroke_rect(window, self.palette.muted, 1.0);
            canvas.draw_text(
                "مساعد طمأنينة",
                Point::new(window.x + 16.0, window.y + 16.0),
                &TextStyle {
                    size: 16.0,
                    color: self.palette.text,
                    weight: FontWeight::Bold,
                },
            );
        }

        let button = self.button_rect();
        canvas.fill_rect(button, self.palette.primary);
        canvas.draw_text(
            "💬",
            button.center(),
            &TextStyle {
                size: 24.0,
                color: self.palette.on_primary,
                weight: FontWeight::Normal,
            },
        );
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        {
            if self.button_rect().contains_point(position) {
                self.open = !self.open;
            }
        }
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        Some("المحادثة")
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
    }

    fn test_id(&self) -> Option<&str> {
        Some("floating-chat")
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
