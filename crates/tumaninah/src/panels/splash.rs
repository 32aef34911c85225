//! Splash screen shown while the shell starts.

use std::any::Any;
use tumaninah_core::{
    AccessibleRole, Canvas, Color, Constraints, Event, FontWeight, LayoutResult, Point, Rect,
    Size, TextStyle, TypeId, Widget,
};

/// App title on the splash.
pub const TITLE: &str = "طمأنينة";
/// Tagline under the title.
pub const TAGLINE: &str = "رفيقك في رحلة التقرب إلى الله";

/// Full-screen title card. Takes no input.
pub struct Splash {
    background: Color,
    foreground: Color,
    bounds: Rect,
}

impl Default for Splash {
    fn default() -> Self {
        Self::new()
    }
}

impl Splash {
    /// Create the splash with the brand colors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            background: Color::opaque(0.05, 0.33, 0.27),
            foreground: Color::WHITE,
            bounds: Rect::ZERO,
        }
    }
}

impl Widget for Splash {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.biggest()
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.background);
        let center = self.bounds.center();
        canvas.draw_text(
            TITLE,
            Point::new(center.x, center.y - 32.0),
            &TextStyle {
                size: 48.0,
                color: self.foreground,
                weight: FontWeight::Bold,
            },
        );
        canvas.draw_text(
            TAGLINE,
            Point::new(center.x, center.y + 32.0),
            &TextStyle {
                size: 18.0,
                color: self.foreground.with_alpha(0.8),
                weight: FontWeight::Normal,
            },
        );
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(TITLE)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Heading
    }

    fn test_id(&self) -> Option<&str> {
        Some("splash")
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumaninah_core::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_paints_title_and_tagline() {
        let mut splash = Splash::new();
        splash.layout(Rect::new(0.0, 0.0, 400.0, 300.0));
        let mut canvas = RecordingCanvas::new();
        splash.paint(&mut canvas);

        assert_eq!(canvas.texts(), vec![TITLE, TAGLINE]);
        assert!(matches!(
            &canvas.commands()[0],
            DrawCommand::FillRect { bounds, .. } if *bounds == Rect::new(0.0, 0.0, 400.0, 300.0)
        ));
    }
}
