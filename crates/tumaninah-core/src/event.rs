//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Key released
    KeyUp {
        /// Key released
        key: Key,
    },
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
}

impl Event {
    /// Create a left-button press at a position.
    #[must_use]
    pub const fn click(position: Point) -> Self {
        Self::MouseDown {
            position,
            button: MouseButton::Left,
        }
    }

    /// Position carried by pointer events.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Whether this event activates a focused control (Enter or Space).
    #[must_use]
    pub const fn is_activation_key(&self) -> bool {
        matches!(
            self,
            Self::KeyDown {
                key: Key::Enter | Key::Space
            }
        )
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Keys the shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Enter / Return
    Enter,
    /// Space bar
    Space,
    /// Tab
    Tab,
    /// Escape
    Escape,
    /// Left arrow
    ArrowLeft,
    /// Right arrow
    ArrowRight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_is_left_mouse_down() {
        let e = Event::click(Point::new(3.0, 4.0));
        assert_eq!(
            e,
            Event::MouseDown {
                position: Point::new(3.0, 4.0),
                button: MouseButton::Left
            }
        );
    }

    #[test]
    fn test_position_only_for_pointer_events() {
        assert_eq!(
            Event::MouseMove {
                position: Point::new(1.0, 2.0)
            }
            .position(),
            Some(Point::new(1.0, 2.0))
        );
        assert_eq!(Event::FocusIn.position(), None);
        assert_eq!(Event::KeyDown { key: Key::Enter }.position(), None);
    }

    #[test]
    fn test_activation_keys() {
        assert!(Event::KeyDown { key: Key::Enter }.is_activation_key());
        assert!(Event::KeyDown { key: Key::Space }.is_activation_key());
        assert!(!Event::KeyUp { key: Key::Enter }.is_activation_key());
        assert!(!Event::KeyDown { key: Key::Tab }.is_activation_key());
    }
}
