//! Label widget for displaying a line of text.

use serde::{Deserialize, Serialize};
use std::any::Any;
use tumaninah_core::{
    AccessibleRole, Canvas, Color, Constraints, Event, FontWeight, LayoutResult, Rect, Size,
    TextStyle, TypeId, Widget,
};

/// Single-line text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Text content
    content: String,
    /// Text color
    color: Color,
    /// Font size in pixels
    font_size: f32,
    /// Font weight
    font_weight: FontWeight,
    /// Rendered as a heading for assistive technology
    heading: bool,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Label {
    /// Create a new label.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: Color::BLACK,
            font_size: 16.0,
            font_weight: FontWeight::Normal,
            heading: false,
            test_id_value: None,
            bounds: Rect::ZERO,
        }
    }

    /// Create a bold heading label.
    #[must_use]
    pub fn heading(content: impl Into<String>) -> Self {
        let mut label = Self::new(content).font_size(24.0).font_weight(FontWeight::Bold);
        label.heading = true;
        label
    }

    /// Set text color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set font size.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set font weight.
    #[must_use]
    pub const fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    // ~0.6em per character; good enough without font metrics
    fn estimate_size(&self) -> Size {
        let width = self.content.chars().count() as f32 * self.font_size * 0.6;
        Size::new(width, self.font_size * 1.2)
    }
}

impl Widget for Label {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.estimate_size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let style = TextStyle {
            size: self.font_size,
            color: self.color,
            weight: self.font_weight,
        };
        canvas.draw_text(&self.content, self.bounds.origin(), &style);
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
        Some(&self.content)
    }

    fn accessible_role(&self) -> AccessibleRole {
        if self.heading {
            AccessibleRole::Heading
        } else {
            AccessibleRole::Generic
        }
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
