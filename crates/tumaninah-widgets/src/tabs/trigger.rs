//! Tab trigger: a pill bound to one tab identifier.

use super::{expect_scope, state, TabChanged, TabId, TabsScope};
use crate::attrs::{Attributes, ARIA_LABEL, TEST_ID};
use crate::error::TabsError;
use std::any::Any;
use std::sync::Arc;
use tracing::debug;
use tumaninah_core::{
    AccessibleRole, Canvas, Constraints, Context, Event, FontWeight, LayoutResult, MouseButton,
    Palette, Point, Rect, Size, TextStyle, TypeId, Widget,
};

const COMPONENT: &str = "TabsTrigger";

/// Hook run before a trigger requests its tab.
pub type ActivateHook = Arc<dyn Fn() + Send + Sync>;

/// Control that requests its tab when activated.
pub struct TabsTrigger {
    value: TabId,
    label: String,
    attrs: Attributes,
    disabled: bool,
    on_activate: Option<ActivateHook>,
    font_size: f32,
    padding: f32,
    palette: Palette,
    scope: Option<TabsScope>,
    focused: bool,
    bounds: Rect,
}

impl TabsTrigger {
    /// Create a trigger for `value`.
    #[must_use]
    pub fn new(value: impl Into<TabId>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            attrs: Attributes::new(),
            disabled: false,
            on_activate: None,
            font_size: 14.0,
            padding: 10.0,
            palette: Palette::default(),
            scope: None,
            focused: false,
            bounds: Rect::ZERO,
        }
    }

    /// Run `hook` on activation, before the tab is requested.
    #[must_use]
    pub fn on_activate(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_activate = Some(Arc::new(hook));
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set font size.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set colors.
    #[must_use]
    pub const fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
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

    /// Set accessible name (defaults to the label).
    #[must_use]
    pub fn accessible_name(self, name: impl Into<String>) -> Self {
        self.attr(ARIA_LABEL, name)
    }

    /// The identifier this trigger requests.
    #[must_use]
    pub const fn value(&self) -> &TabId {
        &self.value
    }

    /// Visible label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether this trigger's tab is the active one.
    pub fn is_active(&self) -> Result<bool, TabsError> {
        Ok(state::require(self.scope.as_ref(), COMPONENT)?.is_active(&self.value))
    }

    /// Activate the trigger: run the hook, then request the tab.
    ///
    /// Disabled triggers do nothing and return `Ok(None)`.
    pub fn activate(&mut self) -> Result<Option<TabChanged>, TabsError> {
        let scope = state::require(self.scope.as_ref(), COMPONENT)?;
        if self.disabled {
            return Ok(None);
        }
        if let Some(hook) = &self.on_activate {
            hook();
        }
        debug!(tab = %self.value, "trigger activated");
        scope.request_change(self.value.clone());
        Ok(Some(TabChanged {
            tab_id: self.value.clone(),
        }))
    }

    fn activate_or_panic(&mut self) -> Option<Box<dyn Any + Send>> {
        match self.activate() {
            Ok(changed) => changed.map(|msg| Box::new(msg) as Box<dyn Any + Send>),
            Err(err) => panic!("{err}"),
        }
    }

    fn text_size(&self) -> Size {
        let char_width = self.font_size * 0.6;
        Size::new(
            self.label.chars().count() as f32 * char_width,
            self.font_size * 1.2,
        )
    }
}

impl Widget for TabsTrigger {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        expect_scope(self.scope.as_ref(), COMPONENT);
        let text = self.text_size();
        constraints.constrain(Size::new(
            text.width + self.padding * 2.0,
            text.height + self.padding * 2.0,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let active = expect_scope(self.scope.as_ref(), COMPONENT).is_active(&self.value);

        let color = if self.disabled {
            self.palette.muted
        } else if active {
            canvas.fill_rect(self.bounds, self.palette.primary);
            self.palette.on_primary
        } else {
            self.palette.text
        };

        if self.focused {
            canvas.stroke_rect(self.bounds, self.palette.primary, 2.0);
        }

        let style = TextStyle {
            size: self.font_size,
            color,
            weight: if active {
                FontWeight::Bold
            } else {
                FontWeight::Normal
            },
        };
        let text = self.text_size();
        let position = Point::new(
            self.bounds.x + (self.bounds.width - text.width) / 2.0,
            self.bounds.y + (self.bounds.height - text.height) / 2.0,
        );
        canvas.draw_text(&self.label, position, &style);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        expect_scope(self.scope.as_ref(), COMPONENT);

        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => self.activate_or_panic(),
            Event::KeyDown { .. } if self.focused && event.is_activation_key() => {
                self.activate_or_panic()
            }
            Event::FocusIn => {
                self.focused = !self.disabled;
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

    fn mount(&mut self, ctx: &Context) {
        self.scope = ctx.get::<TabsScope>();
    }

    fn unmount(&mut self) {
        self.scope = None;
        self.focused = false;
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.attrs.label().or(Some(&self.label))
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Tab
    }

    fn accessible_selected(&self) -> Option<bool> {
        self.scope.as_ref().map(|scope| scope.is_active(&self.value))
    }

    fn test_id(&self) -> Option<&str> {
        self.attrs.test_id()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
