//! Adhkar list panel.
//!
//! While mounted, the panel registers an open action for each of its cards
//! with the [`ActionRegistry`] found in its context. The home cards reach the
//! panel only through those actions, so a card whose panel has gone away
//! cannot be opened.

use crate::registry::{ActionRegistry, AdhkarCard};
use std::any::Any;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;
use tumaninah_core::{
    AccessibleRole, Canvas, Constraints, Context, Event, FontWeight, LayoutResult, MouseButton,
    Palette, Point, Rect, Size, TextStyle, TypeId, Widget,
};
use tumaninah_widgets::{Column, Label};

/// Which card is expanded, shared between the panel and its registered
/// actions.
#[derive(Debug, Clone, Default)]
struct Expanded(Arc<Mutex<Option<AdhkarCard>>>);

impl Expanded {
    fn lock(&self) -> MutexGuard<'_, Option<AdhkarCard>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn get(&self) -> Option<AdhkarCard> {
        *self.lock()
    }

    fn set(&self, card: AdhkarCard) {
        *self.lock() = Some(card);
    }

    fn clear(&self) {
        *self.lock() = None;
    }
}

/// First dhikr of a card's list, shown once it is opened.
const fn opening_dhikr(card: AdhkarCard) -> &'static str {
    match card {
        AdhkarCard::Morning => "أصبحنا وأصبح الملك لله",
        AdhkarCard::Evening => "أمسينا وأمسى الملك لله",
    }
}

/// One expandable card.
struct CardView {
    card: AdhkarCard,
    open: Expanded,
    palette: Palette,
    test_id_value: String,
    bounds: Rect,
}

impl CardView {
    fn new(card: AdhkarCard, open: Expanded) -> Self {
        Self {
            card,
            open,
            palette: Palette::default(),
            test_id_value: format!("adhkar-card-{}", card.key()),
            bounds: Rect::ZERO,
        }
    }

    fn is_open(&self) -> bool {
        self.open.get() == Some(self.card)
    }
}

impl Widget for CardView {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let height = if self.is_open() { 96.0 } else { 56.0 };
        constraints.constrain(Size::new(constraints.max_width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.palette.surface);
        canvas.draw_text(
            self.card.title(),
            Point::new(self.bounds.x + 16.0, self.bounds.y + 16.0),
            &TextStyle {
                size: 18.0,
                color: self.palette.text,
                weight: FontWeight::Bold,
            },
        );
        if self.is_open() {
            canvas.draw_text(
                opening_dhikr(self.card),
                Point::new(self.bounds.x + 16.0, self.bounds.y + 56.0),
                &TextStyle {
                    size: 16.0,
                    color: self.palette.text,
                    weight: FontWeight::Normal,
                },
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        {
            if self.bounds.contains_point(position) {
                self.open.set(self.card);
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
        Some(self.card.title())
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
    }

    fn accessible_selected(&self) -> Option<bool> {
        Some(self.is_open())
    }

    fn test_id(&self) -> Option<&str> {
        Some(&self.test_id_value)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Morning and evening adhkar cards.
pub struct AdhkarPanel {
    body: Column,
    open: Expanded,
    registry: Option<ActionRegistry>,
}

impl Default for AdhkarPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl AdhkarPanel {
    /// Create the panel with every card closed.
    #[must_use]
    pub fn new() -> Self {
        let open = Expanded::default();
        let mut body = Column::new()
            .gap(12.0)
            .padding(24.0)
            .role(AccessibleRole::Region)
            .with_test_id("adhkar-panel")
            .child(Label::heading("الأذكار"));
        for card in AdhkarCard::ALL {
            body = body.child(CardView::new(card, open.clone()));
        }
        Self {
            body,
            open,
            registry: None,
        }
    }

    /// Card currently expanded.
    #[must_use]
    pub fn opened(&self) -> Option<AdhkarCard> {
        self.open.get()
    }

    /// Check whether the panel's actions are registered.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.registry.is_some()
    }
}

impl Widget for AdhkarPanel {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        self.body.measure(constraints)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.body.layout(bounds)
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.body.paint(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        self.body.event(event)
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        self.body.children()
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        self.body.children_mut()
    }

    fn mount(&mut self, ctx: &Context) {
        if self.registry.is_none() {
            if let Some(registry) = ctx.get::<ActionRegistry>() {
                for card in AdhkarCard::ALL {
                    let open = self.open.clone();
                    registry.register(card, Arc::new(move || open.set(card)));
                }
                debug!("adhkar panel registered card actions");
                self.registry = Some(registry);
            }
        }
        self.body.mount(ctx);
    }

    fn unmount(&mut self) {
        if let Some(registry) = self.registry.take() {
            for card in AdhkarCard::ALL {
                registry.unregister(card);
            }
            debug!("adhkar panel unregistered card actions");
        }
        self.open.clear();
        self.body.unmount();
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Region
    }

    fn test_id(&self) -> Option<&str> {
        self.body.test_id()
    }

    fn bounds(&self) -> Rect {
        self.body.bounds()
    }
}
