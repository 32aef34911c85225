//! Headless harness for driving a widget tree.

use crate::selector::Selector;
use std::any::Any;
use tumaninah_core::{
    Context, Event, Key, MouseButton, Point, Rect, RecordingCanvas, Widget,
};

/// Test harness that owns a mounted root widget.
///
/// Every interaction re-renders: the root is mounted again with the same
/// context and laid out at the viewport, the way a host re-renders after an
/// update.
pub struct Harness<W: Widget> {
    /// Root widget being tested
    root: W,
    /// Context the root is mounted with
    ctx: Context,
    /// Current viewport
    viewport: Rect,
    /// Messages bubbled out of the root
    messages: Vec<Box<dyn Any + Send>>,
}

impl<W: Widget> Harness<W> {
    /// Mount `root` with an empty context.
    pub fn new(root: W) -> Self {
        Self::with_context(root, Context::new())
    }

    /// Mount `root` with `ctx`.
    pub fn with_context(root: W, ctx: Context) -> Self {
        let mut harness = Self {
            root,
            ctx,
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
            messages: Vec::new(),
        };
        harness.render();
        harness
    }

    /// Set the viewport size and re-render.
    #[must_use]
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.render();
        self
    }

    /// Borrow the root widget.
    pub const fn root(&self) -> &W {
        &self.root
    }

    /// Mutably borrow the root widget. Call [`Harness::render`] after
    /// changing it.
    pub fn root_mut(&mut self) -> &mut W {
        &mut self.root
    }

    /// Re-mount and lay out the tree.
    pub fn render(&mut self) -> &mut Self {
        self.root.mount(&self.ctx);
        self.root.layout(self.viewport);
        self
    }

    /// Unmount the tree.
    pub fn unmount(&mut self) {
        self.root.unmount();
    }

    // === Event Simulation ===

    /// Press and release the left button at the center of the first widget
    /// matching `selector`. Does nothing if no widget matches.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        if let Some(center) = self.query(selector).map(|w| w.bounds().center()) {
            self.click_at(center);
        }
        self
    }

    /// Press and release the left button at `position`.
    pub fn click_at(&mut self, position: Point) -> &mut Self {
        self.dispatch(&Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.dispatch(&Event::MouseUp {
            position,
            button: MouseButton::Left,
        });
        self.render()
    }

    /// Give keyboard focus to the first widget matching `selector`.
    pub fn focus(&mut self, selector: &str) -> &mut Self {
        let Ok(sel) = Selector::parse(selector) else {
            return self;
        };
        if let Some(widget) = find_widget_mut(&mut self.root, &sel) {
            widget.event(&Event::FocusIn);
        }
        self
    }

    /// Press and release a key.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.dispatch(&Event::KeyDown { key });
        self.dispatch(&Event::KeyUp { key });
        self.render()
    }

    /// Deliver one event to the root, keeping any bubbled message.
    pub fn dispatch(&mut self, event: &Event) {
        if let Some(msg) = self.root.event(event) {
            self.messages.push(msg);
        }
    }

    /// Drain bubbled messages of type `T`, discarding the rest.
    pub fn take_messages<T: Any>(&mut self) -> Vec<T> {
        self.messages
            .drain(..)
            .filter_map(|msg| msg.downcast::<T>().ok().map(|boxed| *boxed))
            .collect()
    }

    // === Queries ===

    /// Query for the first widget matching the selector.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&dyn Widget> {
        let sel = Selector::parse(selector).ok()?;
        find_widget(&self.root, &sel)
    }

    /// Query for all widgets matching the selector.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<&dyn Widget> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        find_all_widgets(&self.root, &sel, &mut results);
        results
    }

    /// Accessible name of the first matching widget, or empty.
    #[must_use]
    pub fn text(&self, selector: &str) -> String {
        self.query(selector)
            .and_then(|w| w.accessible_name())
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Check if a widget exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    /// Paint the tree into a fresh recording canvas.
    #[must_use]
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    /// Text runs of a fresh paint.
    #[must_use]
    pub fn painted_texts(&self) -> Vec<String> {
        self.paint().texts().into_iter().map(str::to_string).collect()
    }

    // === Assertions ===

    /// Assert that a widget exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected widget matching '{selector}' to exist"
        );
        self
    }

    /// Assert that a widget does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the widget exists.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected widget matching '{selector}' to not exist"
        );
        self
    }

    /// Assert that text matches exactly.
    ///
    /// # Panics
    ///
    /// Panics if the text does not match.
    pub fn assert_text(&self, selector: &str, expected: &str) -> &Self {
        let actual = self.text(selector);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' but got '{actual}' for '{selector}'"
        );
        self
    }

    /// Assert the count of matching widgets.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} widgets matching '{selector}' but found {actual}"
        );
        self
    }

    /// Assert that a fresh paint contains `text`.
    ///
    /// # Panics
    ///
    /// Panics if no text run equals `text`.
    pub fn assert_painted(&self, text: &str) -> &Self {
        let texts = self.painted_texts();
        assert!(
            texts.iter().any(|t| t == text),
            "Expected '{text}' to be painted, got {texts:?}"
        );
        self
    }

    /// Assert that a fresh paint does not contain `text`.
    ///
    /// # Panics
    ///
    /// Panics if a text run equals `text`.
    pub fn assert_not_painted(&self, text: &str) -> &Self {
        let texts = self.painted_texts();
        assert!(
            texts.iter().all(|t| t != text),
            "Expected '{text}' not to be painted, got {texts:?}"
        );
        self
    }
}

fn find_widget<'a>(widget: &'a dyn Widget, selector: &Selector) -> Option<&'a dyn Widget> {
    if selector.matches(widget) {
        return Some(widget);
    }
    widget
        .children()
        .iter()
        .find_map(|child| find_widget(child.as_ref(), selector))
}

fn find_widget_mut<'a>(
    widget: &'a mut dyn Widget,
    selector: &Selector,
) -> Option<&'a mut dyn Widget> {
    if selector.matches(widget) {
        return Some(widget);
    }
    for child in widget.children_mut() {
        if let Some(found) = find_widget_mut(child.as_mut(), selector) {
            return Some(found);
        }
    }
    None
}

fn find_all_widgets<'a>(
    widget: &'a dyn Widget,
    selector: &Selector,
    results: &mut Vec<&'a dyn Widget>,
) {
    if selector.matches(widget) {
        results.push(widget);
    }
    for child in widget.children() {
        find_all_widgets(child.as_ref(), selector, results);
    }
}
