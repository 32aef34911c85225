//! Tab selection state and the scope handle that shares it.

use crate::error::TabsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Opaque identifier of a tab.
///
/// The empty string is a valid identifier, distinct from "no scope".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    /// Create a tab identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check for the empty identifier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TabId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&TabId> for TabId {
    fn from(id: &TabId) -> Self {
        id.clone()
    }
}

impl PartialEq<str> for TabId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TabId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for TabId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Callback invoked on every change request.
pub type OnChange = Arc<dyn Fn(&TabId) + Send + Sync>;

/// Which party owns the active value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeKind {
    /// The owner supplies the value and is told about requests.
    Controlled,
    /// The tabs instance owns and mutates the value.
    Uncontrolled,
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controlled => f.write_str("controlled"),
            Self::Uncontrolled => f.write_str("uncontrolled"),
        }
    }
}

/// The active value, tagged by who owns it. Resolved once at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabsMode {
    /// Value mirrors what the owner last supplied.
    Controlled {
        /// Externally supplied value
        value: TabId,
    },
    /// Value is seeded once and then mutated by change requests.
    Uncontrolled {
        /// Internally owned value
        current: TabId,
    },
}

impl TabsMode {
    /// The mode without its value.
    #[must_use]
    pub const fn kind(&self) -> ModeKind {
        match self {
            Self::Controlled { .. } => ModeKind::Controlled,
            Self::Uncontrolled { .. } => ModeKind::Uncontrolled,
        }
    }

    fn value(&self) -> &TabId {
        match self {
            Self::Controlled { value } => value,
            Self::Uncontrolled { current } => current,
        }
    }
}

/// Single source of truth for which tab is active.
pub struct TabsState {
    mode: TabsMode,
    on_change: Option<OnChange>,
}

impl TabsState {
    /// Create a state. Supplying `external` selects controlled mode for the
    /// lifetime of the instance; otherwise the state starts at `initial`.
    pub fn create(
        initial: impl Into<TabId>,
        external: Option<TabId>,
        on_change: Option<OnChange>,
    ) -> Self {
        let mode = match external {
            Some(value) => TabsMode::Controlled { value },
            None => TabsMode::Uncontrolled {
                current: initial.into(),
            },
        };
        Self { mode, on_change }
    }

    /// Create an uncontrolled state seeded with `initial`.
    pub fn uncontrolled(initial: impl Into<TabId>) -> Self {
        Self::create(initial, None, None)
    }

    /// Create a controlled state showing `value`.
    pub fn controlled(value: impl Into<TabId>) -> Self {
        Self::create(TabId::default(), Some(value.into()), None)
    }

    /// Attach the change callback.
    #[must_use]
    pub fn with_on_change(mut self, on_change: impl Fn(&TabId) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    /// The active identifier.
    #[must_use]
    pub fn read(&self) -> &TabId {
        self.mode.value()
    }

    /// Ownership mode chosen at creation.
    #[must_use]
    pub const fn mode(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Check whether `value` is the active identifier.
    #[must_use]
    pub fn is_active(&self, value: &TabId) -> bool {
        self.read() == value
    }

    /// Request a transition to `next`.
    ///
    /// Uncontrolled states switch immediately. In both modes the change
    /// callback runs, even when `next` is already active.
    pub fn request_change(&mut self, next: impl Into<TabId>) {
        let next = next.into();
        if let Some(on_change) = self.apply(&next) {
            on_change(&next);
        }
    }

    /// Push a new external value from the owner.
    ///
    /// `Some` is only accepted in controlled mode and `None` only in
    /// uncontrolled mode, where it is a no-op: uncontrolled state is never
    /// re-seeded.
    pub fn sync_external(&mut self, external: Option<TabId>) -> Result<(), TabsError> {
        match (&mut self.mode, external) {
            (TabsMode::Controlled { value }, Some(next)) => {
                *value = next;
                Ok(())
            }
            (TabsMode::Uncontrolled { .. }, None) => Ok(()),
            (TabsMode::Controlled { .. }, None) => Err(TabsError::ModeSwitch {
                from: ModeKind::Controlled,
                to: ModeKind::Uncontrolled,
            }),
            (TabsMode::Uncontrolled { .. }, Some(_)) => Err(TabsError::ModeSwitch {
                from: ModeKind::Uncontrolled,
                to: ModeKind::Controlled,
            }),
        }
    }

    /// Apply a request to the owned value and hand back the callback to run.
    fn apply(&mut self, next: &TabId) -> Option<OnChange> {
        match &mut self.mode {
            TabsMode::Uncontrolled { current } => {
                debug!(from = %current, to = %next, "tab change (uncontrolled)");
                current.clone_from(next);
            }
            TabsMode::Controlled { value } => {
                debug!(shown = %value, requested = %next, "tab change requested (controlled)");
            }
        }
        self.on_change.clone()
    }
}

impl fmt::Debug for TabsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabsState")
            .field("mode", &self.mode)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Shared handle to one [`TabsState`], propagated to descendants through the
/// widget [`Context`](tumaninah_core::Context).
#[derive(Clone)]
pub struct TabsScope {
    inner: Arc<Mutex<TabsState>>,
}

impl TabsScope {
    /// Wrap a state in a new scope.
    #[must_use]
    pub fn new(state: TabsState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TabsState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The active identifier.
    #[must_use]
    pub fn read(&self) -> TabId {
        self.lock().read().clone()
    }

    /// Check whether `value` is the active identifier.
    #[must_use]
    pub fn is_active(&self, value: &TabId) -> bool {
        self.lock().is_active(value)
    }

    /// Ownership mode chosen at creation.
    #[must_use]
    pub fn mode(&self) -> ModeKind {
        self.lock().mode()
    }

    /// Request a transition; see [`TabsState::request_change`].
    ///
    /// The lock is released before the change callback runs, so the callback
    /// may read or drive this scope.
    pub fn request_change(&self, next: impl Into<TabId>) {
        let next = next.into();
        let on_change = self.lock().apply(&next);
        if let Some(on_change) = on_change {
            on_change(&next);
        }
    }

    /// Push a new external value; see [`TabsState::sync_external`].
    pub fn sync_external(&self, external: Option<TabId>) -> Result<(), TabsError> {
        self.lock().sync_external(external)
    }

    /// Replace the change callback.
    pub fn set_on_change(&self, on_change: Option<OnChange>) {
        self.lock().on_change = on_change;
    }

    /// Check whether two handles share the same state.
    #[must_use]
    pub fn same_scope(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for TabsScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TabsScope").field(&*self.lock()).finish()
    }
}

/// Resolve the scope a component captured at mount, or fail loudly.
pub(crate) fn require<'a>(
    scope: Option<&'a TabsScope>,
    component: &'static str,
) -> Result<&'a TabsScope, TabsError> {
    scope.ok_or(TabsError::ScopeMissing { component })
}
