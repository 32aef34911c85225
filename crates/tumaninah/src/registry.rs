//! Deferred-action targets registered by mounted panels.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Adhkar list a home card opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdhkarCard {
    /// ورد الصباح
    Morning,
    /// ورد المساء
    Evening,
}

impl AdhkarCard {
    /// Both cards, in display order.
    pub const ALL: [Self; 2] = [Self::Morning, Self::Evening];

    /// Arabic title shown on the card.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Morning => "ورد الصباح",
            Self::Evening => "ورد المساء",
        }
    }

    /// Stable key used in test ids and scripts.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Evening => "evening",
        }
    }
}

impl fmt::Display for AdhkarCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AdhkarCard {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Self::Morning),
            "evening" => Ok(Self::Evening),
            _ => Err("expected morning or evening"),
        }
    }
}

/// Action a panel exposes for a card.
pub type CardAction = Arc<dyn Fn() + Send + Sync>;

/// Shared map from card to the action of the panel currently showing it.
///
/// The adhkar panel registers its actions while mounted and removes them on
/// unmount, so invoking a card whose panel is gone does nothing.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: Arc<Mutex<HashMap<AdhkarCard, CardAction>>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<AdhkarCard, CardAction>> {
        self.actions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register (or replace) the action for `card`.
    pub fn register(&self, card: AdhkarCard, action: CardAction) {
        trace!(%card, "card action registered");
        self.lock().insert(card, action);
    }

    /// Remove the action for `card`.
    pub fn unregister(&self, card: AdhkarCard) -> bool {
        trace!(%card, "card action unregistered");
        self.lock().remove(&card).is_some()
    }

    /// Check whether `card` has an action.
    #[must_use]
    pub fn is_registered(&self, card: AdhkarCard) -> bool {
        self.lock().contains_key(&card)
    }

    /// Run the action for `card`. Returns `false` if none is registered.
    pub fn invoke(&self, card: AdhkarCard) -> bool {
        let Some(action) = self.lock().get(&card).cloned() else {
            return false;
        };
        action();
        true
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("registered", &self.lock().keys().collect::<Vec<_>>())
            .finish()
    }
}
