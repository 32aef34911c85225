//! Shell state and messages.

use crate::registry::AdhkarCard;
use crate::sections;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tumaninah_core::{Command, State};
use tumaninah_widgets::TabId;

/// Messages the shell reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellMessage {
    /// Make a tab active (navigation bar, cards, scripts).
    Activate(TabId),
    /// Hide the splash screen.
    DismissSplash,
    /// Switch to the adhkar list and open a card once it has settled.
    OpenCard(AdhkarCard),
    /// Open a card on the adhkar panel, if that panel is still mounted.
    InvokeCard(AdhkarCard),
}

impl ShellMessage {
    /// Tab this message makes active, if any.
    #[must_use]
    pub fn activated_tab(&self) -> Option<TabId> {
        match self {
            Self::Activate(tab) => Some(tab.clone()),
            Self::OpenCard(_) => Some(TabId::from(sections::ADHKAR_LIST)),
            Self::DismissSplash | Self::InvokeCard(_) => None,
        }
    }
}

/// Top-level shell state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    /// Currently shown section
    pub active_tab: TabId,
    /// Splash is up
    pub show_splash: bool,
    /// Delay before a card opens after switching tabs
    pub settle_delay_ms: u64,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(sections::HOME, 100)
    }
}

impl ShellState {
    /// Create the state at mount: splash shown, `initial_tab` behind it.
    pub fn new(initial_tab: impl Into<TabId>, settle_delay_ms: u64) -> Self {
        Self {
            active_tab: initial_tab.into(),
            show_splash: true,
            settle_delay_ms,
        }
    }
}

impl State for ShellState {
    type Message = ShellMessage;

    fn update(&mut self, msg: Self::Message) -> Command<Self::Message> {
        match msg {
            ShellMessage::Activate(tab) => {
                debug!(from = %self.active_tab, to = %tab, "activate");
                self.active_tab = tab;
                Command::None
            }
            ShellMessage::DismissSplash => {
                self.show_splash = false;
                Command::None
            }
            ShellMessage::OpenCard(card) => {
                self.active_tab = TabId::from(sections::ADHKAR_LIST);
                Command::delay(self.settle_delay_ms, ShellMessage::InvokeCard(card))
            }
            ShellMessage::InvokeCard(_) => Command::ScrollToTop,
        }
    }
}
