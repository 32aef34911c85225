//! State management for Tumaninah applications.
//!
//! This module implements the Elm Architecture pattern for predictable state
//! management: `State + Message → (State, Command)`.
//!
//! # Examples
//!
//! ```
//! use tumaninah_core::{Command, State};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Default, Serialize, Deserialize)]
//! struct Beads {
//!     count: u32,
//! }
//!
//! enum BeadsMessage {
//!     Tap,
//!     Reset,
//! }
//!
//! impl State for Beads {
//!     type Message = BeadsMessage;
//!
//!     fn update(&mut self, msg: Self::Message) -> Command<Self::Message> {
//!         match msg {
//!             BeadsMessage::Tap => self.count += 1,
//!             BeadsMessage::Reset => self.count = 0,
//!         }
//!         Command::None
//!     }
//! }
//!
//! let mut beads = Beads::default();
//! beads.update(BeadsMessage::Tap);
//! assert_eq!(beads.count, 1);
//! ```

use serde::{Deserialize, Serialize};

/// Application state trait.
///
/// Implements the Elm Architecture: State + Message → (State, Command)
pub trait State: Clone + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    /// Message type for state updates
    type Message: Send;

    /// Update state in response to a message.
    ///
    /// Returns a command for side effects (deferred messages, scrolling).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;
}

/// Commands for side effects.
///
/// Commands describe effects the runtime performs after a state update; the
/// state itself never touches timers or the viewport.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Command<M> {
    /// No command
    #[default]
    None,
    /// Execute multiple commands
    Batch(Vec<Command<M>>),
    /// Deliver `message` once, `after_ms` milliseconds from now
    Delay {
        /// Delay in milliseconds
        after_ms: u64,
        /// Message to deliver
        message: M,
    },
    /// Scroll the viewport back to the top
    ScrollToTop,
}

impl<M> Command<M> {
    /// Create a delayed message command.
    pub const fn delay(after_ms: u64, message: M) -> Self {
        Self::Delay { after_ms, message }
    }

    /// Create a batch of commands.
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        Self::Batch(commands.into_iter().collect())
    }

    /// Check if this is the none command.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Map the message type using a function.
    pub fn map<N, F>(self, f: F) -> Command<N>
    where
        F: Fn(M) -> N,
    {
        self.map_inner(&f)
    }

    fn map_inner<N>(self, f: &dyn Fn(M) -> N) -> Command<N> {
        match self {
            Self::None => Command::None,
            Self::Batch(cmds) => Command::Batch(cmds.into_iter().map(|c| c.map_inner(f)).collect()),
            Self::Delay { after_ms, message } => Command::Delay {
                after_ms,
                message: f(message),
            },
            Self::ScrollToTop => Command::ScrollToTop,
        }
    }

    /// Flatten nested batches into a single ordered list of leaf commands.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::None => Vec::new(),
            Self::Batch(cmds) => cmds.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct Counter {
        count: i32,
    }

    enum CounterMessage {
        Increment,
        IncrementLater,
    }

    impl State for Counter {
        type Message = CounterMessage;

        fn update(&mut self, msg: Self::Message) -> Command<Self::Message> {
            match msg {
                CounterMessage::Increment => {
                    self.count += 1;
                    Command::None
                }
                CounterMessage::IncrementLater => Command::delay(10, CounterMessage::Increment),
            }
        }
    }

    #[test]
    fn test_update_returns_command() {
        let mut counter = Counter::default();
        assert!(counter.update(CounterMessage::Increment).is_none());
        assert_eq!(counter.count, 1);

        let cmd = counter.update(CounterMessage::IncrementLater);
        assert!(matches!(cmd, Command::Delay { after_ms: 10, .. }));
        assert_eq!(counter.count, 1);
    }

    #[test]
    fn test_command_default_is_none() {
        let cmd: Command<()> = Command::default();
        assert!(cmd.is_none());
    }

    #[test]
    fn test_map_preserves_shape() {
        let cmd = Command::batch([Command::delay(5, 2), Command::ScrollToTop]);
        let mapped = cmd.map(|n: i32| n.to_string());
        assert_eq!(
            mapped,
            Command::Batch(vec![
                Command::delay(5, "2".to_string()),
                Command::ScrollToTop
            ])
        );
    }

    #[test]
    fn test_flatten_nested_batches() {
        let cmd = Command::batch([
            Command::None,
            Command::batch([Command::delay(1, 'a'), Command::None]),
            Command::ScrollToTop,
            Command::delay(2, 'b'),
        ]);
        assert_eq!(
            cmd.flatten(),
            vec![
                Command::delay(1, 'a'),
                Command::ScrollToTop,
                Command::delay(2, 'b')
            ]
        );
    }
}
