//! Tumaninah: a dhikr and prayer companion built on one tabs primitive.
//!
//! [`HomeShell`] is the root widget. It shows a splash, then a navigation bar
//! and one panel per section from [`sections`], switching between them through
//! a controlled [`tumaninah_widgets::Tabs`]. Home cards for the morning and
//! evening adhkar first switch to the adhkar list and then, after a short
//! settle delay, open the card on that panel if it is still mounted.
//!
//! ```
//! use tumaninah::{HomeShell, ShellConfig, ShellMessage};
//! use tumaninah_core::{Context, Widget};
//!
//! let mut shell = HomeShell::new(ShellConfig::default());
//! shell.mount(&Context::new());
//! assert!(shell.show_splash());
//!
//! shell.advance(2000);
//! assert!(!shell.show_splash());
//!
//! shell.dispatch(ShellMessage::Activate("calendar".into()));
//! assert_eq!(shell.active_tab(), "calendar");
//! ```

mod config;
mod error;
pub mod logging;
pub mod panels;
mod registry;
mod script;
pub mod sections;
mod shell;
mod state;

pub use config::{PrayerLocation, ShellConfig, Viewport};
pub use error::{ConfigError, ShellError};
pub use registry::{ActionRegistry, AdhkarCard, CardAction};
pub use script::{parse_steps, run_session, Frame, Step};
pub use shell::{HomeShell, TabListener};
pub use state::{ShellMessage, ShellState};
