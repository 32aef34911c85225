//! Panels and chrome of the shell.
//!
//! Every section is a self-contained widget; the shell places each inside a
//! `TabsContent` keyed by its section id.

mod adhkar;
mod card;
mod chat;
mod home;
mod info;
mod nav;
mod splash;

pub use adhkar::AdhkarPanel;
pub use card::NavCard;
pub use chat::FloatingChat;
pub use home::{home, HERO_TEXT, HERO_TITLE};
pub use info::{about, calendar, dashboard, prayer_times, share, tasbih};
pub use nav::{nav_bar, MORE, PRIMARY};
pub use splash::{Splash, TAGLINE, TITLE};
