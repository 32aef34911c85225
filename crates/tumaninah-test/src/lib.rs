//! Testing harness for Tumaninah widgets.
//!
//! ```ignore
//! use tumaninah_test::Harness;
//!
//! let mut harness = Harness::new(shell);
//! harness.click("#nav-calendar").assert_exists("#panel-calendar");
//! ```

mod harness;
mod selector;

pub use harness::Harness;
pub use selector::{Selector, SelectorError};
