//! Widgets for Tumaninah.
//!
//! - [`tabs`]: the composable tabs primitive
//! - [`Label`], [`Column`] and [`Row`]: the building blocks panels are made of

mod attrs;
mod column;
mod error;
mod label;
mod layout;
mod row;
pub mod tabs;

pub use attrs::{Attributes, ARIA_LABEL, TEST_ID};
pub use column::Column;
pub use error::TabsError;
pub use label::Label;
pub use row::Row;
pub use tabs::{
    ContentMode, ModeKind, TabChanged, TabId, Tabs, TabsContent, TabsList, TabsScope, TabsState,
    TabsTrigger,
};
