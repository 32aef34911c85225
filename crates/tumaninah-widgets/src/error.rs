//! Error types for the tabs primitive.

use crate::tabs::ModeKind;
use thiserror::Error;

/// Errors raised by the tabs widgets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabsError {
    /// A tabs sub-component was used without an enclosing `Tabs`.
    #[error("{component} must be used within <Tabs>")]
    ScopeMissing {
        /// Name of the offending component
        component: &'static str,
    },

    /// The owner tried to flip a tabs instance between controlled and
    /// uncontrolled after creation.
    #[error("tabs mode is fixed at creation: cannot switch from {from} to {to}")]
    ModeSwitch {
        /// Mode chosen at creation
        from: ModeKind,
        /// Mode the caller asked for
        to: ModeKind,
    },
}
