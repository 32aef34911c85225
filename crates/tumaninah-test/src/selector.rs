//! Attribute selectors for widget queries.
//!
//! Supports:
//! - `"#home-card"` - shorthand for a test ID
//! - `"[data-testid='home-card']"` - by test ID
//! - `"[aria-label='Main navigation']"` - by accessible name
//! - `"[role='tab']"` - by accessible role
//! - `"[aria-selected='true']"` - by selection state

use thiserror::Error;
use tumaninah_core::{AccessibleRole, Widget};

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by test ID
    TestId(String),
    /// Match by accessible name
    Label(String),
    /// Match by accessible role
    Role(AccessibleRole),
    /// Match by `aria-selected`
    Selected(bool),
}

/// Errors from [`Selector::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Empty input
    #[error("empty selector")]
    Empty,
    /// Input is neither `#id` nor `[name='value']`
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    /// Missing `=` or `]`
    #[error("malformed attribute selector '{0}'")]
    Malformed(String),
    /// Attribute the harness cannot match on
    #[error("unsupported attribute '{0}'")]
    UnsupportedAttribute(String),
    /// Attribute value that does not parse
    #[error("invalid value '{value}' for '{name}'")]
    InvalidValue {
        /// Attribute name
        name: String,
        /// Offending value
        value: String,
    },
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        let first = input.chars().next().ok_or(SelectorError::Empty)?;

        match first {
            '#' if input.len() > 1 => Ok(Self::TestId(input[1..].to_string())),
            '[' => Self::parse_attribute(input),
            other => Err(SelectorError::UnexpectedChar(other)),
        }
    }

    fn parse_attribute(input: &str) -> Result<Self, SelectorError> {
        let malformed = || SelectorError::Malformed(input.to_string());
        let body = input
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(malformed)?;
        let (name, value) = body.split_once('=').ok_or_else(malformed)?;
        let name = name.trim();
        let value = value.trim().trim_matches(|c| c == '\'' || c == '"');

        match name {
            "data-testid" => Ok(Self::TestId(value.to_string())),
            "aria-label" => Ok(Self::Label(value.to_string())),
            "role" => parse_role(value).map(Self::Role).ok_or_else(|| {
                SelectorError::InvalidValue {
                    name: name.to_string(),
                    value: value.to_string(),
                }
            }),
            "aria-selected" => value.parse().map(Self::Selected).map_err(|_| {
                SelectorError::InvalidValue {
                    name: name.to_string(),
                    value: value.to_string(),
                }
            }),
            other => Err(SelectorError::UnsupportedAttribute(other.to_string())),
        }
    }

    /// Check if this selector matches a widget.
    #[must_use]
    pub fn matches(&self, widget: &dyn Widget) -> bool {
        match self {
            Self::TestId(id) => widget.test_id() == Some(id.as_str()),
            Self::Label(label) => widget.accessible_name() == Some(label.as_str()),
            Self::Role(role) => widget.accessible_role() == *role,
            Self::Selected(selected) => widget.accessible_selected() == Some(*selected),
        }
    }
}

fn parse_role(value: &str) -> Option<AccessibleRole> {
    Some(match value {
        "generic" => AccessibleRole::Generic,
        "button" => AccessibleRole::Button,
        "heading" => AccessibleRole::Heading,
        "menu" => AccessibleRole::Menu,
        "tab" => AccessibleRole::Tab,
        "tablist" => AccessibleRole::TabList,
        "tabpanel" => AccessibleRole::TabPanel,
        "region" => AccessibleRole::Region,
        _ => return None,
    })
}
