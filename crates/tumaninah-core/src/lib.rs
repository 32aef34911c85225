//! Core types and traits for the Tumaninah UI shell.
//!
//! This crate provides foundational types used throughout Tumaninah:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`], [`Palette`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - The [`Widget`] trait, [`Canvas`] and a [`RecordingCanvas`]
//! - Subtree value sharing: [`Context`]
//! - Elm-style state: [`State`], [`Command`]
//! - Fire-once timers: [`Scheduler`]

mod canvas;
mod color;
mod constraints;
mod context;
mod event;
mod geometry;
mod state;
mod timer;
pub mod widget;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::{Color, ColorParseError, Palette};
pub use constraints::Constraints;
pub use context::Context;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use state::{Command, State};
pub use timer::{Scheduler, TimerId};
pub use widget::{AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget};
