//! Headless sessions driven by scripted steps.
//!
//! A step is `tab:<id>`, `card:morning|evening` or `wait:<ms>`. A session
//! mounts a [`HomeShell`], lets the splash run out, applies each step and
//! records one [`Frame`] after it.

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::registry::AdhkarCard;
use crate::shell::HomeShell;
use crate::state::ShellMessage;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};
use tumaninah_core::{Context, Rect, RecordingCanvas, Widget};
use tumaninah_widgets::TabId;

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Activate a tab, as the navigation bar does.
    Tab(TabId),
    /// Press a home card.
    Card(AdhkarCard),
    /// Let virtual time pass.
    Wait(u64),
}

impl FromStr for Step {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ShellError::InvalidStep {
            step: s.to_string(),
            reason,
        };
        let Some((kind, arg)) = s.split_once(':') else {
            return Err(invalid("expected tab:<id>, card:<name> or wait:<ms>"));
        };

        match kind {
            "tab" if arg.is_empty() => Err(invalid("tab id must not be empty")),
            "tab" => Ok(Self::Tab(TabId::from(arg))),
            "card" => arg.parse().map(Self::Card).map_err(invalid),
            "wait" => arg
                .parse()
                .map(Self::Wait)
                .map_err(|_| invalid("wait needs a number of milliseconds")),
            _ => Err(invalid("expected tab:<id>, card:<name> or wait:<ms>")),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tab(tab) => write!(f, "tab:{tab}"),
            Self::Card(card) => write!(f, "card:{card}"),
            Self::Wait(ms) => write!(f, "wait:{ms}"),
        }
    }
}

/// Parse every step, failing on the first invalid one.
pub fn parse_steps<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Step>, ShellError> {
    raw.iter().map(|step| step.as_ref().parse()).collect()
}

/// Snapshot taken after a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Step that produced the frame (`start` for the first one)
    pub step: String,
    /// Virtual time of the snapshot
    pub at_ms: u64,
    /// Section shown
    pub active_tab: TabId,
    /// Text runs painted, in paint order
    pub texts: Vec<String>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:>6}ms] {:<16} {}: {}",
            self.at_ms,
            self.step,
            self.active_tab,
            self.texts.join(" | ")
        )
    }
}

fn snapshot(shell: &mut HomeShell, viewport: Rect, step: String) -> Frame {
    shell.layout(viewport);
    let mut canvas = RecordingCanvas::new();
    shell.paint(&mut canvas);
    Frame {
        step,
        at_ms: shell.now_ms(),
        active_tab: shell.active_tab().clone(),
        texts: canvas.texts().into_iter().map(str::to_string).collect(),
    }
}

/// Run `steps` against a fresh shell and return the frames.
pub fn run_session(config: &ShellConfig, steps: &[Step]) -> Vec<Frame> {
    let viewport = Rect::new(0.0, 0.0, config.viewport.width, config.viewport.height);
    let mut shell = HomeShell::new(config.clone());
    shell.mount(&Context::new());
    shell.advance(config.splash_delay_ms);
    info!(steps = steps.len(), "session started");

    let mut frames = Vec::with_capacity(steps.len() + 1);
    frames.push(snapshot(&mut shell, viewport, "start".to_string()));
    for step in steps {
        debug!(%step, "applying step");
        match step {
            Step::Tab(tab) => shell.dispatch(ShellMessage::Activate(tab.clone())),
            Step::Card(card) => shell.open_card(*card),
            Step::Wait(ms) => shell.advance(*ms),
        }
        frames.push(snapshot(&mut shell, viewport, step.to_string()));
    }

    shell.unmount();
    frames
}
