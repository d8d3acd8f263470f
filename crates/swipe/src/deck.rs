//! Read-only render projections of the machine.
//!
//! The card renderer and the match overlay are pure functions of machine
//! state. Nothing here mutates anything.

use std::time::Duration;

use profile::PhotoRecord;
use serde::Serialize;

use crate::machine::SwipeMachine;

pub const MATCH_HEADLINE: &str = "IT'S A MATCH!";

/// How the top card leaves the stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExitAnimation {
    /// Horizontal travel in px; sign gives the direction.
    pub x: f32,
    pub rotate_deg: f32,
    pub duration: Duration,
}

/// What the card area shows for the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckView<'a> {
    pub current: Option<&'a PhotoRecord>,
    /// Dimmed preview under the top card, only when another card follows.
    pub next: Option<&'a PhotoRecord>,
    /// Progress dots, one per photo; the active one marks the top card.
    pub indicators: Vec<bool>,
    pub exit: Option<ExitAnimation>,
    /// "That's all for now" screen with the start-over button.
    pub exhausted: bool,
    pub info_enabled: bool,
}

/// Contents of the match celebration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchView<'a> {
    pub subject: &'a PhotoRecord,
    pub headline: &'static str,
    pub message: String,
}

pub fn deck_view(machine: &SwipeMachine) -> DeckView<'_> {
    let state = machine.state();
    let photos = machine.photos();
    let index = state.current_index;
    let current = photos.get(index);

    let exit = state.pending_direction.map(|_| {
        let cfg = machine.config();
        ExitAnimation {
            x: state.exit_magnitude,
            rotate_deg: cfg.exit_rotation_deg.copysign(state.exit_magnitude),
            duration: cfg.settle(),
        }
    });

    DeckView {
        current,
        next: current.and_then(|_| photos.get(index + 1)),
        indicators: match current {
            Some(_) => (0..photos.len()).map(|i| i == index).collect(),
            None => Vec::new(),
        },
        exit,
        exhausted: current.is_none(),
        info_enabled: machine.info_enabled(),
    }
}

/// The match overlay, if it is showing.
pub fn match_view(machine: &SwipeMachine) -> Option<MatchView<'_>> {
    let state = machine.state();
    if !state.match_visible {
        return None;
    }
    let subject = state.match_subject.as_ref()?;
    Some(MatchView {
        subject,
        headline: MATCH_HEADLINE,
        message: format!("You and {} have liked each other!", subject.name),
    })
}
