//! The swipe-interaction state machine.
//!
//! [`SwipeMachine`] exclusively owns the [`SwipeState`] for one session.
//! Every input arrives as an [`Event`]; [`SwipeMachine::handle`] mutates the
//! state and returns the side effects the host must carry out. The machine
//! never sleeps or spawns anything itself. Timer delays come back in as
//! [`Event::TimerElapsed`] carrying the [`TimerId`] they were scheduled under.
//!
//! ```text
//!            swipe (commit)              settle, i+1 < N
//!  Idle(i) ─────────────────▶ Transitioning ─────────────────▶ Idle(i+1)
//!     ▲                            │    │
//!     │                settle, last, left   settle, last, right
//!     │ restart                    ▼    ▼
//!  Exhausted ◀── close / dismiss ── MatchShown
//! ```

use std::time::Duration;

use profile::PhotoRecord;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::SwipeConfig;
use crate::gesture::{commit_direction, Direction, Vec2};


/// Handle of a scheduled timer. Ids are never reused within a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimerId(u64);

impl TimerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// What a scheduled timer stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// Exit animation of the committed card.
    Settle,
    /// Auto-close of the match overlay.
    MatchDismiss,
}

/// Input to the machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Like / Nope button press.
    Swipe { direction: Direction },
    /// Finger lifted after a drag.
    DragEnd { offset: Vec2, velocity: Vec2 },
    /// A previously scheduled timer fired.
    TimerElapsed { timer: TimerId },
    /// Match overlay closed by the user.
    CloseMatch,
    /// Start over from the first card.
    ///
    /// Meant for the exhausted screen, but also accepted from `Idle` and
    /// `Transitioning` (logged as a warning): pending timers are cancelled
    /// and the deck resets. Not allowed while the match overlay shows.
    Restart,
}

/// Side-effect intent for the host to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `Event::TimerElapsed { timer }` after `after`.
    Schedule {
        timer: TimerId,
        kind: TimerKind,
        after: Duration,
    },
    /// Drop a pending timer; it must not fire.
    Cancel { timer: TimerId },
    /// State changed; re-render from a fresh snapshot.
    Render,
}

/// Observable phase, derived from [`SwipeState`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Idle {
        index: usize,
    },
    Transitioning {
        index: usize,
        direction: Direction,
        magnitude: f32,
    },
    Exhausted,
    MatchShown,
}

/// Committed state of one swipe session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwipeState {
    /// Card on top; equal to the deck length once exhausted.
    pub current_index: usize,
    /// True strictly while an exit transition is in flight.
    pub is_locked: bool,
    pub pending_direction: Option<Direction>,
    /// Exit offset of the leaving card; zero at rest.
    pub exit_magnitude: f32,
    pub match_visible: bool,
    /// Photo captured when the final card was liked.
    pub match_subject: Option<PhotoRecord>,
    #[serde(skip)]
    settle_timer: Option<TimerId>,
    #[serde(skip)]
    dismiss_timer: Option<TimerId>,
}

impl SwipeState {
    fn initial() -> Self {
        Self {
            current_index: 0,
            is_locked: false,
            pending_direction: None,
            exit_magnitude: 0.0,
            match_visible: false,
            match_subject: None,
            settle_timer: None,
            dismiss_timer: None,
        }
    }

    /// Pending exit-animation timer, if a transition is in flight.
    pub fn settle_timer(&self) -> Option<TimerId> {
        self.settle_timer
    }

    /// Pending auto-dismiss timer, if the match overlay is up.
    pub fn dismiss_timer(&self) -> Option<TimerId> {
        self.dismiss_timer
    }
}

/// Drives card progression, transition locking and match timing.
#[derive(Debug, Clone)]
pub struct SwipeMachine {
    photos: Vec<PhotoRecord>,
    config: SwipeConfig,
    state: SwipeState,
    next_timer: u64,
}

impl SwipeMachine {
    /// Start a session over `photos`. An empty deck starts exhausted.
    pub fn new(photos: Vec<PhotoRecord>, config: SwipeConfig) -> Self {
        debug!(cards = photos.len(), "swipe session created");
        Self {
            photos,
            config,
            state: SwipeState::initial(),
            next_timer: 0,
        }
    }

    pub fn state(&self) -> &SwipeState {
        &self.state
    }

    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked
    }

    /// The info button is disabled while a card is leaving.
    pub fn info_enabled(&self) -> bool {
        !self.state.is_locked
    }

    /// Card on top of the stack, if any.
    pub fn current(&self) -> Option<&PhotoRecord> {
        self.photos.get(self.state.current_index)
    }

    pub fn phase(&self) -> Phase {
        let s = &self.state;
        if s.match_visible {
            Phase::MatchShown
        } else if s.current_index >= self.photos.len() {
            Phase::Exhausted
        } else if let (true, Some(direction)) = (s.is_locked, s.pending_direction) {
            Phase::Transitioning {
                index: s.current_index,
                direction,
                magnitude: s.exit_magnitude,
            }
        } else {
            Phase::Idle {
                index: s.current_index,
            }
        }
    }

    /// Apply one event and return the effects to execute, in order.
    ///
    /// Input that does not apply to the current phase (a swipe while
    /// locked, a close with no overlay, a stale timer) is dropped and
    /// yields no effects.
    ///
    /// # Panics
    ///
    /// In debug builds, `Event::Restart` while the match overlay is shown
    /// panics: the overlay must be closed before restarting.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Swipe { direction } => {
                if !self.accepts_swipe() {
                    return Vec::new();
                }
                self.commit(direction)
            }
            Event::DragEnd { offset, velocity } => {
                if !self.accepts_swipe() {
                    return Vec::new();
                }
                match commit_direction(offset, velocity, &self.config) {
                    Some(direction) => self.commit(direction),
                    None => {
                        trace!(offset_x = offset.x, "drag released below threshold");
                        Vec::new()
                    }
                }
            }
            Event::TimerElapsed { timer } => {
                if self.state.settle_timer == Some(timer) {
                    self.settle()
                } else if self.state.dismiss_timer == Some(timer) {
                    self.state.dismiss_timer = None;
                    debug!("match overlay auto-dismissed");
                    self.close_match()
                } else {
                    trace!(timer = timer.get(), "stale timer ignored");
                    Vec::new()
                }
            }
            Event::CloseMatch => {
                if !self.state.match_visible {
                    return Vec::new();
                }
                let mut effects = Vec::with_capacity(2);
                if let Some(timer) = self.state.dismiss_timer.take() {
                    effects.push(Effect::Cancel { timer });
                }
                debug!("match overlay closed");
                effects.extend(self.close_match());
                effects
            }
            Event::Restart => self.restart(),
        }
    }

    fn accepts_swipe(&self) -> bool {
        if self.state.is_locked {
            trace!("input dropped while locked");
            return false;
        }
        matches!(self.phase(), Phase::Idle { .. })
    }

    fn commit(&mut self, direction: Direction) -> Vec<Effect> {
        let index = self.state.current_index;
        let last = index + 1 == self.photos.len();
        let magnitude = match direction {
            Direction::Right if last => self.config.farewell_distance,
            Direction::Right => self.config.exit_distance,
            Direction::Left => -self.config.exit_distance,
        };

        // Captured now: the index moves on before the overlay renders.
        if last && direction == Direction::Right {
            self.state.match_subject = self.photos.get(index).cloned();
        }

        let timer = self.allocate_timer();
        self.state.is_locked = true;
        self.state.pending_direction = Some(direction);
        self.state.exit_magnitude = magnitude;
        self.state.settle_timer = Some(timer);

        debug!(index, ?direction, magnitude, "card committed");
        vec![
            Effect::Schedule {
                timer,
                kind: TimerKind::Settle,
                after: self.config.settle(),
            },
            Effect::Render,
        ]
    }

    fn settle(&mut self) -> Vec<Effect> {
        let direction = self.state.pending_direction.take();
        self.state.settle_timer = None;
        self.state.is_locked = false;
        self.state.exit_magnitude = 0.0;
        self.state.current_index += 1;

        if self.state.current_index < self.photos.len() {
            debug!(index = self.state.current_index, "next card");
            return vec![Effect::Render];
        }

        if direction == Some(Direction::Right) {
            let timer = self.allocate_timer();
            self.state.match_visible = true;
            self.state.dismiss_timer = Some(timer);
            debug!(
                subject = self.state.match_subject.as_ref().map(|p| p.id),
                "match shown"
            );
            vec![
                Effect::Schedule {
                    timer,
                    kind: TimerKind::MatchDismiss,
                    after: self.config.match_dismiss(),
                },
                Effect::Render,
            ]
        } else {
            debug!("deck exhausted");
            vec![Effect::Render]
        }
    }

    fn close_match(&mut self) -> Vec<Effect> {
        self.state.match_visible = false;
        self.state.match_subject = None;
        vec![Effect::Render]
    }

    fn restart(&mut self) -> Vec<Effect> {
        debug_assert!(
            !self.state.match_visible,
            "restart requires the match overlay to be closed first"
        );
        if !matches!(self.phase(), Phase::Exhausted) {
            warn!(phase = ?self.phase(), "restart outside the exhausted screen");
        }

        let mut effects = Vec::with_capacity(3);
        for timer in [self.state.settle_timer, self.state.dismiss_timer]
            .into_iter()
            .flatten()
        {
            effects.push(Effect::Cancel { timer });
        }
        self.state = SwipeState::initial();
        debug!("session restarted");
        effects.push(Effect::Render);
        effects
    }

    fn allocate_timer(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }
}
