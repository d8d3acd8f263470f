//! One visitor's pass through the deck.
//!
//! A [`Session`] glues the data provider to the swipe core: it loads the
//! photos and profile once, owns the [`SwipeMachine`], the [`BioPanel`] and
//! the live [`DragTracker`], and routes every effect through a
//! [`Scheduler`]. Hosts feed UI callbacks in and read a [`SessionView`] out.

use std::time::Duration;

use profile::{DataError, PhotoRecord, ProfileRecord, Storage};
use serde::Serialize;
use swipe::{
    BioPanel, DeckView, Direction, DragFeedback, DragTracker, Event, ManualScheduler, MatchView,
    Phase, Scheduler, SwipeMachine, TimerId, Vec2, deck_view, match_view,
};
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;
use crate::metrics::metrics_recorder;

/// Errors raised while opening a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to load deck: {0}")]
    Data(#[from] DataError),

    #[error("invalid session config: {0}")]
    Config(#[from] crate::config::ConfigLoadError),
}

/// Everything a frame needs to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView<'a> {
    pub phase: Phase,
    pub deck: DeckView<'a>,
    /// Live drag feedback for the top card.
    pub drag: DragFeedback,
    #[serde(rename = "match")]
    pub match_overlay: Option<MatchView<'a>>,
    /// Profile shown in the bio panel, when open.
    pub bio: Option<&'a ProfileRecord>,
}

pub struct Session<S: Scheduler = ManualScheduler> {
    machine: SwipeMachine,
    bio: BioPanel,
    drag: DragTracker,
    profile: ProfileRecord,
    scheduler: S,
}

impl<S: Scheduler> Session<S> {
    /// Build a session from already loaded data.
    pub fn new(
        photos: Vec<PhotoRecord>,
        profile: ProfileRecord,
        config: &AppConfig,
        scheduler: S,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            machine: SwipeMachine::new(photos, config.swipe.clone()),
            bio: BioPanel::new(config.bio.clone()),
            drag: DragTracker::new(),
            profile,
            scheduler,
        })
    }

    /// Load the deck and profile from `storage` and start at the first card.
    pub async fn open(
        storage: &dyn Storage,
        config: &AppConfig,
        scheduler: S,
    ) -> Result<Self, SessionError> {
        let photos = storage.get_photos().await?;
        let profile = storage.get_profile().await?;
        info!(cards = photos.len(), profile = %profile.name, "session opened");
        Self::new(photos, profile, config, scheduler)
    }

    pub fn machine(&self) -> &SwipeMachine {
        &self.machine
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    /// Feed one event to the machine and run its effects.
    /// Returns true when the view changed.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let before = self.machine.phase();
        let effects = self.machine.handle(event);
        let rendered = self.scheduler.execute(&effects);
        if self.machine.is_locked() {
            self.drag.reset();
        }
        if rendered {
            self.observe(event, before, self.machine.phase());
        }
        rendered
    }

    /// Like / Nope button.
    pub fn press(&mut self, direction: Direction) -> bool {
        self.dispatch(Event::Swipe { direction })
    }

    /// Only the top card of an idle deck can be dragged.
    fn draggable(&self) -> bool {
        matches!(self.machine.phase(), Phase::Idle { .. })
    }

    pub fn drag_start(&mut self) {
        if self.draggable() {
            self.drag.start();
        }
    }

    /// Live tilt and badge; neutral when no card can move.
    pub fn drag_move(&mut self, offset: Vec2) -> DragFeedback {
        if !self.draggable() {
            return DragFeedback::default();
        }
        self.drag.update(offset, self.machine.config())
    }

    /// Finger lifted; returns true if the card committed.
    pub fn drag_end(&mut self, offset: Vec2, velocity: Vec2) -> bool {
        let event = self.drag.end(offset, velocity);
        self.dispatch(event)
    }

    /// A timer scheduled through `S` has fired.
    pub fn timer_elapsed(&mut self, timer: TimerId) -> bool {
        self.dispatch(Event::TimerElapsed { timer })
    }

    pub fn close_match(&mut self) -> bool {
        self.dispatch(Event::CloseMatch)
    }

    /// Start over. The match overlay must be closed first.
    pub fn restart(&mut self) -> bool {
        self.dispatch(Event::Restart)
    }

    /// Info button; disabled while a card is leaving.
    pub fn open_bio(&mut self) -> bool {
        self.bio.open_from_info(&self.machine)
    }

    pub fn close_bio(&mut self) -> bool {
        self.bio.close()
    }

    pub fn bio_backdrop_tap(&mut self) -> bool {
        self.bio.backdrop_tap()
    }

    pub fn bio_release(&mut self, offset: Vec2, velocity: Vec2) -> bool {
        self.bio.release_drag(offset, velocity)
    }

    pub fn bio_open(&self) -> bool {
        self.bio.is_open()
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            phase: self.machine.phase(),
            deck: deck_view(&self.machine),
            drag: self.drag.feedback(self.machine.config()),
            match_overlay: match_view(&self.machine),
            bio: self.bio.is_open().then_some(&self.profile),
        }
    }

    fn observe(&self, event: Event, before: Phase, after: Phase) {
        let Some(recorder) = metrics_recorder() else {
            return;
        };
        match (before, after) {
            (Phase::Idle { index }, Phase::Transitioning { direction, .. }) => {
                recorder.record_commit(index, direction);
            }
            (Phase::Transitioning { .. }, Phase::MatchShown) => {
                if let Some(subject) = &self.machine.state().match_subject {
                    recorder.record_match(subject.id);
                }
            }
            _ => {}
        }
        if event == Event::Restart {
            let seen = match before {
                Phase::Idle { index } | Phase::Transitioning { index, .. } => index,
                Phase::Exhausted | Phase::MatchShown => self.machine.len(),
            };
            recorder.record_restart(seen);
        }
    }
}

impl Session<ManualScheduler> {
    /// Advance simulated time, delivering every timer that comes due.
    /// Returns the number of timers fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.scheduler.now() + by;
        let mut fired = 0;
        while let Some(timer) = self.scheduler.fire_next(until) {
            self.timer_elapsed(timer);
            fired += 1;
        }
        self.scheduler.advance_clock(until);
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile::MemStorage;

    async fn seeded() -> Session {
        Session::open(
            &MemStorage::seeded(),
            &AppConfig::default(),
            ManualScheduler::new(),
        )
        .await
        .expect("seeded session")
    }

    #[tokio::test]
    async fn opens_on_first_seed_photo() {
        let session = seeded().await;
        let view = session.view();
        assert_eq!(view.phase, Phase::Idle { index: 0 });
        assert_eq!(view.deck.current.map(|p| p.id), Some(1));
        assert_eq!(view.deck.indicators.len(), 8);
        assert!(view.bio.is_none());
    }

    #[tokio::test]
    async fn invalid_config_is_rejected() {
        let mut config = AppConfig::default();
        config.swipe.settle_ms = 0;
        let result =
            Session::open(&MemStorage::seeded(), &config, ManualScheduler::new()).await;
        assert!(matches!(result, Err(SessionError::Config(_))));
    }

    #[tokio::test]
    async fn drag_feedback_is_cosmetic() {
        let mut session = seeded().await;
        session.drag_start();
        let feedback = session.drag_move(Vec2::horizontal(70.0));
        assert_eq!(feedback.badge, Some(swipe::Badge::Like));
        assert_eq!(session.view().drag.badge, Some(swipe::Badge::Like));
        assert_eq!(session.phase(), Phase::Idle { index: 0 });

        assert!(!session.drag_end(Vec2::horizontal(70.0), Vec2::ZERO));
        assert_eq!(session.view().drag.badge, None);
        assert_eq!(session.phase(), Phase::Idle { index: 0 });
    }

    #[tokio::test]
    async fn drag_is_inert_while_card_leaves() {
        let mut session = seeded().await;
        session.press(Direction::Left);
        session.drag_start();
        let feedback = session.drag_move(Vec2::horizontal(90.0));
        assert_eq!(feedback, DragFeedback::default());
        assert_eq!(session.view().drag.badge, None);
        assert!(matches!(session.phase(), Phase::Transitioning { .. }));
    }

    #[tokio::test]
    async fn commit_clears_live_drag() {
        let mut session = seeded().await;
        session.drag_start();
        session.drag_move(Vec2::horizontal(-70.0));
        assert_eq!(session.view().drag.badge, Some(swipe::Badge::Nope));

        session.press(Direction::Left);
        assert_eq!(session.view().drag.badge, None);
        assert_eq!(session.view().drag.rotation_deg, 0.0);
    }

    #[tokio::test]
    async fn drag_is_inert_on_exhausted_deck() {
        let mut session = Session::new(
            Vec::new(),
            seeded().await.profile().clone(),
            &AppConfig::default(),
            ManualScheduler::new(),
        )
        .expect("empty session");
        assert_eq!(session.phase(), Phase::Exhausted);

        session.drag_start();
        assert_eq!(session.drag_move(Vec2::horizontal(90.0)).badge, None);
        assert_eq!(session.view().drag, DragFeedback::default());
    }

    #[tokio::test]
    async fn bio_opens_and_shows_profile() {
        let mut session = seeded().await;
        assert!(session.open_bio());
        assert_eq!(session.view().bio.map(|p| p.name.as_str()), Some("Sergei"));
        assert!(session.bio_release(Vec2::new(0.0, 120.0), Vec2::ZERO));
        assert!(!session.bio_open());
    }

    #[tokio::test]
    async fn info_is_disabled_while_card_leaves() {
        let mut session = seeded().await;
        session.press(Direction::Left);
        assert!(!session.open_bio());
        session.advance(Duration::from_millis(300));
        assert!(session.open_bio());
    }
}
