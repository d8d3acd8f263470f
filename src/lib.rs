//! Workspace umbrella crate for SwipeCard.
//!
//! This crate stitches the profile data provider and the swipe core together
//! so a host can open a [`Session`] over any [`Storage`], feed it UI
//! callbacks and draw from [`Session::view`].
//!
//! ```
//! use std::time::Duration;
//! use swipecard::{AppConfig, Direction, ManualScheduler, MemStorage, Phase, Session};
//!
//! let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let mut session = runtime
//!     .block_on(Session::open(
//!         &MemStorage::seeded(),
//!         &AppConfig::default(),
//!         ManualScheduler::new(),
//!     ))
//!     .unwrap();
//!
//! session.press(Direction::Left);
//! session.advance(Duration::from_millis(300));
//! assert_eq!(session.phase(), Phase::Idle { index: 1 });
//! ```

pub mod config;
mod metrics;
mod session;

pub use crate::config::{AppConfig, ConfigLoadError};
pub use crate::metrics::{SwipeMetrics, set_swipe_metrics};
pub use crate::session::{Session, SessionError, SessionView};

pub use profile::{
    DataError, MemStorage, PhotoCategory, PhotoRecord, ProfileRecord, SocialLink, Storage,
    age_on, current_age,
};
pub use swipe::{
    Badge, BioConfig, BioPanel, DeckView, Direction, DragFeedback, Effect, Event, ExitAnimation,
    ManualScheduler, MatchView, Phase, Scheduler, SwipeConfig, SwipeMachine, SwipeState, TimerId,
    TimerKind, Vec2,
};
