//! SwipeCard Swipe Layer
//!
//! The interaction core of the card deck: which card is on top, whether a
//! card is mid-exit, and when the match celebration shows and goes away.
//!
//! ## Pieces
//!
//! - [`SwipeMachine`] - exclusively owned state plus a transition function
//!   `handle(Event) -> Vec<Effect>`. Pure and synchronous.
//! - [`gesture`] - drag offsets to commit decisions, plus cosmetic tilt and
//!   badge projections that never touch committed state.
//! - [`timer`] - the [`Scheduler`] seam and a deterministic
//!   [`ManualScheduler`] for simulated time.
//! - [`runtime`] - a tokio driver with one abortable task per timer.
//! - [`bio`] - the independent bio panel.
//! - [`deck`] - render projections for the card stack and match overlay.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use profile::{PhotoCategory, PhotoRecord};
//! use swipe::{Direction, Event, ManualScheduler, Phase, SwipeConfig, SwipeMachine};
//!
//! let photo = PhotoRecord {
//!     id: 1,
//!     src: "/assets/images/1.jpg".into(),
//!     alt: "portrait".into(),
//!     category: PhotoCategory::Portrait,
//!     name: "Sergei".into(),
//!     age: 28,
//!     profession: "Engineer".into(),
//! };
//! let mut machine = SwipeMachine::new(vec![photo], SwipeConfig::default());
//! let mut clock = ManualScheduler::new();
//!
//! clock.dispatch(&mut machine, Event::Swipe { direction: Direction::Right });
//! clock.advance(&mut machine, Duration::from_millis(300));
//! assert_eq!(machine.phase(), Phase::MatchShown);
//!
//! clock.advance(&mut machine, Duration::from_secs(4));
//! assert_eq!(machine.phase(), Phase::Exhausted);
//! ```

pub mod bio;
mod config;
pub mod deck;
pub mod gesture;
mod machine;
pub mod runtime;
pub mod timer;

pub use crate::bio::BioPanel;
pub use crate::config::{BioConfig, ConfigError, SwipeConfig};
pub use crate::deck::{deck_view, match_view, DeckView, ExitAnimation, MatchView};
pub use crate::gesture::{Badge, Direction, DragFeedback, DragTracker, Vec2};
pub use crate::machine::{Effect, Event, Phase, SwipeMachine, SwipeState, TimerId, TimerKind};
pub use crate::runtime::{RuntimeError, RuntimeHandle, Snapshot};
pub use crate::timer::{ManualScheduler, Scheduler};
