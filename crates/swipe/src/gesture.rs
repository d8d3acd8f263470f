//! Gesture-to-event mapping for the card surface.
//!
//! Drags are read on the horizontal axis only. While a drag is live its
//! offset drives two cosmetic projections, tilt and the Like / Nope badge,
//! which never touch committed state. When the finger lifts,
//! [`DragTracker::end`] hands the machine a single [`Event::DragEnd`].

use serde::{Deserialize, Serialize};

use crate::config::SwipeConfig;
use crate::machine::Event;

/// A 2D pointer quantity: offset in px or velocity in px/s.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal-only vector.
    pub fn horizontal(x: f32) -> Self {
        Self { x, y: 0.0 }
    }
}

/// Which way a card leaves the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Nope.
    Left,
    /// Like.
    Right,
}

impl Direction {
    /// Direction implied by a horizontal offset; zero (or NaN) has none.
    pub fn from_offset(x: f32) -> Option<Direction> {
        if x > 0.0 {
            Some(Direction::Right)
        } else if x < 0.0 {
            Some(Direction::Left)
        } else {
            None
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Overlay stamped on a card mid-drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Like,
    Nope,
}

/// Tilt in degrees for a live drag offset.
pub fn rotation(offset: Vec2, cfg: &SwipeConfig) -> f32 {
    offset.x * cfg.rotation_factor
}

/// Badge for a live drag offset, if any.
pub fn badge(offset: Vec2, cfg: &SwipeConfig) -> Option<Badge> {
    if offset.x > cfg.badge_threshold {
        Some(Badge::Like)
    } else if offset.x < -cfg.badge_threshold {
        Some(Badge::Nope)
    } else {
        None
    }
}

/// Whether a released drag commits, and which way.
///
/// Commits when `|offset.x|` passes the commit distance, or on a fast
/// rightward flick that has travelled at least `flick_min_offset`.
/// The flick rule never applies to the left.
pub fn commit_direction(offset: Vec2, velocity: Vec2, cfg: &SwipeConfig) -> Option<Direction> {
    if offset.x.abs() > cfg.commit_distance {
        return Direction::from_offset(offset.x);
    }
    if offset.x > cfg.flick_min_offset && velocity.x > cfg.flick_velocity {
        return Some(Direction::Right);
    }
    None
}

/// Cosmetic state of a card under the finger.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DragFeedback {
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub badge: Option<Badge>,
}

impl DragFeedback {
    pub fn from_offset(offset: Vec2, cfg: &SwipeConfig) -> Self {
        Self {
            offset,
            rotation_deg: rotation(offset, cfg),
            badge: badge(offset, cfg),
        }
    }
}

/// Tracks one drag from start to release.
///
/// Mirrors the drag-start / drag / drag-end callbacks of a pointer surface.
/// Both start and end reset the live offset, so a released card snaps back
/// to rest unless the machine commits it.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    offset: Vec2,
    direction: Option<Direction>,
    active: bool,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.offset = Vec2::ZERO;
        self.direction = None;
        self.active = true;
    }

    /// Record the latest offset and return its feedback.
    pub fn update(&mut self, offset: Vec2, cfg: &SwipeConfig) -> DragFeedback {
        self.offset = offset;
        self.direction = Some(if offset.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        });
        DragFeedback::from_offset(offset, cfg)
    }

    /// Release the drag; the machine decides whether it commits.
    pub fn end(&mut self, offset: Vec2, velocity: Vec2) -> Event {
        self.reset();
        Event::DragEnd { offset, velocity }
    }

    /// Drop the live drag without producing an event.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.direction = None;
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Direction of the live drag; `None` at rest.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn feedback(&self, cfg: &SwipeConfig) -> DragFeedback {
        DragFeedback::from_offset(self.offset, cfg)
    }
}
