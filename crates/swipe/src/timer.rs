//! Executing timer effects.
//!
//! The machine only asks for timers; a [`Scheduler`] makes them happen.
//! [`ManualScheduler`] keeps a simulated clock that only moves when told
//! to, which makes every animation delay deterministic under test.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use tracing::trace;

use crate::machine::{Effect, Event, SwipeMachine, TimerId, TimerKind};

/// Host side of the timer effects.
pub trait Scheduler {
    fn schedule(&mut self, timer: TimerId, kind: TimerKind, after: Duration);

    /// Drop a pending timer. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, timer: TimerId);

    /// Carry out a batch of effects; returns true if any asked to render.
    fn execute(&mut self, effects: &[Effect]) -> bool {
        let mut render = false;
        for effect in effects {
            match *effect {
                Effect::Schedule { timer, kind, after } => self.schedule(timer, kind, after),
                Effect::Cancel { timer } => self.cancel(timer),
                Effect::Render => render = true,
            }
        }
        render
    }
}

/// Deterministic scheduler over a simulated clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    queue: BTreeMap<(Duration, TimerId), TimerKind>,
    due: HashMap<TimerId, Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_pending(&self, timer: TimerId) -> bool {
        self.due.contains_key(&timer)
    }

    /// When the earliest pending timer fires, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    /// Feed one event to `machine` and execute the resulting effects.
    pub fn dispatch(&mut self, machine: &mut SwipeMachine, event: Event) -> Vec<Effect> {
        let effects = machine.handle(event);
        self.execute(&effects);
        effects
    }

    /// Move the clock forward by `by`, firing every timer that comes due
    /// in order. Timers scheduled by a firing are honoured within the same
    /// window. Returns the number of timers fired.
    pub fn advance(&mut self, machine: &mut SwipeMachine, by: Duration) -> usize {
        let until = self.now + by;
        let mut fired = 0;
        while let Some(timer) = self.fire_next(until) {
            self.dispatch(machine, Event::TimerElapsed { timer });
            fired += 1;
        }
        self.advance_clock(until);
        fired
    }

    /// Pop the earliest timer due at or before `until` and move the clock
    /// to its deadline. The caller delivers the firing; once this returns
    /// `None`, set the clock with [`advance_clock`](Self::advance_clock).
    pub fn fire_next(&mut self, until: Duration) -> Option<TimerId> {
        let (at, timer) = self.pop_due(until)?;
        self.now = at;
        trace!(timer = timer.get(), at_ms = at.as_millis() as u64, "timer fired");
        Some(timer)
    }

    /// Move the clock to `until` without firing anything; never goes back.
    pub fn advance_clock(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Fire everything pending, however far away.
    pub fn run_until_idle(&mut self, machine: &mut SwipeMachine) -> usize {
        let mut fired = 0;
        while let Some(at) = self.next_due() {
            fired += self.advance(machine, at.saturating_sub(self.now));
        }
        fired
    }

    fn pop_due(&mut self, until: Duration) -> Option<(Duration, TimerId)> {
        let (&key, _) = self.queue.iter().next()?;
        if key.0 > until {
            return None;
        }
        self.queue.remove(&key);
        self.due.remove(&key.1);
        Some(key)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, timer: TimerId, kind: TimerKind, after: Duration) {
        let at = self.now + after;
        self.queue.insert((at, timer), kind);
        self.due.insert(timer, at);
    }

    fn cancel(&mut self, timer: TimerId) {
        if let Some(at) = self.due.remove(&timer) {
            self.queue.remove(&(at, timer));
        }
    }
}
