//! Tokio driver for a [`SwipeMachine`].
//!
//! One task owns the machine. Inputs arrive over an mpsc channel, every
//! scheduled timer becomes its own sleeping task whose [`JoinHandle`] is kept
//! so it can be aborted, and each render publishes a [`Snapshot`] on a
//! `watch` channel. There is no shared mutable state: callers only ever see
//! snapshots.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::machine::{Event, Phase, SwipeMachine, SwipeState, TimerId, TimerKind};
use crate::timer::Scheduler;

/// State published after every render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub state: SwipeState,
    /// Incremented on every published render.
    pub revision: u64,
}

impl Snapshot {
    fn of(machine: &SwipeMachine, revision: u64) -> Self {
        Self {
            phase: machine.phase(),
            state: machine.state().clone(),
            revision,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("swipe runtime has shut down")]
    Closed,
}

/// Caller side of a running machine.
#[derive(Debug, Clone)]
pub struct RuntimeHandle {
    inputs: mpsc::UnboundedSender<Event>,
    snapshots: watch::Receiver<Snapshot>,
}

impl RuntimeHandle {
    /// Queue an input for the machine.
    pub fn send(&self, event: Event) -> Result<(), RuntimeError> {
        self.inputs.send(event).map_err(|_| RuntimeError::Closed)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Wait until a published snapshot satisfies `pred`.
    pub async fn wait_for(
        &self,
        mut pred: impl FnMut(&Snapshot) -> bool,
    ) -> Result<Snapshot, RuntimeError> {
        let mut rx = self.snapshots.clone();
        let snapshot = rx
            .wait_for(|s| pred(s))
            .await
            .map_err(|_| RuntimeError::Closed)?;
        Ok(snapshot.clone())
    }
}

/// Timers backed by spawned tokio tasks.
struct TaskTimers {
    tasks: HashMap<TimerId, JoinHandle<()>>,
    fired: mpsc::UnboundedSender<TimerId>,
}

impl Scheduler for TaskTimers {
    fn schedule(&mut self, timer: TimerId, kind: TimerKind, after: Duration) {
        let fired = self.fired.clone();
        trace!(timer = timer.get(), ?kind, after_ms = after.as_millis() as u64, "timer scheduled");
        let task = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = fired.send(timer);
        });
        self.tasks.insert(timer, task);
    }

    fn cancel(&mut self, timer: TimerId) {
        if let Some(task) = self.tasks.remove(&timer) {
            task.abort();
            trace!(timer = timer.get(), "timer cancelled");
        }
    }
}

impl TaskTimers {
    fn abort_all(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

/// Spawn the driver task. It runs until every [`RuntimeHandle`] is dropped,
/// then cancels outstanding timers and hands the machine back.
pub fn spawn(machine: SwipeMachine) -> (RuntimeHandle, JoinHandle<SwipeMachine>) {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(Snapshot::of(&machine, 0));

    let task = tokio::spawn(drive(machine, input_rx, snapshot_tx));
    let handle = RuntimeHandle {
        inputs: input_tx,
        snapshots: snapshot_rx,
    };
    (handle, task)
}

async fn drive(
    mut machine: SwipeMachine,
    mut inputs: mpsc::UnboundedReceiver<Event>,
    snapshots: watch::Sender<Snapshot>,
) -> SwipeMachine {
    let (fired_tx, mut fired_rx) = mpsc::unbounded_channel();
    let mut timers = TaskTimers {
        tasks: HashMap::new(),
        fired: fired_tx,
    };
    let mut revision = 0;

    loop {
        let event = tokio::select! {
            input = inputs.recv() => match input {
                Some(event) => event,
                None => break,
            },
            Some(timer) = fired_rx.recv() => {
                timers.tasks.remove(&timer);
                Event::TimerElapsed { timer }
            }
        };

        let effects = machine.handle(event);
        if timers.execute(&effects) {
            revision += 1;
            snapshots.send_replace(Snapshot::of(&machine, revision));
        }
    }

    timers.abort_all();
    debug!("swipe runtime stopped");
    machine
}
