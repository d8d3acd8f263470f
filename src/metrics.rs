use std::sync::{Arc, OnceLock, RwLock};

use swipe::Direction;

/// Observer for deck progress across every session in the process.
pub trait SwipeMetrics: Send + Sync {
    /// A card at `index` started leaving towards `direction`.
    fn record_commit(&self, index: usize, direction: Direction);
    /// The match overlay was shown for photo `subject_id`.
    fn record_match(&self, subject_id: u32);
    /// The visitor started over after seeing `cards_seen` cards.
    fn record_restart(&self, cards_seen: usize);
}

/// Install or clear the global swipe metrics recorder.
pub fn set_swipe_metrics(recorder: Option<Arc<dyn SwipeMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn SwipeMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn SwipeMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn SwipeMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}
