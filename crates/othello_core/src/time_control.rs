//! Search limits shared by all engines.
//!
//! A depth-3 Othello search finishes in well under a millisecond, so the
//! default limits carry no clock at all. The wall-clock budget exists for
//! deeper configurations, where the branching factor makes node counts grow
//! quickly and an engine must be able to bail out with its best-so-far move.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 3;

/// Constraints on a single `Engine::search` call.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u8,
    /// Maximum time allowed for this move (None = unbounded)
    pub move_time: Option<Duration>,
    /// Shared stop signal for the search
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Depth-only limits, no clock.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Depth plus a per-move wall-clock budget.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Start the clock. Call when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(DEFAULT_DEPTH)
    }
}

/// Cheaply cloneable stop signal with an optional deadline.
///
/// `is_stopped` is a relaxed atomic load and may be called on every node;
/// `poll` does the actual clock read and should be called every
/// `CHECK_INTERVAL` nodes.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    started_at: Arc<RwLock<Option<Instant>>>,
    time_limit: Option<Duration>,
}

/// How often (in nodes) searches should consult the clock.
pub const CHECK_INTERVAL: u64 = 1024;

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            started_at: Arc::new(RwLock::new(None)),
            time_limit,
        }
    }

    pub fn start(&self) {
        *self.started_at.write().unwrap() = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Consults the clock if `nodes` is a check boundary; returns true when
    /// the search should stop.
    pub fn poll(&self, nodes: u64) -> bool {
        if self.is_stopped() {
            return true;
        }
        if nodes % CHECK_INTERVAL != 0 {
            return false;
        }
        if let Some(limit) = self.time_limit {
            let started = *self.started_at.read().unwrap();
            if let Some(start) = started {
                if start.elapsed() >= limit {
                    self.stop();
                    return true;
                }
            }
        }
        false
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
