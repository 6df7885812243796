use knap_challenges::{KnapsackError, KnapsackResult};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

/// Stop condition for the exact searches: an optional wall-clock limit and an
/// optional flag another thread can raise.
#[derive(Debug, Clone)]
pub struct Deadline {
    start: Instant,
    limit: Option<Duration>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for Deadline {
    fn default() -> Self {
        Self::none()
    }
}

impl Deadline {
    pub fn none() -> Self {
        Self {
            start: Instant::now(),
            limit: None,
            cancel: None,
        }
    }

    pub fn after(limit: Duration) -> Self {
        Self {
            limit: Some(limit),
            ..Self::none()
        }
    }

    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.limit.is_none() && self.cancel.is_none()
    }

    pub fn check(&self) -> KnapsackResult<()> {
        if let Some(cancel) = &self.cancel {
            if cancel.load(Ordering::Relaxed) {
                return Err(KnapsackError::Cancelled);
            }
        }
        if let Some(limit) = self.limit {
            let elapsed = self.start.elapsed();
            if elapsed >= limit {
                return Err(KnapsackError::Timeout { elapsed });
            }
        }
        Ok(())
    }
}
