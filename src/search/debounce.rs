// ABOUTME: Cancellable scheduled tasks and a debouncer that keeps only the latest one
// ABOUTME: Built on tokio tasks; only a call still waiting for its delay can be cancelled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;

/// Handle to a task started by [`schedule`]
///
/// The task and [`ScheduledHandle::cancel`] race for a single claim. Whoever
/// takes it first decides: the task runs to completion, or it never starts.
#[derive(Debug)]
pub struct ScheduledHandle {
    task: JoinHandle<()>,
    claimed: Arc<AtomicBool>,
}

impl ScheduledHandle {
    /// Cancel the task if its delay has not expired yet.
    ///
    /// A task that already started is left to finish.
    pub fn cancel(&self) {
        if claim(&self.claimed) {
            self.task.abort();
        }
    }

    /// The delay expired and the task started (or was cancelled)
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }

    /// The task ran to completion or was cancelled
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

fn claim(flag: &AtomicBool) -> bool {
    flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
}

/// Run `task` after `delay` unless the returned handle is cancelled first.
///
/// Must be called from within a tokio runtime.
pub fn schedule<F, Fut>(task: F, delay: Duration) -> ScheduledHandle
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let claimed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&claimed);
    let task = tokio::spawn(async move {
        time::sleep(delay).await;
        if claim(&flag) {
            task().await;
        }
    });
    ScheduledHandle { task, claimed }
}

/// Keeps at most one pending scheduled task; scheduling again cancels the previous one
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<ScheduledHandle>>,
}

impl Debouncer {
    /// Debouncer with a fixed delay
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Configured delay
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel the pending task, if any, and schedule `task`.
    ///
    /// A previous task whose delay already expired keeps running.
    pub fn call<F, Fut>(&self, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.cancel();
        }
        *pending = Some(schedule(task, self.delay));
    }

    /// Cancel the pending task, if any
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.cancel();
        }
    }

    /// A scheduled task is still waiting for its delay
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.has_fired())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
