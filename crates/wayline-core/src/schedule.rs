//! Deferred one-shot task scheduling on a virtual clock.
//!
//! The router re-enables itself a fixed delay after a cancelled navigation.
//! A wall-clock timer would make that behavior untestable, so the delay is
//! modeled as an explicit scheduled task: the host advances the clock with
//! [`Scheduler::advance`] and receives the tasks that came due, and every
//! task can be cancelled through the [`TaskHandle`] returned when it was
//! scheduled.

use std::time::Duration;

use tracing::trace;

/// Identifies a scheduled task so it can be cancelled before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Pending<T> {
    handle: TaskHandle,
    due_at: Duration,
    task: T,
}

/// A deterministic one-shot task scheduler.
///
/// Time is virtual: it only moves when [`advance`](Self::advance) is called.
/// Due tasks fire in due-time order; tasks sharing a due time fire in
/// scheduling order.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wayline_core::schedule::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// let handle = scheduler.schedule_in(Duration::from_millis(100), "re-enable");
///
/// assert!(scheduler.advance(Duration::from_millis(99)).is_empty());
/// assert_eq!(scheduler.advance(Duration::from_millis(1)), vec!["re-enable"]);
/// assert!(!scheduler.cancel(handle)); // already fired
/// ```
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_handle: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Scheduler<T> {
    /// Creates an empty scheduler with the clock at zero.
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_handle: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time, accumulated over all [`advance`](Self::advance)
    /// calls.
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `task` to fire once `delay` has elapsed on the virtual
    /// clock. Returns a handle that cancels the task while it is pending.
    pub fn schedule_in(&mut self, delay: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Pending {
            handle,
            due_at: self.now + delay,
            task,
        });
        trace!(handle = handle.0, ?delay, "task scheduled");
        handle
    }

    /// Cancels a pending task. Returns `true` if the task was still pending,
    /// `false` if it had already fired or was cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|pending| pending.handle != handle);
        let cancelled = self.pending.len() != before;
        if cancelled {
            trace!(handle = handle.0, "task cancelled");
        }
        cancelled
    }

    /// Advances the virtual clock by `elapsed` and returns every task whose
    /// due time has been reached, in firing order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        self.now += elapsed;
        let now = self.now;
        let (mut due, remaining): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|pending| pending.due_at <= now);
        self.pending = remaining;
        // Stable sort: equal due times keep scheduling order.
        due.sort_by_key(|pending| pending.due_at);
        due.into_iter().map(|pending| pending.task).collect()
    }

    /// Number of tasks waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// True when no task is waiting.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
