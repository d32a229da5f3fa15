//! Scheduler port: delayed one-shot tasks on the UI thread.

use std::time::Duration;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce()>;

/// Runs tasks after a delay.
///
/// Tasks scheduled with equal deadlines run in scheduling order. Scheduling
/// is fire-and-forget; cancellation is layered on top with
/// [`CancelToken`](crate::transitions::CancelToken).
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}
