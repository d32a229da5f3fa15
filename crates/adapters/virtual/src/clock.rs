//! Manual clock running scheduled tasks.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use vitrine_app::ports::Task;

struct Timer {
    due: Duration,
    seq: u64,
    task: Task,
}

/// Virtual time that only moves when [`advance`](Self::advance) is called.
#[derive(Default)]
pub(crate) struct VirtualClock {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
}

impl VirtualClock {
    pub(crate) fn now(&self) -> Duration {
        self.now.get()
    }

    pub(crate) fn pending(&self) -> usize {
        self.timers.borrow().len()
    }

    pub(crate) fn schedule(&self, delay: Duration, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.timers.borrow_mut().push(Timer {
            due: self.now.get() + delay,
            seq,
            task,
        });
    }

    /// Move time forward by `by`, running every task that comes due in
    /// deadline order (scheduling order for equal deadlines). Tasks
    /// scheduled while advancing run too if they come due within the window.
    pub(crate) fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        while let Some(timer) = self.pop_due(target) {
            self.now.set(timer.due);
            (timer.task)();
        }
        self.now.set(target);
    }

    fn pop_due(&self, target: Duration) -> Option<Timer> {
        let mut timers = self.timers.borrow_mut();
        let index = timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= target)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(index, _)| index)?;
        Some(timers.swap_remove(index))
    }
}
