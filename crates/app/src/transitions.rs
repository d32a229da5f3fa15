//! Cancellable multi-step transitions.
//!
//! A transition is a chain of scheduled follow-ups sharing one
//! [`CancelToken`]. Starting a new transition for the same key cancels the
//! previous token, so stale follow-ups become no-ops when they fire.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;
use std::time::Duration;

use crate::ports::{Scheduler, Task};

/// Shared cancellation flag for the follow-ups of one transition.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    /// Wrap `task` so it only runs if this token is still live.
    #[must_use]
    pub fn guard(&self, task: impl FnOnce() + 'static) -> Task {
        let token = self.clone();
        Box::new(move || {
            if token.is_cancelled() {
                tracing::trace!("skipping cancelled follow-up");
            } else {
                task();
            }
        })
    }

    /// Schedule a guarded follow-up on `scheduler`.
    pub fn schedule<S>(&self, scheduler: &S, delay: Duration, task: impl FnOnce() + 'static)
    where
        S: Scheduler + ?Sized,
    {
        scheduler.schedule(delay, self.guard(task));
    }
}

/// Pending transition tokens, one per target.
#[derive(Debug)]
pub struct Transitions<K> {
    pending: RefCell<HashMap<K, CancelToken>>,
}

impl<K> Default for Transitions<K> {
    fn default() -> Self {
        Self {
            pending: RefCell::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash> Transitions<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new transition for `key`, cancelling the previous one.
    pub fn begin(&self, key: K) -> CancelToken {
        let token = CancelToken::new();
        if let Some(previous) = self.pending.borrow_mut().insert(key, token.clone()) {
            previous.cancel();
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct QueueScheduler {
        tasks: RefCell<Vec<(Duration, Task)>>,
    }

    impl Scheduler for QueueScheduler {
        fn schedule(&self, delay: Duration, task: Task) {
            self.tasks.borrow_mut().push((delay, task));
        }
    }

    impl QueueScheduler {
        fn run_all(&self) {
            let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
            for (_, task) in tasks {
                task();
            }
        }
    }

    #[test]
    fn should_run_guarded_task_when_live() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let task = CancelToken::new().guard(move || flag.set(true));
        task();
        assert!(ran.get());
    }

    #[test]
    fn should_skip_guarded_task_when_cancelled() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let token = CancelToken::new();
        let task = token.guard(move || flag.set(true));
        token.cancel();
        task();
        assert!(!ran.get());
    }

    #[test]
    fn should_cancel_previous_transition_for_same_key() {
        let transitions = Transitions::new();
        let first = transitions.begin(1_usize);
        let second = transitions.begin(1_usize);
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }

    #[test]
    fn should_not_cancel_transitions_for_other_keys() {
        let transitions = Transitions::new();
        let first = transitions.begin(1_usize);
        let _other = transitions.begin(2_usize);
        assert!(!first.is_cancelled());
    }

    #[test]
    fn should_only_run_latest_scheduled_follow_up() {
        let scheduler = QueueScheduler::default();
        let transitions = Transitions::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for label in ["first", "second"] {
            let token = transitions.begin(());
            let log = Rc::clone(&log);
            token.schedule(&scheduler, Duration::from_millis(300), move || {
                log.borrow_mut().push(label);
            });
        }
        scheduler.run_all();

        assert_eq!(*log.borrow(), ["second"]);
    }
}
