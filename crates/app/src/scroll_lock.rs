//! Reference-counted page scroll lock.
//!
//! Several overlays (drawer, lightbox) may suspend background scrolling at
//! once. Each holds a [`ScrollLockGuard`]; the viewport is unlocked only when
//! the last guard is dropped.

use std::cell::Cell;
use std::rc::Rc;

use crate::ports::Viewport;

/// Shared lock over the page's scrolling.
pub struct ScrollLock<V: Viewport> {
    holders: Rc<Cell<usize>>,
    viewport: Rc<V>,
}

impl<V: Viewport> Clone for ScrollLock<V> {
    fn clone(&self) -> Self {
        Self {
            holders: Rc::clone(&self.holders),
            viewport: Rc::clone(&self.viewport),
        }
    }
}

impl<V: Viewport> ScrollLock<V> {
    #[must_use]
    pub fn new(viewport: Rc<V>) -> Self {
        Self {
            holders: Rc::new(Cell::new(0)),
            viewport,
        }
    }

    /// Take a hold on the lock, locking the viewport if nobody held it.
    #[must_use]
    pub fn acquire(&self) -> ScrollLockGuard<V> {
        let holders = self.holders.get();
        self.holders.set(holders + 1);
        if holders == 0 {
            tracing::trace!("page scroll locked");
            self.viewport.set_scroll_locked(true);
        }
        ScrollLockGuard { lock: self.clone() }
    }

    /// Number of live guards.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.get()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    fn release(&self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        if holders == 0 {
            tracing::trace!("page scroll unlocked");
            self.viewport.set_scroll_locked(false);
        }
    }
}

/// A hold on the [`ScrollLock`], released on drop.
#[must_use = "dropping the guard releases the scroll lock immediately"]
pub struct ScrollLockGuard<V: Viewport> {
    lock: ScrollLock<V>,
}

impl<V: Viewport> Drop for ScrollLockGuard<V> {
    fn drop(&mut self) {
        self.lock.release();
    }
}
