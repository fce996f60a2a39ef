use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::errors::AppError;

/// In-memory mirror of one remote table.
///
/// The remote store is authoritative; this list is a cache that is only
/// mutated after a confirmed remote write. The in-flight flag makes
/// mutating operations exclusive with respect to themselves - one save per
/// content type at a time - while lists for different content types stay
/// fully independent.
pub struct ContentList<T> {
    items: RwLock<Vec<T>>,
    in_flight: AtomicBool,
}

impl<T: Clone> ContentList<T> {
    pub fn new() -> Self {
        ContentList {
            items: RwLock::new(Vec::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.items.read().clone()
    }

    /// Swaps in a freshly loaded list wholesale.
    pub fn replace(&self, items: Vec<T>) {
        *self.items.write() = items;
    }

    pub fn push(&self, item: T) {
        self.items.write().push(item);
    }

    pub fn patch<F>(&self, mut apply: F)
    where
        F: FnMut(&mut T),
    {
        for item in self.items.write().iter_mut() {
            apply(item);
        }
    }

    pub fn retain<F>(&self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.write().retain(keep);
    }

    /// Claims the in-flight flag for one mutating operation. Fails with
    /// `SaveInProgress` while another mutation of this list is running;
    /// the flag clears when the returned guard drops.
    pub fn begin_write(&self) -> Result<InFlightGuard<'_>, AppError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(AppError::SaveInProgress);
        }
        Ok(InFlightGuard {
            flag: &self.in_flight,
        })
    }

    /// Exposed so the UI can disable its submit controls.
    pub fn is_saving(&self) -> bool {
        self.in_flight.load(Ordering::Relaxed)
    }
}

impl<T: Clone> Default for ContentList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
