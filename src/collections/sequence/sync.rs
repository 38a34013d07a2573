//! `SyncSequence`: a [`Sequence`] whose every operation takes a per-instance lock.
//!
//! This is the synchronized-access form of the container. Each call acquires
//! the lock, runs one operation, and releases it; nothing spans two calls, so a
//! check-then-add is still a race. Compound operations go through
//! [`SyncSequence::with`], which holds the lock for the whole closure.
//!
//! Listeners run while the lock is held. A listener that calls back into the
//! same `SyncSequence` deadlocks.

use super::{ListenerId, Nullable, Sequence, SequenceEvent};
use crate::error::SequenceError;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A sequence shared between threads through a single mutex.
#[derive(Debug)]
pub struct SyncSequence<T> {
    inner: Mutex<Sequence<T>>,
}

impl<T> SyncSequence<T> {
    /// Creates an empty, permissive synchronized sequence.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Sequence::new()),
        }
    }

    // A panicking listener cannot leave the slots half-updated: every event
    // fires after its mutation completed.
    fn lock(&self) -> MutexGuard<'_, Sequence<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Always `true`.
    #[inline]
    pub fn is_synchronized(&self) -> bool {
        true
    }

    /// Releases the lock for good, returning the plain sequence.
    pub fn into_unsynchronized(self) -> Sequence<T> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access for its whole duration.
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut Sequence<T>) -> R,
    {
        f(&mut self.lock())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes the element at `index`.
    ///
    /// # Errors
    /// See [`Sequence::remove`].
    pub fn remove(&self, index: usize) -> Result<T, SequenceError> {
        self.lock().remove(index)
    }

    /// Exchanges two elements.
    ///
    /// # Errors
    /// See [`Sequence::swap`].
    pub fn swap(&self, a: usize, b: usize) -> Result<(), SequenceError> {
        self.lock().swap(a, b)
    }

    /// Registers a listener.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&SequenceEvent<'_, T>) + Send + Sync + 'static,
    {
        self.lock().subscribe(listener)
    }

    /// Removes a listener.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.lock().unsubscribe(id)
    }
}

impl<T: Clone> SyncSequence<T> {
    /// Copies the element at `index` out of the lock.
    ///
    /// # Errors
    /// See [`Sequence::get`].
    pub fn get(&self, index: usize) -> Result<T, SequenceError> {
        self.lock().get(index).cloned()
    }

    /// Copies every element out of the lock.
    pub fn snapshot(&self) -> Vec<T> {
        self.lock().to_vec()
    }
}

impl<T: PartialEq> SyncSequence<T> {
    /// See [`Sequence::contains`].
    pub fn contains(&self, value: &T) -> bool {
        self.lock().contains(value)
    }

    /// See [`Sequence::remove_value`].
    pub fn remove_value(&self, value: &T) -> Option<T> {
        self.lock().remove_value(value)
    }
}

impl<T: PartialEq + Nullable> SyncSequence<T> {
    /// See [`Sequence::add`].
    pub fn add(&self, value: T) -> bool {
        self.lock().add(value)
    }

    /// See [`Sequence::set`].
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len()`.
    pub fn set(&self, index: usize, value: T) -> Result<Option<T>, SequenceError> {
        self.lock().set(index, value)
    }
}

impl<T> Default for SyncSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Sequence<T>> for SyncSequence<T> {
    fn from(seq: Sequence<T>) -> Self {
        Self {
            inner: Mutex::new(seq),
        }
    }
}
