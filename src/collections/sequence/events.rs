//! Change notification for [`Sequence`](super::Sequence).
//!
//! Listeners are plain callbacks kept in registration order. They run
//! synchronously, after the operation that produced the event has completed,
//! so a listener always observes the sequence in its post-operation state.

use core::fmt;

/// Something that happened to a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceEvent<'a, T> {
    /// `value` now lives at `index` (append or insert).
    Added {
        /// Slot of the new value.
        index: usize,
        /// The stored value.
        value: &'a T,
    },
    /// `value` was read through `get`.
    Read {
        /// Slot that was read.
        index: usize,
        /// The value at that slot.
        value: &'a T,
    },
    /// The slot at `index` changed from `old` to `new`.
    Replaced {
        /// Slot that was overwritten.
        index: usize,
        /// Value before the write.
        old: &'a T,
        /// Value after the write.
        new: &'a T,
    },
    /// `value` was removed from `index`; later elements moved one slot left.
    Removed {
        /// Former slot of the value.
        index: usize,
        /// The removed value.
        value: &'a T,
    },
    /// The values at `a` and `b` traded places.
    Swapped {
        /// First slot.
        a: usize,
        /// Second slot.
        b: usize,
    },
}

impl<T> SequenceEvent<'_, T> {
    /// `true` for events that changed the sequence.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Read { .. })
    }
}

/// Handle returned by [`Sequence::subscribe`](super::Sequence::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener<T> = Box<dyn Fn(&SequenceEvent<'_, T>) + Send + Sync>;

/// Registered callbacks of one sequence.
pub(crate) struct Listeners<T> {
    next_id: u64,
    entries: Vec<(ListenerId, Listener<T>)>,
}

impl<T> Listeners<T> {
    pub(crate) const fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&SequenceEvent<'_, T>) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        before != self.entries.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn notify(&self, event: &SequenceEvent<'_, T>) {
        for (_, listener) in &self.entries {
            listener(event);
        }
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
