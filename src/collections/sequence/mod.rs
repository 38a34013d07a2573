//! `Sequence`: a growable, index-addressable container with acceptance policies.
//!
//! Every graph structure and algorithm in this crate uses `Sequence` as its
//! working list, so its bookkeeping has to be exact:
//! - indices are always contiguous in `[0, len)`;
//! - `len <= capacity`, capacity only grows (by doubling or exact fit) until
//!   [`Sequence::trim_to_size`] is called;
//! - with duplicates refused, no two slots hold equal values;
//! - with nulls refused, no slot holds a null value (see [`Nullable`]).
//!
//! Policy rejections are reported as `false`/`None` from the mutating call and
//! are never errors. Out-of-range indices and reads from an empty sequence are
//! reported as distinct [`SequenceError`] variants.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add` | \(O(1)\) amortized, \(O(n)\) with duplicates refused | equality scan |
//! | `get` / `first` / `last` | \(O(1)\) | |
//! | `set` | \(O(1)\), \(O(n)\) with duplicates refused | |
//! | `remove(index)` | \(O(n)\) | shifts the tail left |
//! | `purge_duplicates` | \(O(n^2)\) | back-to-front scan |
//!
//! Mutation during iteration is prevented by the borrow checker. The
//! unsynchronized `Sequence` relies on `&mut self` for exclusivity; wrap it with
//! [`Sequence::synchronized`] to share one instance between threads.

mod events;
mod policy;
mod sync;


pub use events::{ListenerId, SequenceEvent};
pub use policy::{Nullable, SequencePolicy};
pub use sync::SyncSequence;

use crate::error::SequenceError;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Index;
use events::Listeners;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a [`Sequence`] containing the arguments, in order.
///
/// ```
/// use chromagraph::sequence;
///
/// let seq = sequence![3, 1, 2];
/// assert_eq!(seq.as_slice(), &[3, 1, 2]);
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Sequence::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Sequence::from(vec![$($value),+])
    };
}

/// An ordered, growable container with duplicate/null policies and listeners.
pub struct Sequence<T> {
    items: Vec<T>,
    policy: SequencePolicy,
    listeners: Listeners<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty, permissive sequence.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            policy: SequencePolicy::PERMISSIVE,
            listeners: Listeners::new(),
        }
    }

    /// Creates an empty, permissive sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            policy: SequencePolicy::PERMISSIVE,
            listeners: Listeners::new(),
        }
    }

    /// Creates an empty sequence governed by `policy`.
    pub const fn with_policy(policy: SequencePolicy) -> Self {
        Self {
            items: Vec::new(),
            policy,
            listeners: Listeners::new(),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current capacity. Always `>= len()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// The active acceptance policy.
    #[inline]
    pub fn policy(&self) -> SequencePolicy {
        self.policy
    }

    /// Whether equal values may share the sequence.
    #[inline]
    pub fn accepts_duplicates(&self) -> bool {
        self.policy.accept_duplicates
    }

    /// Whether null values may be stored.
    #[inline]
    pub fn accepts_null_values(&self) -> bool {
        self.policy.accept_null_values
    }

    /// Always `false`; see [`SyncSequence`] for the synchronized form.
    #[inline]
    pub fn is_synchronized(&self) -> bool {
        false
    }

    /// Moves the sequence behind a per-instance lock.
    pub fn synchronized(self) -> SyncSequence<T> {
        SyncSequence::from(self)
    }

    /// Grows the backing storage so at least `min_capacity` elements fit.
    ///
    /// The new capacity is `max(2 * capacity, min_capacity)`.
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        let capacity = self.items.capacity();
        if min_capacity > capacity {
            let target = (capacity * 2).max(min_capacity);
            self.items.reserve_exact(target - self.items.len());
        }
    }

    /// Shrinks the capacity to the logical size.
    pub fn trim_to_size(&mut self) {
        self.items.shrink_to_fit();
    }

    /// Registers a listener; it runs after every subsequent event.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&SequenceEvent<'_, T>) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn check_index(&self, index: usize) -> Result<(), SequenceError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(SequenceError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Returns the element at `index` and fires a read event.
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        self.check_index(index)?;
        let value = &self.items[index];
        self.listeners.notify(&SequenceEvent::Read { index, value });
        Ok(value)
    }

    /// Returns the element at `index`, or `default` when out of range.
    pub fn get_or<'a>(&'a self, index: usize, default: &'a T) -> &'a T {
        self.get(index).unwrap_or(default)
    }

    /// First element.
    ///
    /// # Errors
    /// [`SequenceError::Empty`] on an empty sequence.
    pub fn first(&self) -> Result<&T, SequenceError> {
        self.items.first().ok_or(SequenceError::Empty)
    }

    /// Last element.
    ///
    /// # Errors
    /// [`SequenceError::Empty`] on an empty sequence.
    pub fn last(&self) -> Result<&T, SequenceError> {
        self.items.last().ok_or(SequenceError::Empty)
    }

    /// First element, or `default` when empty.
    pub fn first_or<'a>(&'a self, default: &'a T) -> &'a T {
        self.items.first().unwrap_or(default)
    }

    /// Last element, or `default` when empty.
    pub fn last_or<'a>(&'a self, default: &'a T) -> &'a T {
        self.items.last().unwrap_or(default)
    }

    /// Removes the element at `index`, shifting later elements left.
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, SequenceError> {
        self.check_index(index)?;
        Ok(self.remove_at(index))
    }

    fn remove_at(&mut self, index: usize) -> T {
        let value = self.items.remove(index);
        self.listeners.notify(&SequenceEvent::Removed {
            index,
            value: &value,
        });
        value
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        let index = self.items.len().checked_sub(1)?;
        Some(self.remove_at(index))
    }

    /// Exchanges the elements at `a` and `b`.
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfBounds`] if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), SequenceError> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.items.swap(a, b);
        self.listeners.notify(&SequenceEvent::Swapped { a, b });
        Ok(())
    }

    /// Removes every element, firing one removal event per element (back to front).
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Keeps the first `len` elements.
    pub fn truncate(&mut self, len: usize) {
        while self.items.len() > len {
            self.pop();
        }
    }

    /// Keeps the elements for which `keep` returns `true`.
    ///
    /// Returns the number of elements removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        for index in (0..self.items.len()).rev() {
            if !keep(&self.items[index]) {
                self.remove_at(index);
                removed += 1;
            }
        }
        removed
    }

    /// Iterates the elements in index order.
    ///
    /// Each call starts a fresh pass.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrow the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the sequence, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Sorts in place with `compare`.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
    }

    /// Sorts in place by the extracted key.
    pub fn sort_by_key<K, F>(&mut self, key: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.items.sort_by_key(key);
    }

    /// Reverses the order of the elements.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Shuffles the elements uniformly at random using `rng`.
    pub fn disarray<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
    }

    /// Shuffles the elements with a generator seeded from `seed`.
    pub fn disarray_seeded(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.disarray(&mut rng);
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns `true` if some slot holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Index of the first slot equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    /// Index of the last slot equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().rposition(|item| item == value)
    }

    /// Every index whose slot equals `value`, ascending.
    pub fn search(&self, value: &T) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| (item == value).then_some(index))
            .collect()
    }

    /// Removes the first slot equal to `value`.
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        let index = self.index_of(value)?;
        Some(self.remove_at(index))
    }

    /// Removes every slot equal to `value`. Returns how many were removed.
    pub fn remove_all(&mut self, value: &T) -> usize {
        self.retain(|item| item != value)
    }

    /// Indices holding a value already present at a lower index.
    pub fn duplicates(&self) -> Vec<usize> {
        (0..self.items.len())
            .filter(|&index| self.items[..index].contains(&self.items[index]))
            .collect()
    }

    /// Returns `true` if any two slots hold equal values.
    pub fn has_duplicates(&self) -> bool {
        (1..self.items.len()).any(|index| self.items[..index].contains(&self.items[index]))
    }

    /// Deletes every repeated value, keeping its first occurrence.
    ///
    /// The scan runs from the last index down so removals never disturb slots
    /// that are still to be examined. Returns the number of elements removed.
    pub fn purge_duplicates(&mut self) -> usize {
        let mut removed = 0;
        for index in (1..self.items.len()).rev() {
            if self.items[..index].contains(&self.items[index]) {
                self.remove_at(index);
                removed += 1;
            }
        }
        removed
    }
}

impl<T: Nullable> Sequence<T> {
    /// Indices of the null values.
    pub fn nulls(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| item.is_null().then_some(index))
            .collect()
    }

    /// Returns `true` if any slot holds a null value.
    pub fn has_nulls(&self) -> bool {
        self.items.iter().any(Nullable::is_null)
    }

    /// Deletes every null value, back to front. Returns the number removed.
    pub fn purge_nulls(&mut self) -> usize {
        self.retain(|item| !item.is_null())
    }
}

impl<T: PartialEq + Nullable> Sequence<T> {
    /// Creates a sequence from `items`, dropping whatever `policy` refuses.
    pub fn from_vec_with_policy(items: Vec<T>, policy: SequencePolicy) -> Self {
        let mut seq = Self::from(items);
        seq.set_policy(policy);
        seq
    }

    /// Whether `value` may be stored in a slot other than `skip`.
    fn admits(&self, value: &T, skip: Option<usize>) -> bool {
        if !self.policy.accept_null_values && value.is_null() {
            return false;
        }
        if !self.policy.accept_duplicates {
            let clash = self
                .items
                .iter()
                .enumerate()
                .any(|(index, item)| Some(index) != skip && item == value);
            if clash {
                return false;
            }
        }
        true
    }

    /// Appends `value`. Returns `false` if the policy refuses it.
    pub fn add(&mut self, value: T) -> bool {
        if !self.admits(&value, None) {
            return false;
        }
        self.ensure_capacity(self.items.len() + 1);
        let index = self.items.len();
        self.items.push(value);
        self.listeners.notify(&SequenceEvent::Added {
            index,
            value: &self.items[index],
        });
        true
    }

    /// Appends each value the policy accepts. Returns how many were accepted.
    pub fn add_all<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut accepted = 0;
        for value in values {
            if self.add(value) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// Returns `Ok(false)` if the policy refuses the value.
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfBounds`] if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<bool, SequenceError> {
        let len = self.items.len();
        if index > len {
            return Err(SequenceError::IndexOutOfBounds { index, len });
        }
        if !self.admits(&value, None) {
            return Ok(false);
        }
        self.ensure_capacity(len + 1);
        self.items.insert(index, value);
        self.listeners.notify(&SequenceEvent::Added {
            index,
            value: &self.items[index],
        });
        Ok(true)
    }

    /// Overwrites the slot at `index`.
    ///
    /// Returns `Ok(Some(previous))` on success and `Ok(None)` when the policy
    /// refuses `value` (the slot is left untouched). Storing a value equal to
    /// the one already in the slot is never a duplicate.
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, SequenceError> {
        self.check_index(index)?;
        if !self.admits(&value, Some(index)) {
            return Ok(None);
        }
        let old = core::mem::replace(&mut self.items[index], value);
        self.listeners.notify(&SequenceEvent::Replaced {
            index,
            old: &old,
            new: &self.items[index],
        });
        Ok(Some(old))
    }

    /// Changes the duplicate policy.
    ///
    /// This is a side-effecting setter: refusing duplicates on a sequence that
    /// holds some deletes every repeat (first occurrence survives). Returns the
    /// number of elements deleted.
    pub fn set_accept_duplicates(&mut self, accept: bool) -> usize {
        self.policy.accept_duplicates = accept;
        if accept {
            return 0;
        }
        let removed = self.purge_duplicates();
        if removed > 0 {
            tracing::debug!(removed, "purged duplicates after policy change");
        }
        removed
    }

    /// Changes the null policy.
    ///
    /// Refusing nulls deletes every null already stored. Returns the number of
    /// elements deleted.
    pub fn set_accept_null_values(&mut self, accept: bool) -> usize {
        self.policy.accept_null_values = accept;
        if accept {
            return 0;
        }
        let removed = self.purge_nulls();
        if removed > 0 {
            tracing::debug!(removed, "purged null values after policy change");
        }
        removed
    }

    /// Applies both flags of `policy`. Returns the number of elements deleted.
    pub fn set_policy(&mut self, policy: SequencePolicy) -> usize {
        self.set_accept_null_values(policy.accept_null_values)
            + self.set_accept_duplicates(policy.accept_duplicates)
    }
}

impl<T: Clone> Sequence<T> {
    /// Copies the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones elements and policy; listeners stay with the original.
impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            policy: self.policy,
            listeners: Listeners::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("items", &self.items)
            .field("policy", &self.policy)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Sequence<T> {}

/// Panics on an out-of-range index, like slice indexing. Fires no read event.
impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

/// Builds a permissive sequence; nothing is refused.
impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            policy: SequencePolicy::PERMISSIVE,
            listeners: Listeners::new(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Policy-checked: refused values are skipped.
impl<T: PartialEq + Nullable> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
