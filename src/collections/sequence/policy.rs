//! Acceptance policies for [`Sequence`](super::Sequence).

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::Arc;

/// Which values a sequence accepts on `add`/`set`/`insert`.
///
/// Both flags default to `true`. Turning a flag *off* on a live sequence is a
/// side-effecting operation: see
/// [`Sequence::set_accept_duplicates`](super::Sequence::set_accept_duplicates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencePolicy {
    /// Whether two slots may hold equal values.
    pub accept_duplicates: bool,
    /// Whether null values (see [`Nullable`]) may be stored.
    pub accept_null_values: bool,
}

impl SequencePolicy {
    /// Accepts everything.
    pub const PERMISSIVE: Self = Self {
        accept_duplicates: true,
        accept_null_values: true,
    };

    /// Rejects duplicates and nulls; the sequence behaves like an ordered set.
    pub const SET: Self = Self {
        accept_duplicates: false,
        accept_null_values: false,
    };

    /// Sets the duplicate flag.
    #[must_use]
    pub const fn accept_duplicates(mut self, accept: bool) -> Self {
        self.accept_duplicates = accept;
        self
    }

    /// Sets the null flag.
    #[must_use]
    pub const fn accept_null_values(mut self, accept: bool) -> Self {
        self.accept_null_values = accept;
        self
    }
}

impl Default for SequencePolicy {
    fn default() -> Self {
        Self::PERMISSIVE
    }
}

/// Values that may represent "no value".
///
/// The default method reports every value as present, so opting a type in is a
/// one-line `impl Nullable for MyType {}`. `Option<T>` treats `None` as null and
/// raw pointers treat the null address as null; smart pointers and references
/// delegate to their target.
pub trait Nullable {
    /// Returns `true` if this value stands for "no value".
    fn is_null(&self) -> bool {
        false
    }
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Rc<T> {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Arc<T> {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T> Nullable for Vec<T> {}

macro_rules! never_null {
    ($($ty:ty),* $(,)?) => {
        $(impl Nullable for $ty {})*
    };
}

never_null!(
    (), bool, char, str, String, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
    f32, f64,
);
