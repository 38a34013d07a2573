//! Container primitives shared by the graph model and its algorithms.
//!
//! - `sequence`: the policy-checked [`Sequence`] list and its locked
//!   counterpart [`SyncSequence`]

pub mod sequence;

pub use sequence::{ListenerId, Nullable, Sequence, SequenceEvent, SequencePolicy, SyncSequence};
