//! Sequence utilities for seqkit.
//!
//! Four pure, stateless functions over ordered sequences of any element type:
//!
//! - **Dedup**: [`remove_duplicates`] keeps the first occurrence of each element
//! - **Chunk**: [`chunk`] partitions into consecutive groups of bounded size
//! - **Frequency**: [`most_frequent`] finds the element with the highest count
//! - **Interleave**: [`interleave`] alternates elements from two sequences
//!
//! Every function accepts any [`IntoIterator`], so arrays, vectors, slices and
//! iterators all work. An absent sequence is the empty one: callers holding an
//! `Option<Vec<T>>` can pass `opt.into_iter().flatten()`.

pub mod chunk;
pub mod dedup;
pub mod frequency;
pub mod interleave;

pub use chunk::{MIN_CHUNK_SIZE, chunk};
pub use dedup::remove_duplicates;
pub use frequency::most_frequent;
pub use interleave::interleave;

/// Lists the names of the available operations.
#[must_use]
pub fn available_operations() -> Vec<&'static str> {
    vec!["remove_duplicates", "chunk", "most_frequent", "interleave"]
}
