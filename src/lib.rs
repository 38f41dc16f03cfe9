//! # seqkit
//!
//! Generic sequence helpers with a small command-line front end.
//!
//! ## Features
//!
//! - **Dedup**: order-preserving duplicate removal
//! - **Chunk**: fixed-size partitioning with validated sizes
//! - **Frequency**: most frequent element with a deterministic tie-break
//! - **Interleave**: positional merging of two sequences
//!
//! ```
//! use seqkit::{chunk, interleave, most_frequent, remove_duplicates};
//!
//! assert_eq!(remove_duplicates([1, 1, 2]), vec![1, 2]);
//! assert_eq!(chunk([1, 2, 3], 2).unwrap(), vec![vec![1, 2], vec![3]]);
//! assert_eq!(most_frequent(["a", "b", "a"]), Some("a"));
//! assert_eq!(interleave([1, 3], [2]), vec![1, 2, 3]);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod sequence;

// Re-export commonly used types at crate root
pub use error::{Error, Result, SequenceError};

// Re-export the sequence utilities
pub use sequence::{available_operations, chunk, interleave, most_frequent, remove_duplicates};

// Re-export core domain types
pub use crate::core::Item;

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
