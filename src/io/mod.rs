//! I/O utilities for seqkit.
//!
//! Provides reading of item lists from files and streams.

pub mod reader;

pub use reader::{read_items, read_items_from, split_tokens};
