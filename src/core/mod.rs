//! Core domain models for seqkit.
//!
//! Holds the concrete element type used by the command-line front end.
//! Pure data with no I/O dependencies.

pub mod item;

pub use item::{Item, display_list, parse_items};
