//! Fixed-size partitioning of sequences.

use crate::error::{Result, SequenceError};
use std::mem;

/// Smallest accepted chunk size.
pub const MIN_CHUNK_SIZE: isize = 1;

/// Partitions a sequence into consecutive groups of at most `size` elements.
///
/// Order is preserved and only the final group may be shorter than `size`.
/// The size is validated before the input is looked at, so an invalid size
/// fails even for an empty sequence, while an empty sequence with a valid
/// size yields no groups.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `size` is less than 1.
///
/// # Examples
///
/// ```
/// use seqkit::sequence::chunk;
///
/// let groups = chunk(1..=7, 3).unwrap();
/// assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
///
/// assert!(chunk([1, 2, 3], 0).is_err());
/// ```
pub fn chunk<I>(items: I, size: isize) -> Result<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
{
    if size < MIN_CHUNK_SIZE {
        return Err(SequenceError::invalid_argument("chunk size must be at least 1").into());
    }
    let size = size.unsigned_abs();

    let mut groups = Vec::new();
    let mut current = Vec::new();
    for item in items {
        current.push(item);
        if current.len() == size {
            groups.push(mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    Ok(groups)
}
