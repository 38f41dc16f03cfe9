//! Positional interleaving of two sequences.

/// Alternates elements from `first` and `second`, starting with `first`.
///
/// Once the shorter sequence runs out, the remaining elements of the longer
/// one are appended in order.
///
/// # Examples
///
/// ```
/// use seqkit::sequence::interleave;
///
/// assert_eq!(interleave([1, 3, 5], [2, 4, 6]), vec![1, 2, 3, 4, 5, 6]);
/// assert_eq!(
///     interleave(["a", "b"], ["1", "2", "3", "4"]),
///     vec!["a", "1", "b", "2", "3", "4"]
/// );
/// ```
pub fn interleave<A, B>(first: A, second: B) -> Vec<A::Item>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    itertools::interleave(first, second).collect()
}
