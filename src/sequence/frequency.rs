//! Frequency counting.

use std::collections::HashMap;
use std::hash::Hash;

/// Returns the most frequent element, or `None` for an empty sequence.
///
/// Ties are broken deterministically: scanning the input in order with
/// running counts, the winner is the first element whose count reaches the
/// final maximum. For `[a, b, b, a]` that is `b`, which reaches two at index 2
/// while `a` only gets there at index 3.
///
/// # Examples
///
/// ```
/// use seqkit::sequence::most_frequent;
///
/// let words = ["apple", "banana", "apple", "cherry", "apple", "banana"];
/// assert_eq!(most_frequent(words), Some("apple"));
/// assert_eq!(most_frequent(Vec::<i32>::new()), None);
/// ```
pub fn most_frequent<I>(items: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let mut counts: HashMap<I::Item, usize> = HashMap::new();
    let mut best: Option<(I::Item, usize)> = None;

    for item in items {
        let count = counts.entry(item.clone()).or_insert(0);
        *count += 1;
        let count = *count;
        // Strictly greater keeps the earliest element to reach each count.
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((item, count));
        }
    }

    best.map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_frequent_words() {
        let input = ["apple", "banana", "apple", "cherry", "apple", "banana"];
        assert_eq!(most_frequent(input), Some("apple"));
    }

    #[test]
    fn test_most_frequent_single() {
        assert_eq!(most_frequent([42]), Some(42));
    }

    #[test]
    fn test_most_frequent_empty() {
        assert_eq!(most_frequent(Vec::<String>::new()), None);
    }

    #[test]
    fn test_most_frequent_tie_first_to_reach_max() {
        assert_eq!(most_frequent(["a", "b", "b", "a"]), Some("b"));
        assert_eq!(most_frequent(["a", "b", "a", "b"]), Some("a"));
    }

    #[test]
    fn test_most_frequent_all_distinct() {
        assert_eq!(most_frequent([7, 8, 9]), Some(7));
    }

    #[test]
    fn test_most_frequent_late_winner() {
        assert_eq!(most_frequent([1, 2, 3, 3, 1, 3]), Some(3));
    }
}
