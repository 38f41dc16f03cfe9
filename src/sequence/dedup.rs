//! Order-preserving deduplication.

use itertools::Itertools;
use std::hash::Hash;

/// Removes duplicate elements, keeping each distinct element once in order
/// of first occurrence.
///
/// # Examples
///
/// ```
/// use seqkit::sequence::remove_duplicates;
///
/// let unique = remove_duplicates([1, 2, 2, 3, 3, 3, 4, 5, 5]);
/// assert_eq!(unique, vec![1, 2, 3, 4, 5]);
/// ```
pub fn remove_duplicates<I>(items: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    items.into_iter().unique().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_duplicates_integers() {
        assert_eq!(remove_duplicates([1, 2, 2, 3, 3, 3, 4]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_remove_duplicates_preserves_order() {
        let input = ["apple", "banana", "apple", "cherry", "banana"];
        assert_eq!(
            remove_duplicates(input),
            vec!["apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_remove_duplicates_empty() {
        let empty: Vec<String> = Vec::new();
        assert!(remove_duplicates(empty).is_empty());
    }

    #[test]
    fn test_remove_duplicates_borrowed_slice() {
        let owned = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let unique = remove_duplicates(&owned);
        assert_eq!(unique, vec![&owned[0], &owned[1]]);
        // Input is untouched.
        assert_eq!(owned.len(), 3);
    }

    #[test]
    fn test_remove_duplicates_no_duplicates() {
        assert_eq!(remove_duplicates(vec![3, 1, 2]), vec![3, 1, 2]);
    }
}
