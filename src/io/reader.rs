//! Item list reading.
//!
//! Reads whitespace- or comma-separated tokens from files or any reader and
//! turns them into [`Item`]s.

use crate::core::{Item, parse_items};
use crate::error::{IoError, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Maximum input size accepted from a file or stream (64MB).
const MAX_INPUT_SIZE: u64 = 64 * 1024 * 1024;

/// Name reported for stream input in errors.
const STREAM_LABEL: &str = "<stdin>";

/// Splits text into tokens on commas and any whitespace, dropping empties.
///
/// # Examples
///
/// ```
/// use seqkit::io::split_tokens;
///
/// assert_eq!(split_tokens("1, 2\n3,,4"), vec!["1", "2", "3", "4"]);
/// ```
#[must_use]
pub fn split_tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Reads items from a file.
///
/// # Errors
///
/// Returns an error if the file doesn't exist, can't be read, is too large,
/// or isn't valid UTF-8.
pub fn read_items<P: AsRef<Path>>(path: P) -> Result<Vec<Item>> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if !path_ref.exists() {
        return Err(IoError::FileNotFound { path: path_str }.into());
    }

    let size = fs::metadata(path_ref)
        .map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?
        .len();
    if size > MAX_INPUT_SIZE {
        return Err(IoError::ReadFailed {
            path: path_str,
            reason: format!("file too large: {size} bytes (max: {MAX_INPUT_SIZE} bytes)"),
        }
        .into());
    }

    let content = fs::read_to_string(path_ref).map_err(|e| IoError::ReadFailed {
        path: path_str.clone(),
        reason: e.to_string(),
    })?;

    let items = parse_items(split_tokens(&content));
    tracing::debug!(path = %path_str, count = items.len(), "read items from file");
    Ok(items)
}

/// Reads items from any reader (e.g. stdin).
///
/// # Errors
///
/// Returns an error if reading fails, the input exceeds the size limit, or
/// the content isn't valid UTF-8.
pub fn read_items_from<R: Read>(reader: R) -> Result<Vec<Item>> {
    let mut bytes = Vec::new();
    // One byte past the limit is enough to tell oversized input apart.
    reader
        .take(MAX_INPUT_SIZE + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| IoError::Generic(e.to_string()))?;

    if u64::try_from(bytes.len()).unwrap_or(u64::MAX) > MAX_INPUT_SIZE {
        return Err(IoError::ReadFailed {
            path: STREAM_LABEL.to_string(),
            reason: format!("input too large: more than {MAX_INPUT_SIZE} bytes"),
        }
        .into());
    }

    let content = String::from_utf8(bytes).map_err(|e| IoError::Generic(e.to_string()))?;
    Ok(parse_items(split_tokens(&content)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_split_tokens() {
        assert_eq!(split_tokens("a b\tc"), vec!["a", "b", "c"]);
        assert_eq!(split_tokens(" ,, \n"), Vec::<&str>::new());
        assert_eq!(split_tokens("1,2,3"), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_read_items_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1, 2, 2").unwrap();
        writeln!(file, "apple banana").unwrap();

        let items = read_items(file.path()).unwrap();
        assert_eq!(
            items,
            vec![
                Item::Int(1),
                Item::Int(2),
                Item::Int(2),
                Item::from("apple"),
                Item::from("banana"),
            ]
        );
    }

    #[test]
    fn test_read_items_missing_file() {
        let err = read_items("/nonexistent/seqkit/items.txt").unwrap_err();
        assert!(matches!(err, Error::Io(IoError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_items_empty_file() {
        let file = NamedTempFile::new().unwrap();
        assert!(read_items(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_items_from_reader() {
        let input = "3\n1\n4\n".as_bytes();
        let items = read_items_from(input).unwrap();
        assert_eq!(items, vec![Item::Int(3), Item::Int(1), Item::Int(4)]);
    }

    #[test]
    fn test_read_items_from_rejects_oversized_input() {
        let input = std::io::repeat(b'a').take(MAX_INPUT_SIZE + 1);
        let err = read_items_from(input).unwrap_err();
        match err {
            Error::Io(IoError::ReadFailed { path, reason }) => {
                assert_eq!(path, STREAM_LABEL);
                assert!(reason.contains("input too large"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_items_from_keeps_tokens_at_limit() {
        let tail = " b c";
        let head = usize::try_from(MAX_INPUT_SIZE).unwrap() - tail.len();
        let input = std::io::repeat(b'a').take(head as u64).chain(tail.as_bytes());
        let items = read_items_from(input).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], Item::from("b"));
        assert_eq!(items[2], Item::from("c"));
    }

    #[test]
    fn test_read_items_from_invalid_utf8() {
        let input: &[u8] = &[0xff, 0xfe];
        let err = read_items_from(input).unwrap_err();
        assert!(matches!(err, Error::Io(IoError::Generic(_))));
    }
}
