//! Item representation for seqkit.
//!
//! Items are the concrete elements the CLI feeds into the generic sequence
//! utilities. A token written in canonical integer form becomes an integer
//! item; anything else is kept as text, so output shows tokens as typed.

use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A single sequence element parsed from user input.
///
/// Serializes untagged, so integers become JSON numbers and text becomes
/// JSON strings.
///
/// # Examples
///
/// ```
/// use seqkit::core::Item;
///
/// assert_eq!(Item::parse("42"), Item::Int(42));
/// assert_eq!(Item::parse("apple"), Item::Text("apple".to_string()));
/// assert_eq!(Item::parse(" -7 ").to_string(), "-7");
/// assert_eq!(Item::parse("007"), Item::Text("007".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Item {
    /// A signed integer.
    Int(i64),
    /// Any other token, verbatim.
    Text(String),
}

impl Item {
    /// Parses a token, trimming surrounding whitespace first.
    ///
    /// Only tokens that print back identically become [`Item::Int`];
    /// `"007"`, `"+7"` and `"-0"` stay text.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        match token.parse::<i64>() {
            Ok(n) if n.to_string() == token => Self::Int(n),
            _ => Self::Text(token.to_string()),
        }
    }
}

impl FromStr for Item {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Item {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Parses every non-empty token into an [`Item`].
pub fn parse_items<'a, I>(tokens: I) -> Vec<Item>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(Item::parse)
        .collect()
}

/// Formats items as a bracketed list, e.g. `[1, 2, apple]`.
#[must_use]
pub fn display_list(items: &[Item]) -> String {
    let inner: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", inner.join(", "))
}
