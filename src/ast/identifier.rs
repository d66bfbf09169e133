//! Identifier validation
//!
//! Trees built in Rust are trusted as-is. Trees loaded from documents go through
//! the `deserialize_*` helpers below, which reject names Python would not accept.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de::Error as _, Deserialize, Deserializer};

/// `str.isidentifier()`: an XID_Start character (or underscore) followed by XID_Continue characters
static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{XID_Start}_]\p{XID_Continue}*$").unwrap());

pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER_REGEX.is_match(s)
}

/// Dotted names such as `os.path`: every part must be an identifier.
pub fn is_dotted_name(s: &str) -> bool {
    s.split('.').all(is_identifier)
}

pub(crate) fn deserialize_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if is_identifier(&s) {
        Ok(s)
    } else {
        Err(D::Error::custom(format!("Invalid Identifier: {s}")))
    }
}

pub(crate) fn deserialize_identifier_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(deserializer)?;
    match names.iter().find(|name| !is_identifier(name)) {
        Some(bad) => Err(D::Error::custom(format!("Invalid Identifier: {bad}"))),
        None => Ok(names),
    }
}

pub(crate) fn deserialize_optional_identifier<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !is_identifier(&s) => {
            Err(D::Error::custom(format!("Invalid Identifier: {s}")))
        }
        other => Ok(other),
    }
}

pub(crate) fn deserialize_dotted_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if is_dotted_name(&s) {
        Ok(s)
    } else {
        Err(D::Error::custom(format!("Invalid dotted name: {s}")))
    }
}

pub(crate) fn deserialize_optional_dotted_name<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !is_dotted_name(&s) => {
            Err(D::Error::custom(format!("Invalid dotted name: {s}")))
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("__main__"));
        assert!(is_identifier("café"));
        assert!(is_identifier("x1"));
    }

    #[test]
    fn test_not_identifiers() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("a b"));
        assert!(!is_identifier("os.path"));
    }

    #[test]
    fn test_dotted_names() {
        assert!(is_dotted_name("os"));
        assert!(is_dotted_name("os.path"));
        assert!(!is_dotted_name("os..path"));
        assert!(!is_dotted_name(".os"));
    }
}
