//! Product slugs.
//!
//! A slug is the stable, URL-safe key a product is looked up and routed by.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A unique, URL-safe product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Create a new slug from a string.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Check that the slug is non-empty and only uses `a-z`, `0-9` and `-`.
    pub fn is_url_safe(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Slug {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_creation() {
        let slug = Slug::new("brown-sugar");
        assert_eq!(slug.as_str(), "brown-sugar");
        assert_eq!(slug, "brown-sugar");
    }

    #[test]
    fn test_slug_display() {
        let slug: Slug = "mocha-latte".into();
        assert_eq!(format!("{}", slug), "mocha-latte");
    }

    #[test]
    fn test_slug_url_safe() {
        assert!(Slug::new("americano").is_url_safe());
        assert!(Slug::new("cold-brew-2").is_url_safe());
        assert!(!Slug::new("").is_url_safe());
        assert!(!Slug::new("Brown Sugar").is_url_safe());
        assert!(!Slug::new("a/b").is_url_safe());
    }
}
