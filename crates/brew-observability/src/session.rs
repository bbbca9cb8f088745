//! Session identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier shared by every log line of one browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new session ID.
    ///
    /// Does not read the clock, so it is safe on `wasm32-unknown-unknown`.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        // Stack address gives per-process variation without a clock.
        let marker = 0u8;
        let addr = &marker as *const u8 as u64;

        Self(format!("{:x}-{:04x}", mix(addr ^ n), n))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// splitmix64 finalizer
fn mix(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_string() {
        let id = SessionId::from_string("sess-1");
        assert_eq!(id.as_str(), "sess-1");
        assert_eq!(id.to_string(), "sess-1");
    }
}
