//! Cache Key Module
//!
//! Builds colon-namespaced keys such as `students:list:42`.

use std::fmt;

/// Separator between key segments
pub const KEY_SEPARATOR: char = ':';

// == Cache Key ==
/// Colon-separated cache key built segment by segment.
///
/// ```
/// use academy_cache::cache::CacheKey;
///
/// let key = CacheKey::new("students").push("list").push(42);
/// assert_eq!(key.to_string(), "students:list:42");
/// assert_eq!(CacheKey::new("students").prefix(), "students:");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    segments: Vec<String>,
}

impl CacheKey {
    /// Starts a key in the given namespace.
    pub fn new(namespace: impl fmt::Display) -> Self {
        Self {
            segments: vec![namespace.to_string()],
        }
    }

    /// Appends a segment.
    pub fn push(mut self, segment: impl fmt::Display) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Renders the key with a trailing separator, for prefix invalidation.
    pub fn prefix(&self) -> String {
        let mut prefix = self.to_string();
        prefix.push(KEY_SEPARATOR);
        prefix
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", KEY_SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.to_string()
    }
}
