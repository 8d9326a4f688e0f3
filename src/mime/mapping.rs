//! Content-type mapping value type

/// A single glob pattern -> MIME type association.
///
/// Immutable once created. Built-in mappings carry no encoding and priority 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeMapping {
    /// Glob pattern used as the lookup key, e.g. `*.js`
    pub pattern: String,
    /// MIME type to record for assets matching the pattern
    pub mime_type: String,
    /// Content encoding, absent for all built-in mappings
    pub encoding: Option<String>,
    /// Echo of the pattern string this mapping was declared with
    pub source_pattern: String,
    /// Reserved for tie-breaking between overlapping declarations; not
    /// consulted during resolution
    pub priority: i32,
}

impl ContentTypeMapping {
    /// Create a caller-declared mapping
    pub fn new(pattern: &str, mime_type: &str, encoding: Option<String>, priority: i32) -> Self {
        Self {
            pattern: pattern.to_string(),
            mime_type: mime_type.to_string(),
            encoding,
            source_pattern: pattern.to_string(),
            priority,
        }
    }

    /// Create a built-in mapping (no encoding, priority 1)
    pub(crate) fn built_in(pattern: &str, mime_type: &str) -> Self {
        Self::new(pattern, mime_type, None, 1)
    }
}
