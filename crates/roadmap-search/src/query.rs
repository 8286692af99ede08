//! Query normalisation and matching.

/// A search query, lowercased once so it can be tested against many texts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    /// Raw query string as typed.
    raw: String,

    /// Lowercased needle.
    needle: String,
}

impl Query {
    /// Normalise a query string.
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            needle: raw.to_lowercase(),
        }
    }

    /// The query as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Only the empty string is an empty query; whitespace is matched literally.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether the query is a case-insensitive substring of `text`.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }
}
