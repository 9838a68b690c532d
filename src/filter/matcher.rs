//! Case-insensitive substring predicate shared by filtering and highlighting.

/// A lowercased query, built once per filter run.
///
/// An empty query matches every haystack, so "no filter" needs no special
/// casing at call sites.
///
/// # Example
///
/// ```
/// use devcheat::filter::QueryMatcher;
///
/// let matcher = QueryMatcher::new("SCRIPT");
/// assert!(matcher.matches("JavaScript"));
/// assert!(!matcher.matches("HTML5"));
/// assert!(QueryMatcher::new("").matches("anything"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMatcher {
    needle: String,
}

impl QueryMatcher {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self { needle: query.to_lowercase() }
    }

    /// True if the query occurs in `haystack`, ignoring case.
    #[must_use]
    pub fn matches(&self, haystack: &str) -> bool {
        self.needle.is_empty() || haystack.to_lowercase().contains(&self.needle)
    }

    /// True if the query occurs in any of the given fields.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.needle.is_empty() || fields.into_iter().any(|field| self.matches(field))
    }

    /// Character ranges `(start, end)` (exclusive end) of every
    /// non-overlapping occurrence of the query in `text`.
    ///
    /// Returns no ranges when lowercasing would change the character count of
    /// `text`, since indices into the lowered form would not line up with the
    /// original.
    #[must_use]
    pub fn match_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        if self.needle.is_empty() {
            return vec![];
        }

        let lowered: Vec<char> = text.to_lowercase().chars().collect();
        if lowered.len() != text.chars().count() {
            return vec![];
        }

        let needle: Vec<char> = self.needle.chars().collect();
        let mut ranges = Vec::new();
        let mut start = 0;

        while start + needle.len() <= lowered.len() {
            if lowered[start..start + needle.len()] == needle[..] {
                ranges.push((start, start + needle.len()));
                start += needle.len();
            } else {
                start += 1;
            }
        }

        ranges
    }
}
