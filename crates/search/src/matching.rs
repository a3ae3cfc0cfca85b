//! Case-insensitive substring matching.

/// A lowercased search query.
///
/// The query is lowercased once on construction so that filtering a list only
/// lowercases the candidate fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    raw: String,
    lowered: String,
}

impl Query {
    /// Create a query from user input. The text is used as-is apart from case.
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let lowered = raw.to_lowercase();
        Self { raw, lowered }
    }

    /// The query as the user typed it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// An empty query matches everything.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns true if the query occurs in `text`, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.lowered)
    }

    /// Returns true if the query occurs in at least one field.
    ///
    /// `None` fields are treated as empty text, so they only match an empty query.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        if self.is_empty() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.is_some_and(|text| self.matches(text)))
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// One-off case-insensitive substring test.
pub fn contains_ignore_case(text: &str, needle: &str) -> bool {
    Query::new(needle).matches(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_query_matches_everything() {
        let query = Query::new("");
        assert!(query.matches(""));
        assert!(query.matches("anything"));
        assert!(query.matches_any([None, None]));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(contains_ignore_case("Matcha Paradise Café", "paradise"));
        assert!(contains_ignore_case("matcha paradise", "PARADISE"));
        assert!(contains_ignore_case("Café Kitsuné", "CAFÉ"));
    }

    #[test]
    fn test_substring_not_fuzzy() {
        assert!(!contains_ignore_case("Matcha", "mtch"));
        assert!(!contains_ignore_case("Green Tea", "tea green"));
    }

    #[test]
    fn test_whitespace_is_significant() {
        assert!(!contains_ignore_case("Soho", " soho"));
    }

    #[test]
    fn test_matches_any_skips_missing_fields() {
        let query = Query::new("soho");
        assert!(query.matches_any([Some("Tea Bar"), None, Some("12 Soho Square")]));
        assert!(!query.matches_any([Some("Tea Bar"), None, Some("Camden")]));
    }

    #[test]
    fn test_keeps_raw_text() {
        let query = Query::new("Kyoto");
        assert_eq!(query.as_str(), "Kyoto");
    }

    proptest! {
        #[test]
        fn prop_text_always_contains_itself(text in "\\PC{0,24}") {
            prop_assert!(contains_ignore_case(&text, &text));
        }

        #[test]
        fn prop_case_of_text_does_not_matter(text in "[a-zA-Z ]{1,24}") {
            let query = Query::new(text.to_uppercase());
            prop_assert!(query.matches(&text.to_lowercase()));
        }
    }
}
