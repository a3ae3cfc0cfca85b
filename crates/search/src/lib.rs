//! Text filtering for matcha spot listings.
//!
//! Matching is a plain case-insensitive substring test: no tokenization, no
//! fuzzy matching, no scoring. A query matches a record when it occurs in at
//! least one of the record's fields; missing fields count as empty text.
//!
//! # Example
//!
//! ```
//! use matcha_search::Query;
//!
//! let query = Query::new("Kyo");
//! assert!(query.matches_any([Some("Kyoto Matcha Bar"), None]));
//! assert!(!query.matches_any([Some("Tea House"), Some("Soho")]));
//! ```

mod matching;

#[cfg(feature = "wasm")]
mod wasm;

pub use matching::{contains_ignore_case, Query};
