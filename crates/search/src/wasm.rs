//! WASM bindings for search utilities.

use wasm_bindgen::prelude::*;

/// Check if `text` contains `query`, ignoring case.
#[wasm_bindgen]
pub fn text_matches(query: &str, text: &str) -> bool {
    crate::contains_ignore_case(text, query)
}

/// Check a query against a JSON array of nullable strings.
///
/// Returns true when at least one non-null entry contains the query.
#[wasm_bindgen]
pub fn fields_match(query: &str, fields_json: &str) -> Result<bool, JsValue> {
    let fields: Vec<Option<String>> = serde_json::from_str(fields_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let query = crate::Query::new(query);
    Ok(query.matches_any(fields.iter().map(Option::as_deref)))
}
