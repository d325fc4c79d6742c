//! URL utility functions for reading query parameters

use std::collections::HashMap;

use web_sys::window;

/// Get all query parameters from the current URL (`window.location.search`)
pub fn get_query_params() -> HashMap<String, String> {
    window()
        .and_then(|w| w.location().search().ok())
        .map(|search| parse_query(&search))
        .unwrap_or_default()
}

/// Parse a query string (with or without the leading `?`).
///
/// Values are URL-decoded; a key without `=` maps to an empty string. When a
/// key repeats, the first occurrence wins.
pub fn parse_query(search: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let query_string = search.strip_prefix('?').unwrap_or(search);

    for pair in query_string.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        let decoded = urlencoding::decode(value)
            .unwrap_or_else(|_| value.into())
            .into_owned();
        params.entry(key.to_string()).or_insert(decoded);
    }

    params
}
