//! Querystring encoding for list endpoints.
//!
//! List filters are flat key/value sets, so plain `key=value` pairs joined
//! with `&` cover the whole contract; values are percent-encoded.

/// Encode pairs into a querystring, without the leading `?`.
pub fn encode_pairs(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build a list-endpoint path: `endpoint?page=..&limit=..<&filters>`.
pub fn paged_path(endpoint: &str, page: u32, limit: u32, filters: &[(&str, String)]) -> String {
    let mut pairs = vec![("page", page.to_string()), ("limit", limit.to_string())];
    pairs.extend(filters.iter().map(|(k, v)| (*k, v.clone())));
    format!("{}?{}", endpoint, encode_pairs(&pairs))
}
