//! Query string parsing module
//!
//! Decodes `application/x-www-form-urlencoded` query strings into a map.
//! A key that appears once maps to a single string; a repeated key
//! accumulates its values into an array. Decoding is best-effort:
//! malformed percent escapes pass through literally and invalid UTF-8 is
//! replaced, never rejected.

use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// A decoded query value: single string or array for repeated keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

/// Parse a raw query string (without the leading `?`) into a map.
///
/// A pair without `=` maps the bare key to the empty string. Empty pairs
/// produced by `&&` are skipped.
pub fn parse_query(raw: &str) -> HashMap<String, QueryValue> {
    let mut map = HashMap::new();

    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(key);
        let value = decode_component(value);

        match map.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(QueryValue::Single(value));
            }
            Entry::Occupied(mut slot) => {
                let prev = std::mem::replace(slot.get_mut(), QueryValue::Multiple(Vec::new()));
                let values = match prev {
                    QueryValue::Single(first) => vec![first, value],
                    QueryValue::Multiple(mut list) => {
                        list.push(value);
                        list
                    }
                };
                *slot.get_mut() = QueryValue::Multiple(values);
            }
        }
    }

    map
}

/// Percent-decode one key or value; `+` decodes as a space.
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        // Malformed escape, keep the literal byte
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(s: &str) -> QueryValue {
        QueryValue::Single(s.to_string())
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn test_parse_single_pair() {
        let map = parse_query("name=Sam");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("name"), Some(&single("Sam")));
    }

    #[test]
    fn test_parse_multiple_pairs() {
        let map = parse_query("a=1&b=2");
        assert_eq!(map.get("a"), Some(&single("1")));
        assert_eq!(map.get("b"), Some(&single("2")));
    }

    #[test]
    fn test_repeated_key_becomes_array() {
        let map = parse_query("tag=x&tag=y&tag=z");
        assert_eq!(
            map.get("tag"),
            Some(&QueryValue::Multiple(vec![
                "x".to_string(),
                "y".to_string(),
                "z".to_string()
            ]))
        );
    }

    #[test]
    fn test_bare_key_maps_to_empty_string() {
        let map = parse_query("flag&name=Sam");
        assert_eq!(map.get("flag"), Some(&single("")));
        assert_eq!(map.get("name"), Some(&single("Sam")));
    }

    #[test]
    fn test_empty_value() {
        let map = parse_query("a=");
        assert_eq!(map.get("a"), Some(&single("")));
    }

    #[test]
    fn test_skips_empty_pairs() {
        let map = parse_query("a=1&&b=2");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_percent_decoding() {
        let map = parse_query("msg=hello%20world&sym=%26%3D");
        assert_eq!(map.get("msg"), Some(&single("hello world")));
        assert_eq!(map.get("sym"), Some(&single("&=")));
    }

    #[test]
    fn test_plus_decodes_as_space() {
        let map = parse_query("q=rust+lang");
        assert_eq!(map.get("q"), Some(&single("rust lang")));
    }

    #[test]
    fn test_decoded_key() {
        let map = parse_query("my%20key=v");
        assert_eq!(map.get("my key"), Some(&single("v")));
    }

    #[test]
    fn test_malformed_escape_passes_through() {
        let map = parse_query("a=%zz&b=100%");
        assert_eq!(map.get("a"), Some(&single("%zz")));
        assert_eq!(map.get("b"), Some(&single("100%")));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        // %FF is not valid UTF-8 on its own
        let map = parse_query("a=%FF");
        assert_eq!(map.get("a"), Some(&single("\u{FFFD}")));
    }

    #[test]
    fn test_serialize_single_as_string() {
        let json = serde_json::to_string(&single("Sam")).unwrap();
        assert_eq!(json, r#""Sam""#);
    }

    #[test]
    fn test_serialize_multiple_as_array() {
        let value = QueryValue::Multiple(vec!["x".to_string(), "y".to_string()]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"["x","y"]"#);
    }
}
