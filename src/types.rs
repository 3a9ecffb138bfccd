//! Common helpers shared across resources
//!
//! Tag normalization/encoding for path segments and serialization of
//! typed search parameters into query pairs.

use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Normalize a player/clan/tournament tag: uppercase with a leading `#`.
///
/// Accepts tags with or without the leading `#` and in any case, the way
/// players usually paste them.
pub fn normalize_tag(tag: &str) -> String {
    let stripped = tag.trim().trim_start_matches('#');
    format!("#{}", stripped.to_uppercase())
}

/// Percent-encode a normalized tag for use as a URL path segment.
///
/// `#` is the only character in a tag that needs escaping.
pub(crate) fn encode_tag(tag: &str) -> String {
    normalize_tag(tag).replace('#', "%23")
}

/// Flatten a serializable parameter struct into query pairs.
///
/// Parameter structs use `#[serde(rename_all = "camelCase")]`, which is
/// what turns the crate's snake_case fields into the API's camelCase
/// query parameters. `None` fields are skipped.
pub(crate) fn to_query_pairs<P: Serialize>(params: &P) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params)?;
    let mut pairs = Vec::new();
    if let Value::Object(map) = value {
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => pairs.push((key, s)),
                other => pairs.push((key, other.to_string())),
            }
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("2q8ccp0", "#2Q8CCP0" ; "bare lowercase")]
    #[test_case("#2q8ccp0", "#2Q8CCP0" ; "hash lowercase")]
    #[test_case("#2Q8CCP0", "#2Q8CCP0" ; "already normalized")]
    #[test_case(" #9g9jl8qu ", "#9G9JL8QU" ; "surrounding whitespace")]
    fn test_normalize_tag(input: &str, expected: &str) {
        assert_eq!(normalize_tag(input), expected);
    }

    #[test]
    fn test_encode_tag() {
        assert_eq!(encode_tag("#2Q8CCP0"), "%232Q8CCP0");
        assert_eq!(encode_tag("2q8ccp0"), "%232Q8CCP0");
    }

    #[test]
    fn test_to_query_pairs_camel_case() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            name: Option<String>,
            min_members: Option<u32>,
            location_id: Option<u64>,
        }

        let pairs = to_query_pairs(&Params {
            name: Some("Legend".into()),
            min_members: Some(40),
            location_id: None,
        })
        .unwrap();

        assert!(pairs.contains(&("name".to_string(), "Legend".to_string())));
        assert!(pairs.contains(&("minMembers".to_string(), "40".to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "locationId"));
    }
}
