//! Shared model types and serde helpers

use serde::Deserialize;

/// One page of a cursor-paginated listing response.
///
/// Every listing endpoint wraps its results in this envelope; the `after`
/// cursor, when present, identifies the next page.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl<T> Page<T> {
    /// Cursor of the page after this one, if any
    pub fn after_cursor(&self) -> Option<&str> {
        self.paging
            .as_ref()
            .and_then(|p| p.cursors.as_ref())
            .and_then(|c| c.after.as_deref())
    }
}

/// Paging block of a listing response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub cursors: Option<Cursors>,
}

/// Opaque pagination cursors
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cursors {
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
}

/// An arena (trophy bracket)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arena {
    pub id: u64,
    pub name: String,
}

/// A game mode
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMode {
    pub id: u64,
    pub name: String,
}

/// Icon URLs attached to cards and badges
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconUrls {
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// An achievement badge on a player profile
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub name: String,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub progress: Option<i64>,
    #[serde(default)]
    pub target: Option<i64>,
    #[serde(default)]
    pub icon_urls: Option<IconUrls>,
}

/// Serde helpers for the API's compact timestamp format
/// (`20240131T235959.000Z`).
pub(crate) mod compact_time {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    const FORMAT: &str = "%Y%m%dT%H%M%S%.3fZ";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }

    /// `Option<DateTime<Utc>>` flavour, for fields that may be absent
    pub(crate) mod option {
        use super::{DateTime, NaiveDateTime, Utc, FORMAT};
        use serde::{Deserialize, Deserializer};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = Option::<String>::deserialize(deserializer)?;
            raw.map(|s| {
                NaiveDateTime::parse_from_str(&s, FORMAT)
                    .map(|naive| naive.and_utc())
                    .map_err(serde::de::Error::custom)
            })
            .transpose()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn test_page_envelope_with_cursor() {
        let page: Page<u32> = serde_json::from_value(json!({
            "items": [1, 2, 3],
            "paging": { "cursors": { "after": "eyJwb3MiOjN9" } }
        }))
        .unwrap();

        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.after_cursor(), Some("eyJwb3MiOjN9"));
    }

    #[test]
    fn test_page_envelope_last_page() {
        let page: Page<u32> = serde_json::from_value(json!({
            "items": [4, 5],
            "paging": { "cursors": {} }
        }))
        .unwrap();

        assert_eq!(page.after_cursor(), None);
    }

    #[test]
    fn test_page_envelope_missing_fields() {
        let page: Page<u32> = serde_json::from_value(json!({})).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.after_cursor(), None);
    }

    #[test]
    fn test_compact_time_parses() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(with = "compact_time")]
            at: chrono::DateTime<chrono::Utc>,
        }

        let wrapper: Wrapper =
            serde_json::from_value(json!({ "at": "20240131T235959.000Z" })).unwrap();
        assert_eq!(wrapper.at.year(), 2024);
        assert_eq!(wrapper.at.month(), 1);
        assert_eq!(wrapper.at.day(), 31);
        assert_eq!(wrapper.at.hour(), 23);
    }
}
