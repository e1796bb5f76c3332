/// JSON Resource Descriptor (JRD) types, as returned by a WebFinger server.
///
/// Decoding is lenient: the response is an untrusted document and only JSON
/// syntax errors are fatal. Fields with an unexpected shape decode as absent
/// instead of failing the whole lookup. No RFC 6415 schema checks are made.
use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// A JSON Resource Descriptor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Jrd {
    /// URI identifying the entity described by this JRD.
    #[serde(default, deserialize_with = "lenient::text")]
    pub subject: String,
    /// URIs that identify the same entity as `subject`, in response order.
    #[serde(default, deserialize_with = "lenient::strings")]
    pub aliases: Option<Vec<String>>,
    /// Property URI → value.
    #[serde(default, deserialize_with = "lenient::map")]
    pub properties: Option<BTreeMap<String, String>>,
    /// Links relating to the subject, in response order.
    #[serde(default, deserialize_with = "lenient::links")]
    pub links: Option<Vec<Link>>,
    /// The document exactly as received, for `--json` output.
    #[serde(skip)]
    pub raw: Value,
}

/// A link in a JRD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Link {
    /// The relation type.
    #[serde(default, deserialize_with = "lenient::text")]
    pub rel: String,
    /// The target URI.
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub href: Option<String>,
    /// Media type of the target resource.
    #[serde(default, rename = "type", deserialize_with = "lenient::opt_text")]
    pub media_type: Option<String>,
    /// Language tag (or `"und"`) → title.
    #[serde(default, deserialize_with = "lenient::map")]
    pub titles: Option<BTreeMap<String, String>>,
    /// Property URI → value.
    #[serde(default, deserialize_with = "lenient::map")]
    pub properties: Option<BTreeMap<String, String>>,
}

impl Jrd {
    /// Decode a JRD from an already-parsed JSON document.
    ///
    /// Anything other than a JSON object decodes to an empty descriptor.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` only if the object itself cannot be walked.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let mut jrd = if value.is_object() {
            Self::deserialize(&value)?
        } else {
            Self::default()
        };
        jrd.raw = value;
        Ok(jrd)
    }

    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` when the body is not valid JSON.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_str(body)?)
    }

    /// Re-serialize the original document as compact JSON.
    ///
    /// Numbers keep their parsed form, so `1.0` stays `1.0`.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_compact_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.raw)
    }
}

/// Field deserializers that never reject a well-formed JSON value.
mod lenient {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::Link;

    /// Scalars as display text; JSON `null` renders as `null`.
    fn scalar(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Null | Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => scalar(other).unwrap_or_default(),
        })
    }

    pub fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn strings<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<String>>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        })
    }

    pub fn map<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<BTreeMap<String, String>>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Object(entries) => Some(
                entries
                    .into_iter()
                    .filter_map(|(k, v)| scalar(v).map(|v| (k, v)))
                    .collect(),
            ),
            _ => None,
        })
    }

    pub fn links<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<Link>>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .filter(Value::is_object)
                    .filter_map(|v| Link::deserialize(v).ok())
                    .collect(),
            ),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let jrd = Jrd::from_json(
            r#"{
                "subject": "acct:alice@example.com",
                "aliases": ["https://example.com/@alice"],
                "properties": {"http://example.com/ns/role": "admin"},
                "links": [{
                    "rel": "self",
                    "type": "application/activity+json",
                    "href": "https://example.com/users/alice",
                    "titles": {"en": "Alice"}
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(jrd.subject, "acct:alice@example.com");
        assert_eq!(jrd.aliases.as_deref(), Some(&["https://example.com/@alice".to_owned()][..]));
        assert_eq!(jrd.properties.unwrap()["http://example.com/ns/role"], "admin");
        let links = jrd.links.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].rel, "self");
        assert_eq!(links[0].media_type.as_deref(), Some("application/activity+json"));
        assert_eq!(links[0].titles.as_ref().unwrap()["en"], "Alice");
        assert!(links[0].properties.is_none());
    }

    #[test]
    fn test_wrong_shapes_become_absent() {
        let jrd = Jrd::from_json(
            r#"{"subject": 42, "aliases": "nope", "properties": [1], "links": {"rel": "x"}}"#,
        )
        .unwrap();
        assert_eq!(jrd.subject, "42");
        assert!(jrd.aliases.is_none());
        assert!(jrd.properties.is_none());
        assert!(jrd.links.is_none());
    }

    #[test]
    fn test_bad_entries_dropped() {
        let jrd = Jrd::from_json(
            r#"{"subject": "s", "aliases": ["a", 1, null, "b"], "links": ["x", {"rel": "r", "href": 5}]}"#,
        )
        .unwrap();
        assert_eq!(jrd.aliases.unwrap(), vec!["a".to_owned(), "b".to_owned()]);
        let links = jrd.links.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].rel, "r");
        assert!(links[0].href.is_none());
    }

    #[test]
    fn test_null_property_value() {
        let jrd = Jrd::from_json(r#"{"subject": "s", "properties": {"p": null, "q": {}}}"#).unwrap();
        let props = jrd.properties.unwrap();
        assert_eq!(props["p"], "null");
        assert!(!props.contains_key("q"));
    }

    #[test]
    fn test_non_object_document() {
        let jrd = Jrd::from_json("[1, 2]").unwrap();
        assert_eq!(jrd.subject, "");
        assert!(jrd.links.is_none());
        assert_eq!(jrd.to_compact_json().unwrap(), "[1,2]");
    }

    #[test]
    fn test_malformed_json() {
        assert!(Jrd::from_json("{\"subject\": ").is_err());
        assert!(Jrd::from_json("<html>").is_err());
    }

    #[test]
    fn test_raw_numbers_keep_parsed_form() {
        let jrd = Jrd::from_json(r#"{"subject": "s", "n": 1.0, "m": 2}"#).unwrap();
        assert_eq!(jrd.to_compact_json().unwrap(), r#"{"subject":"s","n":1.0,"m":2}"#);
    }

    #[test]
    fn test_raw_round_trip_keeps_order_and_unknown_fields() {
        let body = r#"{"subject":"acct:dave@example.com","zeta":true,"aliases":["x"]}"#;
        let jrd = Jrd::from_json(body).unwrap();
        assert_eq!(jrd.to_compact_json().unwrap(), body);
    }
}
